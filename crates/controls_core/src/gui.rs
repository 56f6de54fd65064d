// crates/controls_core/src/gui.rs
use controls_shared::{Color, Rect};
use egui::{Align2, Color32, Context, FontId, LayerId, Stroke};
use winit::{event::WindowEvent, window::Window};

use crate::ui::{DrawCommand, DrawList, Image};

pub struct GuiSystem {
    pub ctx: Context,
    // State is an Option because it requires the Window to be created first
    state: Option<egui_winit::State>,
    pub show_inspector: bool,
}

impl GuiSystem {
    pub fn new() -> Self {
        Self {
            ctx: Context::default(),
            state: None,
            show_inspector: false,
        }
    }

    /// Initialize the integration once the window exists
    pub fn init(&mut self, window: &Window) {
        self.state = Some(egui_winit::State::new(
            self.ctx.clone(),
            egui::ViewportId::ROOT,
            window,
            Some(window.scale_factor() as f32),
            None,
        ));
    }

    /// Forward window events to egui
    pub fn handle_event(&mut self, window: &Window, event: &WindowEvent) {
        if let Some(state) = &mut self.state {
            let _ = state.on_window_event(window, event);
        }
    }

    pub fn wants_keyboard_input(&self) -> bool {
        self.ctx.wants_keyboard_input()
    }

    pub fn toggle_inspector(&mut self) {
        self.show_inspector = !self.show_inspector;
    }

    /// Prepare the frame, run the UI closure, and output draw data.
    /// Before `init` there is nothing to draw into, so the output is empty.
    pub fn draw(
        &mut self,
        window: &Window,
        run_ui: impl FnOnce(&Context),
    ) -> (Vec<egui::ClippedPrimitive>, egui::TexturesDelta) {
        let Some(state) = self.state.as_mut() else {
            return (Vec::new(), egui::TexturesDelta::default());
        };

        let raw_input = state.take_egui_input(window);
        self.ctx.begin_frame(raw_input);

        // Run the actual UI logic passed by the caller
        run_ui(&self.ctx);

        let output = self.ctx.end_frame();

        state.handle_platform_output(window, output.platform_output);

        let primitives = self.ctx.tessellate(output.shapes, output.pixels_per_point);
        (primitives, output.textures_delta)
    }
}

impl Default for GuiSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// Paints a recorded frame on egui's background layer, beneath any windows.
/// The background fill itself is the renderer's clear color.
pub fn paint_draw_list(ctx: &Context, list: &DrawList) {
    let painter = ctx.layer_painter(LayerId::background());

    for command in list.commands() {
        match command {
            DrawCommand::Blit {
                image: Image::Solid { size, color },
                position,
            } => {
                painter.rect_filled(to_egui_rect(Rect::new(*position, *size)), 0.0, to_color32(*color));
            }
            DrawCommand::Blit {
                image: Image::Text { text, color, font_size },
                position,
            } => {
                painter.text(
                    egui::pos2(position.x, position.y),
                    Align2::LEFT_TOP,
                    text,
                    FontId::monospace(*font_size),
                    to_color32(*color),
                );
            }
            DrawCommand::Outline { rect, color, width } => {
                painter.rect_stroke(to_egui_rect(*rect), 0.0, Stroke::new(*width, to_color32(*color)));
            }
        }
    }
}

fn to_egui_rect(rect: Rect) -> egui::Rect {
    let max = rect.max();
    egui::Rect::from_min_max(egui::pos2(rect.min.x, rect.min.y), egui::pos2(max.x, max.y))
}

fn to_color32(color: Color) -> Color32 {
    Color32::from_rgb(color.r, color.g, color.b)
}
