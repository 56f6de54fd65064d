// crates/controls_core/src/renderer/mod.rs
pub mod context;

use std::sync::Arc;

use controls_shared::Color;
use winit::window::Window;

use self::context::GraphicsContext;
use crate::error::PlatformError;

/// Presents one frame: clear to the screen's fill color, then the egui
/// output (the recorded screen plus any overlay windows) on top.
pub struct Renderer {
    ctx: GraphicsContext,
    pub gui_renderer: egui_wgpu::Renderer,
}

impl Renderer {
    pub async fn new(window: Arc<Window>) -> Result<Self, PlatformError> {
        let ctx = GraphicsContext::new(window).await?;
        let gui_renderer = egui_wgpu::Renderer::new(&ctx.device, ctx.config.format, None, 1);

        Ok(Self { ctx, gui_renderer })
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        self.ctx.resize(new_size);
    }

    pub fn render(
        &mut self,
        background: Color,
        gui: (&egui::Context, &[egui::ClippedPrimitive], &egui::TexturesDelta),
    ) -> Result<(), wgpu::SurfaceError> {
        let (gui_ctx, primitives, delta) = gui;

        let output = self.ctx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self.ctx.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

        for (id, image_delta) in &delta.set {
            self.gui_renderer
                .update_texture(&self.ctx.device, &self.ctx.queue, *id, image_delta);
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.ctx.config.width, self.ctx.config.height],
            pixels_per_point: gui_ctx.pixels_per_point(),
        };

        self.gui_renderer.update_buffers(
            &self.ctx.device,
            &self.ctx.queue,
            &mut encoder,
            primitives,
            &screen_descriptor,
        );

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Screen Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear_color(background, self.ctx.is_srgb())),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.gui_renderer
                .render(&mut pass, primitives, &screen_descriptor);
        }

        for id in &delta.free {
            self.gui_renderer.free_texture(id);
        }

        self.ctx.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(())
    }
}

/// Clear values are linear; an sRGB target re-encodes them on write.
fn clear_color(color: Color, srgb_target: bool) -> wgpu::Color {
    let channel = |c: u8| {
        let v = f64::from(c) / 255.0;
        if srgb_target {
            srgb_to_linear(v)
        } else {
            v
        }
    };
    wgpu::Color {
        r: channel(color.r),
        g: channel(color.g),
        b: channel(color.b),
        a: 1.0,
    }
}

fn srgb_to_linear(v: f64) -> f64 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}
