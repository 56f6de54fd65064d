// crates/controls_core/src/platform_runner.rs

use std::sync::Arc;
use std::time::Instant;

use winit::dpi::LogicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

use crate::app::App;
use crate::error::PlatformError;
use crate::frame_loop::FramePacer;
use crate::gui::{self, GuiSystem};
use crate::input::{GamepadPoller, InputDefaults, InputPoller};
use crate::inspector;
use crate::renderer::Renderer;
use crate::ui::DrawList;

/// Owns App and runs the platform (winit) event loop.
/// This isolates OS interaction from the screens and controllers.
pub struct PlatformRunner {
    app: App,
    gui: GuiSystem,
}

impl PlatformRunner {
    pub fn new(app: App) -> Self {
        Self {
            app,
            gui: GuiSystem::new(),
        }
    }

    pub fn start(mut self) -> Result<(), PlatformError> {
        let event_loop = EventLoop::new()?;
        let size = self.app.config().window_size;
        let window = Arc::new(
            WindowBuilder::new()
                .with_title(self.app.caption())
                .with_inner_size(LogicalSize::new(size.x, size.y))
                .with_resizable(false)
                .build(&event_loop)?,
        );

        // GUI + renderer initialization
        self.gui.init(&window);
        let mut renderer = pollster::block_on(Renderer::new(Arc::clone(&window)))?;
        tracing::info!("Window {}x{} ready", size.x, size.y);

        let mut input_poller = InputPoller::new();
        let mut gamepads = GamepadPoller::new();
        let mut pacer = FramePacer::new(self.app.config().fps, Instant::now());
        let mut scene = DrawList::new();
        let mut caption = self.app.caption();

        event_loop.run(move |event, elwt| {
            // Give GUI first shot at all window events (for focus, etc.).
            if let Event::WindowEvent { event: ref w_event, .. } = event {
                self.gui.handle_event(&window, w_event);
            }

            match event {
                Event::WindowEvent { event: win_event, .. } => match win_event {
                    // Low-level input: delegate to InputPoller unless GUI owns keyboard.
                    WindowEvent::KeyboardInput { .. } => {
                        if !self.gui.wants_keyboard_input() {
                            input_poller.handle_event(&win_event);
                        }
                    }

                    WindowEvent::Resized(size) => renderer.resize(size),

                    WindowEvent::RedrawRequested => {
                        let mut inspector_open = self.gui.show_inspector;
                        let (primitives, textures_delta) = self.gui.draw(&window, |ctx| {
                            gui::paint_draw_list(ctx, &scene);
                            inspector::show(
                                ctx,
                                self.app.gameplay_controller(),
                                self.app.last_survey(),
                                &mut inspector_open,
                            );
                        });
                        self.gui.show_inspector = inspector_open;

                        match renderer.render(
                            scene.background(),
                            (&self.gui.ctx, primitives.as_slice(), &textures_delta),
                        ) {
                            Ok(()) => {}
                            Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                                tracing::warn!("Surface lost/outdated. Reconfiguring swapchain.");
                                renderer.resize(window.inner_size());
                            }
                            Err(wgpu::SurfaceError::OutOfMemory) => {
                                tracing::error!("Out of GPU memory. Exiting.");
                                elwt.exit();
                            }
                            Err(wgpu::SurfaceError::Timeout) => {
                                tracing::warn!("Surface timeout. Skipping this frame.");
                            }
                        }
                    }

                    // Close requests and focus changes go through the poller too.
                    other => input_poller.handle_event(&other),
                },

                Event::AboutToWait => {
                    if pacer.tick(Instant::now()) {
                        input_poller.set_gamepad(gamepads.poll());
                        let input = input_poller.take_frame();

                        if !self.app.is_capturing()
                            && input.key_downs().any(|key| key == InputDefaults::INSPECTOR_KEY)
                        {
                            self.gui.toggle_inspector();
                        }

                        if !self.app.frame(&input, &mut scene) {
                            tracing::info!("Shutting down");
                            elwt.exit();
                            return;
                        }

                        if self.app.caption() != caption {
                            caption = self.app.caption();
                            window.set_title(caption);
                        }
                        window.request_redraw();
                    }
                    elwt.set_control_flow(ControlFlow::WaitUntil(pacer.deadline()));
                }

                _ => {}
            }
        })?;

        Ok(())
    }
}
