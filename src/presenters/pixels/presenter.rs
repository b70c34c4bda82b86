use crate::controllers::command::Command;
use crate::controllers::ports::presenter::{FramePresenter, FrameReport};
use crate::core::data::complex::Complex;
use crate::core::fractals::variant::FractalKind;
use crate::input::gui::keymap::{KEY_HELP, command_for_event};
use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use egui_winit::State as EguiWinitState;
use pixels::wgpu;
use pixels::{Pixels, SurfaceTexture};
use std::error::Error;
use std::time::Duration;
use winit::event::{Event, WindowEvent};
use winit::event_loop::EventLoop;
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::Window;

/// What the overlay shows about the last presented frame.
#[derive(Debug, Clone, Copy, PartialEq)]
struct FrameStatus {
    frame_number: u64,
    kind: FractalKind,
    offset: Complex,
    zoom_delta: f64,
    julia_constant: Option<Complex>,
    render_duration: Duration,
    centre_iterations: Option<u32>,
}

impl From<&FrameReport<'_>> for FrameStatus {
    fn from(frame: &FrameReport<'_>) -> Self {
        Self {
            frame_number: frame.frame_number,
            kind: frame.view.kind(),
            offset: frame.view.offset(),
            zoom_delta: frame.view.zoom_delta(),
            julia_constant: frame.view.variant().julia_constant(),
            render_duration: frame.render_duration,
            centre_iterations: frame.centre_iterations,
        }
    }
}

/// Presents frames in a fixed-size window and reads the keyboard.
///
/// Owns the event loop and pumps it while polling, so the explorer's frame
/// loop stays in charge.
pub struct PixelsPresenter {
    event_loop: EventLoop<()>,
    window: &'static Window,
    pixels: Pixels<'static>,
    egui_ctx: EguiContext,
    egui_state: EguiWinitState,
    egui_renderer: EguiRenderer,
    status: Option<FrameStatus>,
}

impl PixelsPresenter {
    pub fn new(
        event_loop: EventLoop<()>,
        window: &'static Window,
        width: u32,
        height: u32,
    ) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(width, height, surface_texture)?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None,
            1,
        );

        let egui_ctx = EguiContext::default();
        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            &event_loop,
            Some(window.scale_factor() as f32),
            None,
        );

        Ok(Self {
            event_loop,
            window,
            pixels,
            egui_ctx,
            egui_state,
            egui_renderer,
            status: None,
        })
    }

    fn update_ui(&mut self) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(self.window);
        let status = self.status;

        self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Fractal Viewer")
                .default_pos([10.0, 10.0])
                .default_size([240.0, 260.0])
                .show(ctx, |ui| {
                    if let Some(status) = status {
                        ui.label(format!("Fractal: {}", status.kind));
                        ui.label(format!("Centre: {}", status.offset));
                        ui.label(format!("Zoom delta: {:.6}", status.zoom_delta));
                        if let Some(c) = status.julia_constant {
                            ui.label(format!("Julia constant: {c}"));
                        }
                        if let Some(iterations) = status.centre_iterations {
                            ui.label(format!("Centre iterations: {iterations}"));
                        }
                        ui.label(format!(
                            "Frame {}: {} ms",
                            status.frame_number,
                            status.render_duration.as_millis()
                        ));
                    }

                    ui.separator();
                    egui::Grid::new("key_help").show(ui, |ui| {
                        for (keys, action) in KEY_HELP {
                            ui.label(*keys);
                            ui.label(*action);
                            ui.end_row();
                        }
                    });
                });
        })
    }

    /// Draws the framebuffer with the overlay on top.
    fn draw(&mut self) -> Result<(), pixels::Error> {
        let egui_output = self.update_ui();

        self.egui_state
            .handle_platform_output(self.window, egui_output.platform_output);

        let size = self.window.inner_size();
        let egui_ctx = &self.egui_ctx;
        let egui_renderer = &mut self.egui_renderer;

        self.pixels.render_with(|encoder, render_target, context| {
            context.scaling_renderer.render(encoder, render_target);

            let clipped_primitives =
                egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels: [size.width, size.height],
                pixels_per_point: egui_ctx.pixels_per_point(),
            };

            let textures_delta = egui_output.textures_delta;

            for (id, delta) in &textures_delta.set {
                egui_renderer.update_texture(&context.device, &context.queue, *id, delta);
            }

            egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                egui_renderer.render(&mut render_pass, &clipped_primitives, &screen_descriptor);
            }

            for id in &textures_delta.free {
                egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }
}

impl FramePresenter for PixelsPresenter {
    fn present(&mut self, frame: &FrameReport<'_>) -> Result<(), Box<dyn Error + Send + Sync>> {
        frame.buffer.copy_to_rgba(self.pixels.frame_mut())?;
        self.status = Some(FrameStatus::from(frame));
        self.draw()?;

        Ok(())
    }

    /// Waits for input, redrawing the last frame whenever the window asks.
    ///
    /// Returns once at least one command has arrived.
    fn poll_commands(&mut self) -> Result<Vec<Command>, Box<dyn Error + Send + Sync>> {
        let mut commands = Vec::new();

        while commands.is_empty() {
            let mut redraw = false;
            let window = self.window;
            let egui_state = &mut self.egui_state;

            let status = self.event_loop.pump_events(None, |event, _| {
                let Event::WindowEvent { event, window_id } = event else {
                    return;
                };

                if window_id != window.id() {
                    return;
                }

                let response = egui_state.on_window_event(window, &event);
                redraw |= response.repaint;

                match event {
                    WindowEvent::CloseRequested => commands.push(Command::Exit),
                    WindowEvent::RedrawRequested => redraw = true,
                    WindowEvent::KeyboardInput { event, .. } => {
                        match command_for_event(&event) {
                            Some(command) => commands.push(command),
                            None => log::trace!("ignored key {:?}", event.physical_key),
                        }
                    }
                    _ => {}
                }
            });

            if let PumpStatus::Exit(code) = status {
                log::info!("event loop exited with code {code}");
                commands.push(Command::Exit);
            }

            if redraw && commands.is_empty() {
                self.draw()?;
            }
        }

        Ok(commands)
    }
}
