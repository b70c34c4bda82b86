use crate::config::{ConfigError, ExplorerConfig};
use crate::controllers::command::Command;
use crate::controllers::input_controller::{InputController, Transition};
use crate::controllers::ports::presenter::FrameReport;
use crate::core::actions::generate_frame::generate_frame::{FrameError, FrameGenerator};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::colour_mapping::factory::colour_map_factory;
use crate::core::view::view_state::ViewState;
use std::time::{Duration, Instant};

/// One exploration session: the view, the frame buffer, and what drives them.
///
/// The buffer is allocated once for the fixed viewport and overwritten by
/// every frame.
#[derive(Debug)]
pub struct Explorer {
    view: ViewState,
    buffer: PixelBuffer,
    generator: FrameGenerator,
    controller: InputController,
    frames_rendered: u64,
    last_render_duration: Option<Duration>,
}

impl Explorer {
    #[must_use]
    pub fn new(generator: FrameGenerator, controller: InputController, view: ViewState) -> Self {
        Self {
            view,
            buffer: PixelBuffer::new(generator.viewport()),
            generator,
            controller,
            frames_rendered: 0,
            last_render_duration: None,
        }
    }

    pub fn from_config(config: &ExplorerConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let engine = config.engine()?;
        let colour_map = colour_map_factory(
            config.palette,
            engine.max_iterations(),
            config.log_band_tuning(),
        );
        let generator = FrameGenerator::new(config.viewport()?, engine, colour_map);

        log::info!(
            "explorer {}x{}, {} iterations, escape radius² {}, palette {}, starting with {}",
            config.width,
            config.height,
            config.max_iterations,
            config.escape_radius_squared,
            config.palette,
            config.initial_variant
        );

        Ok(Self::new(
            generator,
            config.input_controller(),
            config.initial_view(),
        ))
    }

    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    #[must_use]
    pub fn generator(&self) -> &FrameGenerator {
        &self.generator
    }

    #[must_use]
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Regenerates the whole buffer from the current view.
    pub fn render_frame(&mut self) -> Result<Duration, FrameError> {
        let start = Instant::now();
        self.generator.generate_into(&self.view, &mut self.buffer)?;
        let elapsed = start.elapsed();

        self.frames_rendered += 1;
        self.last_render_duration = Some(elapsed);
        log::debug!(
            "frame {} rendered in {} ms",
            self.frames_rendered,
            elapsed.as_millis()
        );

        Ok(elapsed)
    }

    pub fn apply(&mut self, command: Command) -> Transition {
        self.controller.apply(&mut self.view, command)
    }

    #[must_use]
    pub fn centre_iterations(&self) -> Option<u32> {
        self.generator
            .iterations_at(&self.view, self.generator.viewport().centre())
    }

    /// Summary of the most recent frame. `None` before the first frame.
    #[must_use]
    pub fn report(&self) -> Option<FrameReport<'_>> {
        self.last_render_duration.map(|render_duration| FrameReport {
            frame_number: self.frames_rendered,
            buffer: &self.buffer,
            view: &self.view,
            render_duration,
            centre_iterations: self.centre_iterations(),
        })
    }
}
