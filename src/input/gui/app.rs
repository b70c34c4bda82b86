use crate::config::{ConfigError, ExplorerConfig};
use crate::controllers::explorer::Explorer;
use crate::controllers::frame_loop::{FrameLoopError, run_frame_loop};
use crate::presenters::pixels::presenter::PixelsPresenter;
use thiserror::Error;
use winit::dpi::PhysicalSize;
use winit::error::{EventLoopError, OsError};
use winit::event_loop::EventLoop;
use winit::window::{Window, WindowBuilder};

#[derive(Debug, Error)]
pub enum GuiError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to create event loop: {0}")]
    EventLoop(#[from] EventLoopError),
    #[error("failed to create window: {0}")]
    Window(#[from] OsError),
    #[error("failed to create pixels surface: {0}")]
    Pixels(#[from] pixels::Error),
    #[error(transparent)]
    FrameLoop(#[from] FrameLoopError),
}

/// Opens the explorer window and runs until exit is requested.
pub fn run_gui(config: &ExplorerConfig) -> Result<(), GuiError> {
    let mut explorer = Explorer::from_config(config)?;
    let event_loop = EventLoop::new()?;

    // pixels needs the window for the lifetime of the surface.
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("Fractal Viewer")
            .with_inner_size(PhysicalSize::new(config.width, config.height))
            .with_resizable(false)
            .build(&event_loop)?,
    ));

    let mut presenter = PixelsPresenter::new(event_loop, window, config.width, config.height)?;
    let frames = run_frame_loop(&mut explorer, &mut presenter)?;

    log::info!("window closed after {frames} frames");

    Ok(())
}
