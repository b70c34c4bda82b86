use crate::controllers::explorer::Explorer;
use crate::controllers::input_controller::Transition;
use crate::controllers::ports::presenter::FramePresenter;
use crate::core::actions::generate_frame::generate_frame::FrameError;
use std::error::Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FrameLoopError {
    #[error(transparent)]
    Frame(#[from] FrameError),
    #[error("presenter failed: {0}")]
    Presenter(Box<dyn Error + Send + Sync>),
}

/// Generates, presents, polls, and applies until a command asks to exit.
///
/// Every command polled after a frame is applied before the next frame is
/// generated. Commands following an exit in the same poll are dropped.
/// Returns the number of frames rendered.
pub fn run_frame_loop<P: FramePresenter + ?Sized>(
    explorer: &mut Explorer,
    presenter: &mut P,
) -> Result<u64, FrameLoopError> {
    loop {
        explorer.render_frame()?;

        if let Some(report) = explorer.report() {
            presenter
                .present(&report)
                .map_err(FrameLoopError::Presenter)?;
        }

        let commands = presenter
            .poll_commands()
            .map_err(FrameLoopError::Presenter)?;

        for command in commands {
            if explorer.apply(command) == Transition::Exit {
                log::info!("exit after {} frames", explorer.frames_rendered());
                return Ok(explorer.frames_rendered());
            }
        }
    }
}
