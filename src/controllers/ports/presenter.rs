use crate::controllers::command::Command;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::view::view_state::ViewState;
use std::error::Error;
use std::time::Duration;

/// Everything a presenter may show for one generated frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameReport<'a> {
    pub frame_number: u64,
    pub buffer: &'a PixelBuffer,
    pub view: &'a ViewState,
    pub render_duration: Duration,
    /// Iteration count at the viewport centre, where the view offset lies.
    pub centre_iterations: Option<u32>,
}

/// Displays frames and supplies the commands decoded from user input.
pub trait FramePresenter {
    fn present(&mut self, frame: &FrameReport<'_>) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Commands received since the last poll, oldest first.
    fn poll_commands(&mut self) -> Result<Vec<Command>, Box<dyn Error + Send + Sync>>;
}
