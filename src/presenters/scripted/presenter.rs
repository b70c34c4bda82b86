use crate::controllers::command::Command;
use crate::controllers::ports::presenter::{FramePresenter, FrameReport};
use std::collections::VecDeque;
use std::error::Error;
use std::time::Duration;

/// Windowless presenter that replays a fixed command script.
///
/// Hands out one scripted command after each frame, then asks to exit.
/// Frames are logged, never drawn.
#[derive(Debug, Default)]
pub struct ScriptedPresenter {
    script: VecDeque<Command>,
    frames_presented: u64,
    total_render_time: Duration,
}

impl ScriptedPresenter {
    #[must_use]
    pub fn new(script: impl IntoIterator<Item = Command>) -> Self {
        Self {
            script: script.into_iter().collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    #[must_use]
    pub fn total_render_time(&self) -> Duration {
        self.total_render_time
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl FramePresenter for ScriptedPresenter {
    fn present(&mut self, frame: &FrameReport<'_>) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.frames_presented += 1;
        self.total_render_time += frame.render_duration;

        let centre = frame
            .centre_iterations
            .map_or_else(|| "-".to_string(), |n| n.to_string());

        log::info!(
            "frame {}: {} ms, {} at {} (zoom delta {}), centre iterations {}",
            frame.frame_number,
            frame.render_duration.as_millis(),
            frame.view.kind(),
            frame.view.offset(),
            frame.view.zoom_delta(),
            centre
        );

        if let Some(c) = frame.view.variant().julia_constant() {
            log::info!("julia constant {c}");
        }

        Ok(())
    }

    fn poll_commands(&mut self) -> Result<Vec<Command>, Box<dyn Error + Send + Sync>> {
        Ok(vec![self.script.pop_front().unwrap_or(Command::Exit)])
    }
}
