//! Windowed explorer.
//!
//! winit owns the window and keyboard, pixels the framebuffer, and egui the
//! status overlay.

mod app;
pub mod keymap;

pub use app::{GuiError, run_gui};
