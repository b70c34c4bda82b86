pub mod cli;
pub mod config;
pub mod controllers;
pub mod core;
#[cfg(feature = "gui")]
pub mod input;
pub mod presenters;

pub use cli::Cli;
pub use config::{ConfigError, ExplorerConfig};
pub use controllers::command::{Command, ParseCommandError};
pub use controllers::explorer::Explorer;
pub use controllers::frame_loop::{FrameLoopError, run_frame_loop};
pub use controllers::input_controller::{InputController, Transition};
pub use controllers::ports::presenter::{FramePresenter, FrameReport};
pub use crate::core::actions::generate_frame::generate_frame::{FrameError, FrameGenerator};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelSample};
pub use crate::core::data::point::Point;
pub use crate::core::data::viewport::Viewport;
pub use crate::core::fractals::colour_mapping::kinds::PaletteKind;
pub use crate::core::fractals::escape_time::EscapeTimeEngine;
pub use crate::core::fractals::variant::{FractalKind, FractalVariant};
pub use crate::core::view::view_state::ViewState;
#[cfg(feature = "gui")]
pub use input::gui::run_gui;
pub use presenters::scripted::presenter::ScriptedPresenter;
