//! Input adapters for the fractal viewer.
//!
//! Translate device input into explorer commands.

pub mod gui;
