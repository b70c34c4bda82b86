use crate::config::{DEFAULT_HEIGHT, DEFAULT_WIDTH, ExplorerConfig};
use crate::controllers::command::Command;
use crate::controllers::input_controller::{DEFAULT_MOVE_STEP, DEFAULT_PARAM_STEP, DEFAULT_ZOOM_STEP};
use crate::core::data::complex::Complex;
use crate::core::fractals::colour_mapping::kinds::PaletteKind;
use crate::core::fractals::colour_mapping::maps::log_band::{DEFAULT_BLUE, DEFAULT_RED_GAIN};
use crate::core::fractals::escape_time::{DEFAULT_ESCAPE_RADIUS_SQUARED, DEFAULT_MAX_ITERATIONS};
use crate::core::fractals::variant::FractalKind;
use crate::core::view::view_state::DEFAULT_ZOOM_DELTA;
use clap::Parser;

/// Escape-time fractal explorer
/// Renders Mandelbrot and Julia sets and lets the view be panned, zoomed
/// and, for Julia, reshaped by nudging the constant.
#[derive(Debug, Clone, Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Viewport width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Viewport height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Iteration cap per point
    #[arg(short = 'i', long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub max_iterations: u32,

    /// Squared escape radius
    #[arg(long, default_value_t = DEFAULT_ESCAPE_RADIUS_SQUARED)]
    pub escape_radius_squared: f64,

    /// Zoom delta at startup
    #[arg(long, default_value_t = DEFAULT_ZOOM_DELTA, allow_negative_numbers = true)]
    pub zoom_delta: f64,

    /// Plane units moved per pan command
    #[arg(long, default_value_t = DEFAULT_MOVE_STEP)]
    pub move_step: f64,

    /// Zoom delta change per zoom command
    #[arg(long, default_value_t = DEFAULT_ZOOM_STEP)]
    pub zoom_step: f64,

    /// Julia constant change per adjustment command
    #[arg(long, default_value_t = DEFAULT_PARAM_STEP)]
    pub param_step: f64,

    /// Colour palette
    #[arg(short, long, value_enum, default_value_t = PaletteKind::default())]
    pub palette: PaletteKind,

    /// Red gain of the log band palette
    #[arg(long, default_value_t = DEFAULT_RED_GAIN, allow_negative_numbers = true)]
    pub red_gain: f64,

    /// Blue channel of the log band palette
    #[arg(long, default_value_t = DEFAULT_BLUE)]
    pub blue: u8,

    /// Fractal shown at startup
    #[arg(short, long, value_enum, default_value_t = FractalKind::default())]
    pub fractal: FractalKind,

    /// Real part of the first Julia constant
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub julia_real: f64,

    /// Imaginary part of the first Julia constant
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub julia_imag: f64,

    /// Commands to replay between frames, comma separated (headless runner only)
    #[arg(short, long, value_delimiter = ',')]
    pub commands: Vec<Command>,
}

impl Cli {
    #[must_use]
    pub fn config(&self) -> ExplorerConfig {
        ExplorerConfig {
            width: self.width,
            height: self.height,
            max_iterations: self.max_iterations,
            escape_radius_squared: self.escape_radius_squared,
            initial_zoom_delta: self.zoom_delta,
            move_step: self.move_step,
            zoom_step: self.zoom_step,
            param_step: self.param_step,
            palette: self.palette,
            red_gain: self.red_gain,
            blue: self.blue,
            initial_variant: self.fractal,
            julia_seed: Complex::new(self.julia_real, self.julia_imag),
        }
    }
}
