use crate::core::actions::generate_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::colour_mapping::kinds::PaletteKind;

pub const DEFAULT_RED_GAIN: f64 = 10.0;
pub const DEFAULT_GREEN: u8 = 0;
pub const DEFAULT_BLUE: u8 = 100;
pub const DEFAULT_ALPHA: u8 = 0;

/// The adjustable constants of the log band transfer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogBandTuning {
    pub red_gain: f64,
    pub blue: u8,
}

impl Default for LogBandTuning {
    fn default() -> Self {
        Self {
            red_gain: DEFAULT_RED_GAIN,
            blue: DEFAULT_BLUE,
        }
    }
}

/// Red bands from `n * gain * ln(n)` over constant green, blue and alpha channels.
///
/// The intensity is truncated to an integer and wrapped modulo 256, so the red
/// channel cycles as the count grows. `ln(0)` is undefined, so a zero count
/// takes the limit of the curve at zero: no red.
#[derive(Debug, Clone, PartialEq)]
pub struct LogBand {
    max_iterations: u32,
    red_gain: f64,
    green: u8,
    blue: u8,
    alpha: u8,
}

impl ColourMap for LogBand {
    fn map(&self, iterations: u32) -> Colour {
        let iterations = iterations.min(self.max_iterations);

        let r = if iterations == 0 {
            0
        } else {
            let n = f64::from(iterations);
            let scaled = n * (self.red_gain * n.ln());
            (scaled as i64).rem_euclid(256) as u8
        };

        Colour {
            r,
            g: self.green,
            b: self.blue,
            a: self.alpha,
        }
    }

    fn kind(&self) -> PaletteKind {
        PaletteKind::LogBand
    }
}

impl LogBand {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self::with_tuning(max_iterations, LogBandTuning::default())
    }

    #[must_use]
    pub fn with_tuning(max_iterations: u32, tuning: LogBandTuning) -> Self {
        Self {
            max_iterations,
            red_gain: tuning.red_gain,
            green: DEFAULT_GREEN,
            blue: tuning.blue,
            alpha: DEFAULT_ALPHA,
        }
    }
}

/// Colours `iterations` with the default log band for a cap of `max_iterations`.
#[must_use]
pub fn colorize(iterations: u32, max_iterations: u32) -> Colour {
    LogBand::new(max_iterations).map(iterations)
}
