use crate::controllers::input_controller::{
    DEFAULT_MOVE_STEP, DEFAULT_PARAM_STEP, DEFAULT_ZOOM_STEP, InputController,
};
use crate::core::data::complex::Complex;
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::fractals::colour_mapping::kinds::PaletteKind;
use crate::core::fractals::colour_mapping::maps::log_band::{
    DEFAULT_BLUE, DEFAULT_RED_GAIN, LogBandTuning,
};
use crate::core::fractals::escape_time::{
    DEFAULT_ESCAPE_RADIUS_SQUARED, DEFAULT_MAX_ITERATIONS, EscapeTimeEngine, EscapeTimeError,
};
use crate::core::fractals::variant::FractalKind;
use crate::core::view::view_state::{DEFAULT_ZOOM_DELTA, ViewState};
use thiserror::Error;

pub const DEFAULT_WIDTH: u32 = 1200;
pub const DEFAULT_HEIGHT: u32 = 720;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Viewport(#[from] ViewportError),
    #[error(transparent)]
    EscapeTime(#[from] EscapeTimeError),
    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },
    #[error("julia seed must be finite, got {0}")]
    NonFiniteJuliaSeed(Complex),
}

/// Every tunable the explorer reads at startup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplorerConfig {
    pub width: u32,
    pub height: u32,
    pub max_iterations: u32,
    pub escape_radius_squared: f64,
    pub initial_zoom_delta: f64,
    pub move_step: f64,
    pub zoom_step: f64,
    pub param_step: f64,
    pub palette: PaletteKind,
    pub red_gain: f64,
    pub blue: u8,
    pub initial_variant: FractalKind,
    pub julia_seed: Complex,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            escape_radius_squared: DEFAULT_ESCAPE_RADIUS_SQUARED,
            initial_zoom_delta: DEFAULT_ZOOM_DELTA,
            move_step: DEFAULT_MOVE_STEP,
            zoom_step: DEFAULT_ZOOM_STEP,
            param_step: DEFAULT_PARAM_STEP,
            palette: PaletteKind::default(),
            red_gain: DEFAULT_RED_GAIN,
            blue: DEFAULT_BLUE,
            initial_variant: FractalKind::default(),
            julia_seed: Complex::ZERO,
        }
    }
}

impl ExplorerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.viewport()?;
        self.engine()?;

        let scalars = [
            ("initial zoom delta", self.initial_zoom_delta),
            ("move step", self.move_step),
            ("zoom step", self.zoom_step),
            ("param step", self.param_step),
            ("red gain", self.red_gain),
        ];

        if let Some(&(name, value)) = scalars.iter().find(|(_, value)| !value.is_finite()) {
            return Err(ConfigError::NonFinite { name, value });
        }

        if !self.julia_seed.is_finite() {
            return Err(ConfigError::NonFiniteJuliaSeed(self.julia_seed));
        }

        Ok(())
    }

    pub fn viewport(&self) -> Result<Viewport, ConfigError> {
        Ok(Viewport::new(self.width, self.height)?)
    }

    pub fn engine(&self) -> Result<EscapeTimeEngine, ConfigError> {
        Ok(EscapeTimeEngine::new(
            self.max_iterations,
            self.escape_radius_squared,
        )?)
    }

    #[must_use]
    pub fn log_band_tuning(&self) -> LogBandTuning {
        LogBandTuning {
            red_gain: self.red_gain,
            blue: self.blue,
        }
    }

    #[must_use]
    pub fn input_controller(&self) -> InputController {
        InputController::new(self.move_step, self.zoom_step, self.param_step)
    }

    #[must_use]
    pub fn initial_view(&self) -> ViewState {
        ViewState::new(self.initial_zoom_delta, self.initial_variant, self.julia_seed)
    }
}
