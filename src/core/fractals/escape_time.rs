use crate::core::data::complex::Complex;
use crate::core::fractals::julia::algorithm::julia_iterations;
use crate::core::fractals::mandelbrot::algorithm::mandelbrot_iterations;
use crate::core::fractals::variant::FractalVariant;
use std::ops::ControlFlow;
use thiserror::Error;

pub const DEFAULT_MAX_ITERATIONS: u32 = 100;
pub const DEFAULT_ESCAPE_RADIUS_SQUARED: f64 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum EscapeTimeError {
    #[error("maximum iterations must be greater than zero")]
    ZeroMaxIterations,
    #[error("escape radius squared must be finite and positive, got {0}")]
    InvalidEscapeRadius(f64),
}

/// Iterates `z -> z² + c` from `z0` and counts the steps taken before
/// `|z|² > escape_radius_squared`, capped at `max_iterations`.
pub(crate) fn escape_time(
    z0: Complex,
    c: Complex,
    max_iterations: u32,
    escape_radius_squared: f64,
) -> u32 {
    let outcome = (0..max_iterations).try_fold(z0, |z, iteration| {
        if z.magnitude_squared() > escape_radius_squared {
            ControlFlow::Break(iteration)
        } else {
            ControlFlow::Continue(z * z + c)
        }
    });

    match outcome {
        ControlFlow::Break(iteration) => iteration,
        ControlFlow::Continue(_) => max_iterations,
    }
}

/// Per-point escape-time evaluation for whichever variant is active.
///
/// Holds only the iteration cap and escape threshold, both fixed for the
/// lifetime of the engine, so one engine can be shared by any number of
/// callers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EscapeTimeEngine {
    max_iterations: u32,
    escape_radius_squared: f64,
}

impl Default for EscapeTimeEngine {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            escape_radius_squared: DEFAULT_ESCAPE_RADIUS_SQUARED,
        }
    }
}

impl EscapeTimeEngine {
    pub fn new(max_iterations: u32, escape_radius_squared: f64) -> Result<Self, EscapeTimeError> {
        if max_iterations == 0 {
            return Err(EscapeTimeError::ZeroMaxIterations);
        }

        if !escape_radius_squared.is_finite() || escape_radius_squared <= 0.0 {
            return Err(EscapeTimeError::InvalidEscapeRadius(escape_radius_squared));
        }

        Ok(Self {
            max_iterations,
            escape_radius_squared,
        })
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn escape_radius_squared(&self) -> f64 {
        self.escape_radius_squared
    }

    /// Iteration count in `0..=max_iterations` for the plane point `point`.
    #[must_use]
    pub fn iterate(&self, point: Complex, variant: &FractalVariant) -> u32 {
        match variant {
            FractalVariant::Mandelbrot => {
                mandelbrot_iterations(point, self.max_iterations, self.escape_radius_squared)
            }
            FractalVariant::Julia { c } => {
                julia_iterations(point, *c, self.max_iterations, self.escape_radius_squared)
            }
        }
    }
}
