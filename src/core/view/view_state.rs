use crate::core::data::complex::Complex;
use crate::core::fractals::variant::{FractalKind, FractalVariant};

pub const DEFAULT_ZOOM_DELTA: f64 = 0.001;

/// The view transform and the active fractal variant.
///
/// Read by frame generation, mutated only through the crate's input handling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    offset: Complex,
    zoom_delta: f64,
    variant: FractalVariant,
    // Julia constant restored by selecting Julia. Tracks the active constant
    // while Julia is shown, so it only differs from it under Mandelbrot.
    julia_memory: Complex,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(DEFAULT_ZOOM_DELTA, FractalKind::Mandelbrot, Complex::ZERO)
    }
}

impl ViewState {
    #[must_use]
    pub fn new(zoom_delta: f64, kind: FractalKind, julia_constant: Complex) -> Self {
        let variant = match kind {
            FractalKind::Mandelbrot => FractalVariant::Mandelbrot,
            FractalKind::Julia => FractalVariant::Julia { c: julia_constant },
        };

        Self {
            offset: Complex::ZERO,
            zoom_delta,
            variant,
            julia_memory: julia_constant,
        }
    }

    /// Plane-space translation of the viewport centre.
    #[must_use]
    pub fn offset(&self) -> Complex {
        self.offset
    }

    /// Additive adjustment to the base per-pixel plane step.
    #[must_use]
    pub fn zoom_delta(&self) -> f64 {
        self.zoom_delta
    }

    #[must_use]
    pub fn variant(&self) -> FractalVariant {
        self.variant
    }

    #[must_use]
    pub fn kind(&self) -> FractalKind {
        self.variant.kind()
    }

    pub(crate) fn pan(&mut self, real: f64, imag: f64) -> bool {
        self.offset = self.offset + Complex::new(real, imag);
        true
    }

    pub(crate) fn adjust_zoom(&mut self, delta: f64) -> bool {
        self.zoom_delta += delta;
        true
    }

    /// Shifts the Julia constant. Returns `false`, changing nothing, under Mandelbrot.
    pub(crate) fn adjust_julia_constant(&mut self, real: f64, imag: f64) -> bool {
        match &mut self.variant {
            FractalVariant::Julia { c } => {
                *c = *c + Complex::new(real, imag);
                self.julia_memory = *c;
                true
            }
            FractalVariant::Mandelbrot => false,
        }
    }

    /// Switches the active variant. Returns `false` if `kind` was already active.
    pub(crate) fn select(&mut self, kind: FractalKind) -> bool {
        match (kind, self.variant) {
            (FractalKind::Mandelbrot, FractalVariant::Julia { c }) => {
                self.julia_memory = c;
                self.variant = FractalVariant::Mandelbrot;
                true
            }
            (FractalKind::Julia, FractalVariant::Mandelbrot) => {
                self.variant = FractalVariant::Julia {
                    c: self.julia_memory,
                };
                true
            }
            _ => false,
        }
    }
}
