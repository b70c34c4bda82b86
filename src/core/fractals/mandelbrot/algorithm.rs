use crate::core::data::complex::Complex;
use crate::core::fractals::escape_time::escape_time;

/// Escape time of `c` under `z -> z² + c` starting from `z = 0`.
#[must_use]
pub fn mandelbrot_iterations(c: Complex, max_iterations: u32, escape_radius_squared: f64) -> u32 {
    escape_time(Complex::ZERO, c, max_iterations, escape_radius_squared)
}
