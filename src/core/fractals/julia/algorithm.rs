use crate::core::data::complex::Complex;
use crate::core::fractals::escape_time::escape_time;

/// Escape time of the starting point `z0` under `z -> z² + c` for a fixed Julia
/// constant `c`.
#[must_use]
pub fn julia_iterations(
    z0: Complex,
    c: Complex,
    max_iterations: u32,
    escape_radius_squared: f64,
) -> u32 {
    escape_time(z0, c, max_iterations, escape_radius_squared)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_already_outside_radius_returns_zero() {
        assert_eq!(
            julia_iterations(Complex::new(3.0, 3.0), Complex::new(-0.7, 0.27), 100, 16.0),
            0
        );
    }

    #[test]
    fn test_unit_circle_is_invariant_for_zero_constant() {
        for z0 in [
            Complex::new(1.0, 0.0),
            Complex::new(-1.0, 0.0),
            Complex::new(0.0, -1.0),
        ] {
            assert_eq!(julia_iterations(z0, Complex::ZERO, 50, 16.0), 50, "z0 = {z0}");
        }
    }

    #[test]
    fn test_constant_changes_the_orbit() {
        let z0 = Complex::new(0.5, 0.5);

        assert_eq!(julia_iterations(z0, Complex::ZERO, 50, 16.0), 50);
        assert!(julia_iterations(z0, Complex::new(1.0, 1.0), 50, 16.0) < 50);
    }
}
