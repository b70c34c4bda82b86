use crate::core::data::complex::Complex;

/// Which recurrence is active, without its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum FractalKind {
    #[default]
    Mandelbrot,
    Julia,
}

impl FractalKind {
    pub const ALL: &'static [Self] = &[Self::Mandelbrot, Self::Julia];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia => "Julia",
        }
    }
}

impl std::fmt::Display for FractalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

/// The active recurrence together with the parameters only it uses.
///
/// The Julia constant lives inside the `Julia` case, so a Mandelbrot view has
/// no constant to mutate.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum FractalVariant {
    #[default]
    Mandelbrot,
    Julia { c: Complex },
}

impl FractalVariant {
    #[must_use]
    pub const fn kind(&self) -> FractalKind {
        match self {
            Self::Mandelbrot => FractalKind::Mandelbrot,
            Self::Julia { .. } => FractalKind::Julia,
        }
    }

    #[must_use]
    pub const fn julia_constant(&self) -> Option<Complex> {
        match self {
            Self::Mandelbrot => None,
            Self::Julia { c } => Some(*c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_variant_is_mandelbrot() {
        assert_eq!(FractalVariant::default(), FractalVariant::Mandelbrot);
        assert_eq!(FractalKind::default(), FractalKind::Mandelbrot);
    }

    #[test]
    fn all_array_has_default_first() {
        assert_eq!(FractalKind::ALL.first(), Some(&FractalKind::default()));
    }

    #[test]
    fn kind_matches_case() {
        let julia = FractalVariant::Julia {
            c: Complex::new(-0.7, 0.27),
        };

        assert_eq!(FractalVariant::Mandelbrot.kind(), FractalKind::Mandelbrot);
        assert_eq!(julia.kind(), FractalKind::Julia);
    }

    #[test]
    fn only_julia_carries_a_constant() {
        let c = Complex::new(0.25, -0.5);

        assert_eq!(FractalVariant::Mandelbrot.julia_constant(), None);
        assert_eq!(FractalVariant::Julia { c }.julia_constant(), Some(c));
    }

    #[test]
    fn display_names() {
        assert_eq!(FractalKind::Mandelbrot.to_string(), "Mandelbrot");
        assert_eq!(FractalKind::Julia.to_string(), "Julia");
    }
}
