use crate::core::actions::generate_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::colour_mapping::kinds::PaletteKind;

/// Black through red, orange and yellow to white; bounded points are black.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FireGradient {
    max_iterations: u32,
}

impl ColourMap for FireGradient {
    fn map(&self, iterations: u32) -> Colour {
        let iterations = iterations.min(self.max_iterations);

        if iterations == self.max_iterations {
            return Colour::BLACK;
        }

        let t = f64::from(iterations) / f64::from(self.max_iterations);

        let (r, g, b) = if t < 0.25 {
            let local_t = t / 0.25;
            ((local_t * 255.0) as u8, 0, 0)
        } else if t < 0.5 {
            let local_t = (t - 0.25) / 0.25;
            (255, (local_t * 165.0) as u8, 0)
        } else if t < 0.75 {
            let local_t = (t - 0.5) / 0.25;
            (255, (165.0 + local_t * 90.0) as u8, 0)
        } else {
            let local_t = (t - 0.75) / 0.25;
            (255, 255, (local_t * 255.0) as u8)
        };

        Colour::rgb(r, g, b)
    }

    fn kind(&self) -> PaletteKind {
        PaletteKind::FireGradient
    }
}

impl FireGradient {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_returns_black_at_max_iterations() {
        assert_eq!(FireGradient::new(100).map(100), Colour::BLACK);
    }

    #[test]
    fn test_map_returns_black_at_zero_iterations() {
        assert_eq!(FireGradient::new(100).map(0), Colour::BLACK);
    }

    #[test]
    fn test_map_midpoint_gradient() {
        assert_eq!(FireGradient::new(100).map(50), Colour::rgb(255, 165, 0));
    }

    #[test]
    fn test_map_clamps_iterations_past_cap() {
        assert_eq!(FireGradient::new(100).map(101), Colour::BLACK);
    }
}
