use crate::core::actions::generate_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::colour_mapping::kinds::PaletteKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlueWhiteGradient {
    max_iterations: u32,
}

impl ColourMap for BlueWhiteGradient {
    fn map(&self, iterations: u32) -> Colour {
        let iterations = iterations.min(self.max_iterations);

        if iterations == self.max_iterations {
            return Colour::BLACK;
        }

        let t = f64::from(iterations) / f64::from(self.max_iterations);
        let s = 1.0 - t;
        let r = (9.0 * s * t * t * t * 255.0) as u8;
        let g = (15.0 * s * s * t * t * 255.0) as u8;
        let b = (8.5 * s * s * s * t * 255.0) as u8;

        Colour::rgb(r, g, b)
    }

    fn kind(&self) -> PaletteKind {
        PaletteKind::BlueWhiteGradient
    }
}

impl BlueWhiteGradient {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}
