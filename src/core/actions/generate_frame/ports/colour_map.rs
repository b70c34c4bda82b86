use crate::core::data::colour::Colour;
use crate::core::fractals::colour_mapping::kinds::PaletteKind;

/// Turns an escape-time iteration count into a colour.
///
/// Implementations must be pure: the same count always yields the same colour,
/// and every count (including zero and counts past the cap) has a defined colour.
pub trait ColourMap: Send + Sync {
    fn map(&self, iterations: u32) -> Colour;

    fn kind(&self) -> PaletteKind;

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}
