use crate::core::actions::generate_frame::ports::colour_map::ColourMap;
use crate::core::fractals::colour_mapping::kinds::PaletteKind;
use crate::core::fractals::colour_mapping::maps::{
    blue_white_gradient::BlueWhiteGradient,
    fire_gradient::FireGradient,
    log_band::{LogBand, LogBandTuning},
};

/// Builds the palette `kind`. `tuning` only affects [`PaletteKind::LogBand`].
#[must_use]
pub fn colour_map_factory(
    kind: PaletteKind,
    max_iterations: u32,
    tuning: LogBandTuning,
) -> Box<dyn ColourMap> {
    match kind {
        PaletteKind::LogBand => Box::new(LogBand::with_tuning(max_iterations, tuning)),
        PaletteKind::FireGradient => Box::new(FireGradient::new(max_iterations)),
        PaletteKind::BlueWhiteGradient => Box::new(BlueWhiteGradient::new(max_iterations)),
    }
}
