use crate::core::actions::generate_frame::ports::colour_map::ColourMap;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelSample};
use crate::core::data::viewport::Viewport;
use crate::core::fractals::escape_time::EscapeTimeEngine;
use crate::core::util::plane_mapping::PlaneMapping;
use crate::core::view::view_state::ViewState;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameError {
    #[error("frame buffer holds {actual} samples but the viewport needs {expected}")]
    BufferSizeMismatch { expected: usize, actual: usize },
    #[error(
        "frame buffer is {}x{} but the viewport is {}x{}",
        actual.width(), actual.height(), expected.width(), expected.height()
    )]
    ViewportMismatch { expected: Viewport, actual: Viewport },
}

/// Produces one frame of samples for the current view.
pub struct FrameGenerator {
    viewport: Viewport,
    engine: EscapeTimeEngine,
    colour_map: Box<dyn ColourMap>,
}

impl FrameGenerator {
    #[must_use]
    pub fn new(viewport: Viewport, engine: EscapeTimeEngine, colour_map: Box<dyn ColourMap>) -> Self {
        Self {
            viewport,
            engine,
            colour_map,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn engine(&self) -> &EscapeTimeEngine {
        &self.engine
    }

    #[must_use]
    pub fn colour_map(&self) -> &dyn ColourMap {
        self.colour_map.as_ref()
    }

    /// Overwrites every sample with the position and colour of its pixel.
    ///
    /// The view is read once up front, so the whole frame reflects a single
    /// view. A buffer of the wrong length is rejected before anything is written.
    pub fn generate(&self, view: &ViewState, samples: &mut [PixelSample]) -> Result<(), FrameError> {
        let expected = self.viewport.pixel_count();

        if samples.len() != expected {
            return Err(FrameError::BufferSizeMismatch {
                expected,
                actual: samples.len(),
            });
        }

        let mapping = PlaneMapping::new(self.viewport, view);
        let variant = view.variant();
        let width = self.viewport.width() as usize;

        for (row, line) in samples.chunks_exact_mut(width).enumerate() {
            let y = row as u32;

            for (column, sample) in line.iter_mut().enumerate() {
                let x = column as u32;
                let iterations = self.engine.iterate(mapping.complex_at(x, y), &variant);

                *sample = PixelSample {
                    x: x as f32,
                    y: y as f32,
                    colour: self.colour_map.map(iterations),
                };
            }
        }

        Ok(())
    }

    /// Like [`generate`](Self::generate), but also rejects a buffer shaped for
    /// another viewport, even one with the same pixel count.
    pub fn generate_into(&self, view: &ViewState, buffer: &mut PixelBuffer) -> Result<(), FrameError> {
        if buffer.viewport() != self.viewport {
            return Err(FrameError::ViewportMismatch {
                expected: self.viewport,
                actual: buffer.viewport(),
            });
        }

        self.generate(view, buffer.samples_mut())
    }

    /// Iteration count at one pixel, without touching any buffer.
    ///
    /// Returns `None` when `pixel` is outside the viewport.
    #[must_use]
    pub fn iterations_at(&self, view: &ViewState, pixel: Point) -> Option<u32> {
        self.plane_point(view, pixel)
            .map(|point| self.engine.iterate(point, &view.variant()))
    }

    #[must_use]
    pub fn plane_point(&self, view: &ViewState, pixel: Point) -> Option<Complex> {
        PlaneMapping::new(self.viewport, view)
            .pixel_to_complex(pixel)
            .ok()
    }
}

impl std::fmt::Debug for FrameGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameGenerator")
            .field("viewport", &self.viewport)
            .field("engine", &self.engine)
            .field("colour_map", &self.colour_map.kind())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::fractals::colour_mapping::factory::colour_map_factory;
    use crate::core::fractals::colour_mapping::kinds::PaletteKind;
    use crate::core::fractals::colour_mapping::maps::log_band::{LogBandTuning, colorize};
    use crate::core::fractals::variant::{FractalKind, FractalVariant};

    fn generator(width: u32, height: u32) -> FrameGenerator {
        let viewport = Viewport::new(width, height).unwrap();
        let engine = EscapeTimeEngine::default();
        let colour_map = colour_map_factory(
            PaletteKind::LogBand,
            engine.max_iterations(),
            LogBandTuning::default(),
        );

        FrameGenerator::new(viewport, engine, colour_map)
    }

    #[test]
    fn test_rejects_buffer_of_wrong_length() {
        let generator = generator(4, 4);
        let mut samples = vec![
            PixelSample {
                x: -1.0,
                y: -1.0,
                colour: Colour::BLACK,
            };
            15
        ];

        let result = generator.generate(&ViewState::default(), &mut samples);

        assert_eq!(
            result,
            Err(FrameError::BufferSizeMismatch {
                expected: 16,
                actual: 15
            })
        );
        assert!(samples.iter().all(|s| s.x == -1.0));
    }

    #[test]
    fn test_rejects_buffer_of_same_size_but_other_shape() {
        let generator = generator(4, 6);
        let transposed = Viewport::new(6, 4).unwrap();
        let mut buffer = PixelBuffer::new(transposed);
        let untouched = buffer.clone();

        let result = generator.generate_into(&ViewState::default(), &mut buffer);

        assert_eq!(
            result,
            Err(FrameError::ViewportMismatch {
                expected: generator.viewport(),
                actual: transposed
            })
        );
        assert_eq!(buffer, untouched);
        assert_eq!(
            buffer.sample_at(Point { x: 5, y: 0 }).map(|s| (s.x, s.y)),
            Some((5.0, 0.0))
        );
    }

    #[test]
    fn test_writes_positions_row_major() {
        let generator = generator(3, 2);
        let mut samples = vec![
            PixelSample {
                x: 0.0,
                y: 0.0,
                colour: Colour::BLACK,
            };
            6
        ];

        generator
            .generate(&ViewState::default(), &mut samples)
            .unwrap();

        let positions: Vec<(f32, f32)> = samples.iter().map(|s| (s.x, s.y)).collect();
        assert_eq!(
            positions,
            vec![
                (0.0, 0.0),
                (1.0, 0.0),
                (2.0, 0.0),
                (0.0, 1.0),
                (1.0, 1.0),
                (2.0, 1.0)
            ]
        );
    }

    #[test]
    fn test_centre_pixel_of_default_view_is_in_the_set() {
        let generator = generator(1200, 720);
        let mut buffer = PixelBuffer::new(generator.viewport());
        let view = ViewState::default();
        let centre = generator.viewport().centre();

        generator.generate_into(&view, &mut buffer).unwrap();

        assert_eq!(generator.iterations_at(&view, centre), Some(100));
        assert_eq!(
            buffer.sample_at(centre).map(|s| s.colour),
            Some(colorize(100, 100))
        );
    }

    #[test]
    fn test_same_view_gives_identical_frames() {
        let generator = generator(64, 48);
        let view = ViewState::new(0.01, FractalKind::Julia, Complex::new(-0.7, 0.27));
        let mut first = PixelBuffer::new(generator.viewport());
        let mut second = PixelBuffer::new(generator.viewport());

        generator.generate_into(&view, &mut first).unwrap();
        generator.generate_into(&view, &mut second).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_every_sample_matches_its_iteration_count() {
        let generator = generator(16, 12);
        let view = ViewState::new(0.1, FractalKind::Mandelbrot, Complex::ZERO);
        let mut buffer = PixelBuffer::new(generator.viewport());

        generator.generate_into(&view, &mut buffer).unwrap();

        for y in 0..12 {
            for x in 0..16 {
                let pixel = Point { x, y };
                let iterations = generator.iterations_at(&view, pixel).unwrap();

                assert!(iterations <= 100);
                assert_eq!(
                    buffer.sample_at(pixel).map(|s| s.colour),
                    Some(generator.colour_map().map(iterations))
                );
            }
        }
    }

    #[test]
    fn test_variant_changes_the_frame() {
        let generator = generator(32, 32);
        let mandelbrot = ViewState::new(0.05, FractalKind::Mandelbrot, Complex::ZERO);
        let mut julia = mandelbrot;
        julia.select(FractalKind::Julia);
        assert_eq!(julia.variant(), FractalVariant::Julia { c: Complex::ZERO });

        let mut a = PixelBuffer::new(generator.viewport());
        let mut b = PixelBuffer::new(generator.viewport());
        generator.generate_into(&mandelbrot, &mut a).unwrap();
        generator.generate_into(&julia, &mut b).unwrap();

        assert_ne!(a, b);
    }

    #[test]
    fn test_iterations_outside_viewport_is_none() {
        let generator = generator(8, 8);

        assert_eq!(
            generator.iterations_at(&ViewState::default(), Point { x: 8, y: 0 }),
            None
        );
    }
}
