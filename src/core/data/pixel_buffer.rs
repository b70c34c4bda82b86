use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PixelBufferError {
    #[error("rgba frame of {actual} bytes does not match the {expected} bytes of the viewport")]
    FrameSizeMismatch { expected: usize, actual: usize },
}

/// One displayable point: its screen position and its colour.
///
/// Laid out like a vertex (`x`, `y`, then RGBA) so a presenter can hand the
/// samples straight to a point-drawing pipeline.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PixelSample {
    pub x: f32,
    pub y: f32,
    pub colour: Colour,
}

/// The `width * height` samples of a viewport, in row-major order.
///
/// Allocated once and overwritten in place by every frame.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    viewport: Viewport,
    samples: Vec<PixelSample>,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        let width = viewport.width() as usize;
        let samples = (0..viewport.pixel_count())
            .map(|index| PixelSample {
                x: (index % width) as f32,
                y: (index / width) as f32,
                colour: Colour::default(),
            })
            .collect();

        Self { viewport, samples }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn samples(&self) -> &[PixelSample] {
        &self.samples
    }

    pub fn samples_mut(&mut self) -> &mut [PixelSample] {
        &mut self.samples
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[must_use]
    pub fn sample_at(&self, pixel: Point) -> Option<&PixelSample> {
        self.viewport
            .index_of(pixel)
            .and_then(|index| self.samples.get(index))
    }

    /// Copies the colours into an RGBA8 frame, forcing every pixel opaque.
    pub fn copy_to_rgba(&self, frame: &mut [u8]) -> Result<(), PixelBufferError> {
        let expected = self.samples.len() * 4;

        if frame.len() != expected {
            return Err(PixelBufferError::FrameSizeMismatch {
                expected,
                actual: frame.len(),
            });
        }

        for (sample, dst_pixel) in self.samples.iter().zip(frame.chunks_exact_mut(4)) {
            let [r, g, b, _] = sample.colour.to_bytes();
            dst_pixel.copy_from_slice(&[r, g, b, 255]);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_buffer(width: u32, height: u32) -> PixelBuffer {
        PixelBuffer::new(Viewport::new(width, height).unwrap())
    }

    #[test]
    fn test_new_allocates_one_sample_per_pixel() {
        let buffer = create_buffer(100, 50);

        assert_eq!(buffer.len(), 5000);
        assert!(!buffer.is_empty());
        assert!(buffer.samples().iter().all(|s| s.colour == Colour::default()));
    }

    #[test]
    fn test_new_derives_screen_positions_from_index() {
        let buffer = create_buffer(3, 2);
        let positions: Vec<(f32, f32)> = buffer.samples().iter().map(|s| (s.x, s.y)).collect();

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
    fn test_positions_of_last_row_in_tall_buffer() {
        let buffer = create_buffer(1, 70_000);
        let last = buffer.samples().last().unwrap();

        assert_eq!((last.x, last.y), (0.0, 69_999.0));
    }

    #[test]
    fn test_sample_at() {
        let mut buffer = create_buffer(3, 3);
        buffer.samples_mut()[4].colour = Colour::rgb(255, 0, 0);

        assert_eq!(
            buffer.sample_at(Point { x: 1, y: 1 }).map(|s| s.colour),
            Some(Colour::rgb(255, 0, 0))
        );
        assert_eq!(buffer.sample_at(Point { x: 3, y: 1 }), None);
    }

    #[test]
    fn test_copy_to_rgba_known_values() {
        let mut buffer = create_buffer(2, 1);
        buffer.samples_mut()[0].colour = Colour {
            r: 255,
            g: 0,
            b: 100,
            a: 0,
        };
        buffer.samples_mut()[1].colour = Colour::rgb(1, 2, 3);
        let mut frame = vec![0; 8];

        buffer.copy_to_rgba(&mut frame).unwrap();

        assert_eq!(frame, vec![255, 0, 100, 255, 1, 2, 3, 255]);
    }

    #[test]
    fn test_copy_to_rgba_rejects_wrong_frame_size() {
        let buffer = create_buffer(2, 2);
        let mut frame = vec![7; 12];

        let result = buffer.copy_to_rgba(&mut frame);

        assert_eq!(
            result,
            Err(PixelBufferError::FrameSizeMismatch {
                expected: 16,
                actual: 12
            })
        );
        assert!(frame.iter().all(|&b| b == 7));
    }
}
