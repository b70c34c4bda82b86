use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::view::view_state::ViewState;
use thiserror::Error;

/// Height of the complex-plane window at zero zoom delta.
pub const BASE_PLANE_HEIGHT: f64 = 2.0;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum PlaneMappingError {
    #[error(
        "point (x: {}, y: {}) is outside the {}x{} viewport",
        point.x, point.y, viewport.width(), viewport.height()
    )]
    PointOutsideViewport { point: Point, viewport: Viewport },
}

/// Affine map from pixel coordinates to the complex plane for one frame.
///
/// One step size serves both axes, so plane and pixel aspect ratios agree.
/// The step is `BASE_PLANE_HEIGHT / height + zoom_delta`; a zoom delta at or
/// below `-BASE_PLANE_HEIGHT / height` collapses or mirrors the view.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlaneMapping {
    viewport: Viewport,
    step: f64,
    centre_x: f64,
    centre_y: f64,
    offset: Complex,
}

impl PlaneMapping {
    #[must_use]
    pub fn new(viewport: Viewport, view: &ViewState) -> Self {
        let centre = viewport.centre();

        Self {
            viewport,
            step: BASE_PLANE_HEIGHT / f64::from(viewport.height()) + view.zoom_delta(),
            centre_x: f64::from(centre.x),
            centre_y: f64::from(centre.y),
            offset: view.offset(),
        }
    }

    /// Plane units per pixel.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Maps a pixel known to lie inside the viewport.
    #[must_use]
    pub(crate) fn complex_at(&self, x: u32, y: u32) -> Complex {
        Complex {
            real: self.step * (f64::from(x) - self.centre_x) + self.offset.real,
            imag: self.step * (f64::from(y) - self.centre_y) + self.offset.imag,
        }
    }

    pub fn pixel_to_complex(&self, point: Point) -> Result<Complex, PlaneMappingError> {
        if !self.viewport.contains_point(point) {
            return Err(PlaneMappingError::PointOutsideViewport {
                point,
                viewport: self.viewport,
            });
        }

        Ok(self.complex_at(point.x, point.y))
    }
}
