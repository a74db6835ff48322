use crate::core::data::complex::Complex;
use crate::core::data::grid_size::GridSize;
use crate::core::data::viewport::Viewport;

/// Resolved rectangle bounds on the complex plane for one render pass.
///
/// Every consumer of a viewport (the escape-time path, the snapshot export
/// path) must map pixels through this type so that the same viewport always
/// produces the same picture regardless of resolution.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlaneBounds {
    re_start: f64,
    re_end: f64,
    im_start: f64,
    im_end: f64,
    pixel_width: f64,
    pixel_height: f64,
}

impl PlaneBounds {
    #[must_use]
    pub fn new(viewport: Viewport, size: GridSize) -> Self {
        let im_span = viewport.re_span / size.aspect_ratio();

        Self {
            re_start: viewport.re_center - viewport.re_span / 2.0,
            re_end: viewport.re_center + viewport.re_span / 2.0,
            im_start: viewport.im_center - im_span / 2.0,
            im_end: viewport.im_center + im_span / 2.0,
            pixel_width: size.width() as f64,
            pixel_height: size.height() as f64,
        }
    }

    /// Maps a pixel position to its complex-plane coordinate. `x` and `y`
    /// range over `[0, width]` and `[0, height]`; the half-open pixel
    /// convention means `(width, height)` lands exactly on the bottom-right
    /// corner of the rectangle.
    #[must_use]
    pub fn complex_at(&self, x: f64, y: f64) -> Complex {
        Complex {
            real: self.re_start + (x / self.pixel_width) * (self.re_end - self.re_start),
            imag: self.im_start + (y / self.pixel_height) * (self.im_end - self.im_start),
        }
    }

    #[must_use]
    pub fn re_span(&self) -> f64 {
        self.re_end - self.re_start
    }

    #[must_use]
    pub fn im_span(&self) -> f64 {
        self.im_end - self.im_start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn square_bounds() -> PlaneBounds {
        let viewport = Viewport::new(3.5, -0.5, 0.0).unwrap();
        PlaneBounds::new(viewport, GridSize::new(100, 100))
    }

    #[test]
    fn test_top_left_corner_maps_to_rect_start() {
        let c = square_bounds().complex_at(0.0, 0.0);

        assert!((c.real - (-2.25)).abs() < EPSILON);
        assert!((c.imag - (-1.75)).abs() < EPSILON);
    }

    #[test]
    fn test_bottom_right_corner_maps_to_rect_end() {
        let c = square_bounds().complex_at(100.0, 100.0);

        assert!((c.real - 1.25).abs() < EPSILON);
        assert!((c.imag - 1.75).abs() < EPSILON);
    }

    #[test]
    fn test_center_pixel_maps_to_viewport_center() {
        let c = square_bounds().complex_at(50.0, 50.0);

        assert!((c.real - (-0.5)).abs() < EPSILON);
        assert!(c.imag.abs() < EPSILON);
    }

    #[test]
    fn test_imaginary_span_derived_from_aspect_ratio() {
        let viewport = Viewport::new(4.0, 0.0, 0.0).unwrap();
        let bounds = PlaneBounds::new(viewport, GridSize::new(200, 100));

        assert!((bounds.re_span() - 4.0).abs() < EPSILON);
        assert!((bounds.im_span() - 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_same_viewport_same_mapping_at_any_resolution() {
        let viewport = Viewport::new(3.0, -0.7, 0.1).unwrap();
        let coarse = PlaneBounds::new(viewport, GridSize::new(100, 50));
        let fine = PlaneBounds::new(viewport, GridSize::new(400, 200));

        // Same fractional position must land on the same plane coordinate.
        let a = coarse.complex_at(25.0, 10.0);
        let b = fine.complex_at(100.0, 40.0);

        assert!((a.real - b.real).abs() < EPSILON);
        assert!((a.imag - b.imag).abs() < EPSILON);
    }
}
