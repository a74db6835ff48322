/// Floor applied to compute-grid dimensions so that layout transients
/// (zero-sized or collapsing widgets) never produce a degenerate render.
pub const MIN_GRID_DIMENSION: u32 = 50;

/// Dimensions of the compute grid, derived from the display surface and the
/// render-scale divisor. Always at least [`MIN_GRID_DIMENSION`] on each axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GridSize {
    width: u32,
    height: u32,
}

impl GridSize {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(MIN_GRID_DIMENSION),
            height: height.max(MIN_GRID_DIMENSION),
        }
    }

    /// Downsamples display dimensions by `render_scale` (> 1 means a coarser
    /// compute grid than the display). Non-positive display dimensions are
    /// clamped to the floor rather than rejected.
    #[must_use]
    pub fn from_display(display_width: i32, display_height: i32, render_scale: f64) -> Self {
        let width = (display_width.max(0) as f64 / render_scale) as u32;
        let height = (display_height.max(0) as f64 / render_scale) as u32;
        Self::new(width, height)
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Width over height. Substitutes 1.0 if the height somehow resolves to
    /// zero, so callers never divide by zero deriving the imaginary span.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f64 / self.height as f64
        }
    }
}
