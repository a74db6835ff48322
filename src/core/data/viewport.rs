use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    NonPositiveSpan { re_span: f64 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveSpan { re_span } => {
                write!(f, "viewport real span must be positive: {}", re_span)
            }
        }
    }
}

impl Error for ViewportError {}

/// A rectangle on the complex plane, described by its center and real-axis
/// span. The imaginary span is always derived from the pixel aspect ratio,
/// so the viewport itself stays resolution-independent.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub re_span: f64,
    pub re_center: f64,
    pub im_center: f64,
}

impl Viewport {
    pub fn new(re_span: f64, re_center: f64, im_center: f64) -> Result<Self, ViewportError> {
        if re_span <= 0.0 {
            return Err(ViewportError::NonPositiveSpan { re_span });
        }

        Ok(Self {
            re_span,
            re_center,
            im_center,
        })
    }
}

impl Default for Viewport {
    /// The classic whole-set Mandelbrot view.
    fn default() -> Self {
        Self {
            re_span: 3.5,
            re_center: -0.5,
            im_center: 0.0,
        }
    }
}
