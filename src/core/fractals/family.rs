use crate::core::data::complex::Complex;

/// Fractal family selector, without per-family parameters. Used wherever the
/// engine needs to know *which* family is active before the Julia constant
/// has been resolved (intent derivation, display labels).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FractalKind {
    #[default]
    Mandelbrot,
    Julia,
    BurningShip,
}

impl FractalKind {
    pub const ALL: &'static [Self] = &[Self::Mandelbrot, Self::Julia, Self::BurningShip];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia => "Julia",
            Self::BurningShip => "Burning Ship",
        }
    }
}

/// Fully resolved family for one render pass: Julia carries its constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FractalFamily {
    Mandelbrot,
    Julia { c: Complex },
    BurningShip,
}

impl FractalFamily {
    #[must_use]
    pub fn kind(&self) -> FractalKind {
        match self {
            Self::Mandelbrot => FractalKind::Mandelbrot,
            Self::Julia { .. } => FractalKind::Julia,
            Self::BurningShip => FractalKind::BurningShip,
        }
    }
}
