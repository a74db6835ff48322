use crate::core::data::complex::Complex;
use crate::core::data::viewport::Viewport;

/// Everything the intent generator derives from a text seed: the base
/// viewport, the iteration budget, and (for Julia only) the map constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewParams {
    pub viewport: Viewport,
    pub max_iterations: u32,
    pub julia_c: Option<Complex>,
}
