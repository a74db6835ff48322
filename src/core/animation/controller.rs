use std::f64::consts::PI;
use std::time::Instant;

use crate::core::data::grid_size::GridSize;
use crate::core::data::viewport::Viewport;

/// One full oscillation of the animated viewport.
pub const ANIMATION_PERIOD_SECS: f64 = 15.0;
/// Peak fractional shrink of the real span at the top of the zoom wave.
pub const ZOOM_MAGNITUDE: f64 = 0.25;
pub const PAN_MAGNITUDE_X: f64 = 0.04;
pub const PAN_MAGNITUDE_Y: f64 = 0.04;
/// Span rescale per interactive zoom step.
pub const ZOOM_STEP: f64 = 1.15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// Time-phase state machine driving the oscillating viewport.
///
/// The controller never mutates the base viewport; it derives a *displayed*
/// viewport from it each tick. Interactive pan/zoom mutate the base through
/// the free functions below, so animation drift and direct manipulation
/// compose without fighting each other.
#[derive(Debug, Clone, Copy)]
pub struct AnimationController {
    start: Instant,
    time_phase: f64,
}

impl AnimationController {
    #[must_use]
    pub fn new(now: Instant) -> Self {
        Self {
            start: now,
            time_phase: 0.0,
        }
    }

    /// Restarts the animation clock; used on regeneration from a new intent
    /// (but suppressed on resize and interactive pan/zoom).
    pub fn reset(&mut self, now: Instant) {
        self.start = now;
        self.time_phase = 0.0;
    }

    /// Advances the phase from wall-clock time and returns it.
    pub fn tick(&mut self, now: Instant) -> f64 {
        let elapsed = now.duration_since(self.start).as_secs_f64();
        self.time_phase = (elapsed % ANIMATION_PERIOD_SECS) / ANIMATION_PERIOD_SECS;
        self.time_phase
    }

    #[must_use]
    pub fn time_phase(&self) -> f64 {
        self.time_phase
    }

    /// The viewport actually rendered this tick: the base viewport with the
    /// zoom wave applied to its span and the pan wave to its center.
    #[must_use]
    pub fn displayed_viewport(&self, base: Viewport, aspect_ratio: f64) -> Viewport {
        let angle = self.time_phase * 2.0 * PI;
        let sin_wave = angle.sin();

        let re_span = base.re_span * (1.0 - ZOOM_MAGNITUDE * sin_wave);
        let pan_re = PAN_MAGNITUDE_X * re_span * angle.cos();
        let pan_im = PAN_MAGNITUDE_Y * (re_span / aspect_ratio) * sin_wave;

        Viewport {
            re_span,
            re_center: base.re_center + pan_re,
            im_center: base.im_center + pan_im,
        }
    }
}

/// Interactive pan: converts a pixel delta to plane space using the span
/// currently on screen (animated or base) and drags the base center with it.
pub fn pan_viewport(
    base: &mut Viewport,
    displayed_re_span: f64,
    pixel_delta: (f64, f64),
    size: GridSize,
) {
    let width = size.width() as f64;
    let height = size.height() as f64;
    let im_span = displayed_re_span / size.aspect_ratio();

    base.re_center -= (pixel_delta.0 / width) * displayed_re_span;
    base.im_center -= (pixel_delta.1 / height) * im_span;
}

/// Interactive zoom-to-cursor: rescales the base span by [`ZOOM_STEP`] and
/// moves the center so the plane coordinate under `anchor` stays fixed.
pub fn zoom_viewport(
    base: &mut Viewport,
    direction: ZoomDirection,
    anchor: (f64, f64),
    size: GridSize,
) {
    let factor = match direction {
        ZoomDirection::In => ZOOM_STEP,
        ZoomDirection::Out => 1.0 / ZOOM_STEP,
    };

    let width = size.width() as f64;
    let height = size.height() as f64;
    let re_span = base.re_span;
    let im_span = re_span / size.aspect_ratio();

    let anchor_re = base.re_center - re_span / 2.0 + (anchor.0 / width) * re_span;
    let anchor_im = base.im_center - im_span / 2.0 + (anchor.1 / height) * im_span;

    base.re_center = anchor_re + (base.re_center - anchor_re) / factor;
    base.im_center = anchor_im + (base.im_center - anchor_im) / factor;
    base.re_span /= factor;
}
