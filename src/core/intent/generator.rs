use sha2::{Digest, Sha256};

use crate::core::data::complex::Complex;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::family::FractalKind;
use crate::core::intent::view_params::ViewParams;

/// Default iteration budget before the digest-derived interpolation.
pub const DEFAULT_MAX_ITER_BASE: u32 = 45;

const SPAN_MIN: f64 = 0.001;
const SPAN_MAX: f64 = 3.5;
const CENTER_PERTURBATION: f64 = 0.3;
const JULIA_C_MIN: f64 = -1.5;
const JULIA_C_RANGE: f64 = 3.0;

/// Deterministically derives viewport parameters from an intent string.
///
/// The sha256 digest of the text is sliced into fixed-width unsigned
/// integers, each rescaled into its target range. Identical
/// `(intent, aspect_ratio, kind, base_iterations)` always reproduce
/// bit-identical output; this is what makes a chosen phrase a reproducible
/// fractal view. An empty intent falls back to `"{family} Default"`.
#[must_use]
pub fn generate_view_params(
    intent: &str,
    aspect_ratio: f64,
    kind: FractalKind,
    base_iterations: u32,
) -> ViewParams {
    let fallback;
    let seed_text = if intent.is_empty() {
        fallback = format!("{} Default", kind.display_name());
        &fallback
    } else {
        intent
    };

    let digest = Sha256::digest(seed_text.as_bytes());

    // Each parameter reads a fixed slice of the digest: two bytes per
    // 16-bit word, one byte for the iteration interpolant.
    let span_word = u16_at(&digest, 0);
    let re_offset_word = u16_at(&digest, 2);
    let im_offset_word = u16_at(&digest, 4);
    let iter_byte = digest[8];
    let julia_re_word = u16_at(&digest, 10);
    let julia_im_word = u16_at(&digest, 12);

    let hashed_span = SPAN_MIN + (span_word as f64 / 65535.0) * (SPAN_MAX - SPAN_MIN);
    let (re_center_base, im_center_base, re_span) = match kind {
        FractalKind::Mandelbrot => (-0.75, 0.0, hashed_span),
        FractalKind::Julia => (0.0, 0.0, 3.0),
        FractalKind::BurningShip => (-0.5, -0.5, 2.8),
    };

    let im_scale = if aspect_ratio > 0.0 {
        re_span / aspect_ratio
    } else {
        re_span
    };
    let re_offset = (-0.5 + re_offset_word as f64 / 65535.0) * re_span * CENTER_PERTURBATION;
    let im_offset = (-0.5 + im_offset_word as f64 / 65535.0) * im_scale * CENTER_PERTURBATION;

    let iter_ceiling = (base_iterations as f64 * 2.5) as u32;
    let max_iterations = base_iterations
        + ((iter_byte as f64 / 255.0) * (iter_ceiling - base_iterations) as f64) as u32;

    let julia_c = match kind {
        FractalKind::Julia => Some(Complex {
            real: JULIA_C_MIN + (julia_re_word as f64 / 65535.0) * JULIA_C_RANGE,
            imag: JULIA_C_MIN + (julia_im_word as f64 / 65535.0) * JULIA_C_RANGE,
        }),
        _ => None,
    };

    // A positive span is guaranteed by construction: the hashed span sits in
    // [SPAN_MIN, SPAN_MAX] and family overrides are fixed positive values.
    let viewport = Viewport {
        re_span,
        re_center: re_center_base + re_offset,
        im_center: im_center_base + im_offset,
    };

    ViewParams {
        viewport,
        max_iterations,
        julia_c,
    }
}

fn u16_at(digest: &[u8], offset: usize) -> u16 {
    u16::from_be_bytes([digest[offset], digest[offset + 1]])
}
