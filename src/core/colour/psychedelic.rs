use std::f64::consts::PI;

use crate::core::data::colour::Colour;
use crate::core::effects::params::PsychedelicParams;

/// Continuous-hue ("psychedelic") coloring mode.
///
/// Hue cycles with the iteration value and the animation clock; saturation
/// and value breathe on their own sine waves. Interior pixels stay black.
#[must_use]
pub fn psychedelic_colour(
    value: f64,
    max_iterations: u32,
    time_phase: f64,
    params: PsychedelicParams,
) -> Colour {
    if value == max_iterations as f64 {
        return Colour::BLACK;
    }

    let (hue_speed, sat_speed, val_speed, hue_offset, sat_offset, val_offset) = params;

    let hue = (value / 25.0 + time_phase * hue_speed + hue_offset).rem_euclid(1.0);
    let saturation = 0.6 + (time_phase * 2.0 * PI * sat_speed + sat_offset).sin() * 0.4;
    let brightness =
        0.8 + (value / 10.0 + time_phase * 2.0 * PI * val_speed + val_offset).sin() * 0.2;

    hsv_to_rgb(hue, saturation, brightness)
}

/// Standard sector-method HSV→RGB conversion; `hue` in `[0, 1)`.
fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> Colour {
    let sector = (hue * 6.0).trunc();
    let f = hue * 6.0 - sector;
    let p = value * (1.0 - saturation);
    let q = value * (1.0 - f * saturation);
    let t = value * (1.0 - (1.0 - f) * saturation);

    let (r, g, b) = match (sector as i64).rem_euclid(6) {
        0 => (value, t, p),
        1 => (q, value, p),
        2 => (p, value, t),
        3 => (p, q, value),
        4 => (t, p, value),
        _ => (value, p, q),
    };

    Colour {
        r: ((r * 255.0) as i64).clamp(0, 255) as u8,
        g: ((g * 255.0) as i64).clamp(0, 255) as u8,
        b: ((b * 255.0) as i64).clamp(0, 255) as u8,
    }
}
