use crate::core::data::colour::Colour;
use crate::core::effects::params::PaletteParams;

/// Number of discrete palette formulas; [`palette_colour`] selects by
/// `palette_id % PALETTE_COUNT`.
pub const PALETTE_COUNT: u32 = 4;

/// Discrete palette mode: one of four closed-form RGB mappings of the
/// iteration value.
///
/// `value` is a float because the coloring source may be a convolution
/// output rather than raw counts. A value exactly equal to the iteration
/// budget is interior and always pure black.
#[must_use]
pub fn palette_colour(
    value: f64,
    max_iterations: u32,
    palette_id: u32,
    params: PaletteParams,
) -> Colour {
    if value == max_iterations as f64 {
        return Colour::BLACK;
    }

    let (r_mult, g_mult, b_mult) = params;
    let n = value;

    let (r, g, b): (i64, i64, i64) = match palette_id % PALETTE_COUNT {
        0 => (
            (255.0_f64.min(n * r_mult)) as i64,
            (255.0_f64.min(n * (g_mult + n.rem_euclid(5.0)))) as i64,
            (0.0_f64.max(50.0 - n * b_mult)) as i64,
        ),
        1 => (
            (0.0_f64.max(100.0 - n * r_mult)) as i64,
            (255.0_f64.min(n * g_mult)) as i64,
            (255.0_f64.min(100.0 + n * b_mult)) as i64,
        ),
        2 => (
            ((n * r_mult + 60.0).trunc() as i64).rem_euclid(256),
            ((n * g_mult + 120.0).trunc() as i64).rem_euclid(256),
            ((n * b_mult).trunc() as i64).rem_euclid(100),
        ),
        _ => {
            let grey = (255.0 * n / max_iterations as f64) as i64;
            (grey, grey, grey)
        }
    };

    Colour {
        r: r.clamp(0, 255) as u8,
        g: g.clamp(0, 255) as u8,
        b: b.clamp(0, 255) as u8,
    }
}
