use std::f64::consts::PI;

use rand::Rng;
use rand::rngs::StdRng;

use crate::core::colour::palette::palette_colour;
use crate::core::colour::psychedelic::psychedelic_colour;
use crate::core::data::colour::Colour;
use crate::core::data::edge_grid::EdgeGrid;
use crate::core::data::grid_size::GridSize;
use crate::core::data::iteration_grid::IterationGrid;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::effects::params::EffectParams;
use crate::core::effects::state::EffectState;

/// What the colorizer reads: either raw escape-time counts, or the float
/// output of an edge filter standing in for them.
#[derive(Debug, Clone, Copy)]
pub enum ColourSource<'a> {
    Iterations(&'a IterationGrid),
    Edges(&'a EdgeGrid),
}

impl ColourSource<'_> {
    #[must_use]
    pub fn size(&self) -> GridSize {
        match self {
            Self::Iterations(grid) => grid.size(),
            Self::Edges(grid) => grid.size(),
        }
    }

    fn value_at(&self, index: usize) -> f64 {
        match self {
            Self::Iterations(grid) => grid.counts()[index] as f64,
            Self::Edges(grid) => grid.values()[index] as f64,
        }
    }
}

/// Frame-constant inputs to colorization, assembled by the render session.
#[derive(Debug, Clone, Copy)]
pub struct ColourizeSettings<'a> {
    pub max_iterations: u32,
    pub palette_id: u32,
    pub time_phase: f64,
    pub effects: &'a EffectState,
    pub params: &'a EffectParams,
}

/// Converts a coloring source into RGB bytes, running the ordered effects
/// pipeline per pixel:
///
/// 1. warp bands (pre-color, non-interior pixels only)
/// 2. pixel glitch (pre-color, session RNG)
/// 3. palette or continuous-hue color mapping
/// 4. tunnel vignette (post-color)
/// 5. color crush (post-color)
/// 6. scan lines (post-color)
///
/// The order matters: pre-color effects change what gets colored, post-color
/// effects only reshape the already-colored RGB. The glitch RNG governs
/// visual flicker, not correctness, so colorization runs sequentially while
/// the escape-time pass upstream carries the parallelism.
pub fn colourize(
    source: ColourSource<'_>,
    settings: ColourizeSettings<'_>,
    rng: &mut StdRng,
    buffer: &mut PixelBuffer,
) {
    let size = source.size();
    buffer.resize_if_needed(size);

    let width = size.width();
    let height = size.height();
    let max_value = settings.max_iterations as f64;

    let center_x = width as f64 / 2.0;
    let center_y = height as f64 / 2.0;
    let max_dist = (center_x * center_x + center_y * center_y).sqrt();
    let crush_factor = 256.0 / settings.params.crush_levels as f64;

    for y in 0..height {
        for x in 0..width {
            let index = (y as usize) * (width as usize) + (x as usize);
            let mut value = source.value_at(index);

            if settings.effects.warp_bands && value < max_value {
                let band = ((y as f64) / settings.params.warp_frequency
                    + settings.time_phase * PI * 4.0)
                    .sin()
                    * settings.params.warp_amplitude;
                value = (value + band.trunc()).max(0.0);
            }

            if settings.effects.glitch && rng.r#gen::<f64>() < settings.params.glitch_chance {
                value = rng.gen_range(0..=settings.max_iterations) as f64;
            }

            let mut colour = if settings.effects.psychedelic {
                psychedelic_colour(
                    value,
                    settings.max_iterations,
                    settings.time_phase,
                    settings.params.psychedelic,
                )
            } else {
                palette_colour(
                    value,
                    settings.max_iterations,
                    settings.palette_id,
                    settings.params.palette,
                )
            };

            if settings.effects.tunnel {
                let dx = x as f64 - center_x;
                let dy = y as f64 - center_y;
                let dist = (dx * dx + dy * dy).sqrt();
                let brightness =
                    (1.0 - (dist / max_dist).powf(settings.params.tunnel_power)).max(0.0);
                colour = colour.scaled(brightness);
            }

            if settings.effects.crush {
                colour = Colour {
                    r: crush_channel(colour.r, crush_factor),
                    g: crush_channel(colour.g, crush_factor),
                    b: crush_channel(colour.b, crush_factor),
                };
            }

            if settings.effects.scan_lines && y % settings.params.scan_line_spacing == 0 {
                colour = colour.scaled(settings.params.scan_line_darkness);
            }

            buffer.set_pixel(x, y, colour);
        }
    }
}

/// Quantises one channel to its bucket's representative value.
///
/// The bucket index is `trunc(channel / factor)`; the representative is the
/// smallest channel value that maps back to the same bucket
/// (`ceil(bucket * factor)`), so re-applying the crush changes nothing even
/// when the factor is fractional.
#[must_use]
pub fn crush_channel(channel: u8, crush_factor: f64) -> u8 {
    ((channel as f64 / crush_factor).trunc() * crush_factor).ceil() as u8
}
