use rand::Rng;
use rand::rngs::StdRng;

use crate::core::effects::state::EffectState;

/// Continuous-hue coloring parameters:
/// `(hue_speed, sat_speed, val_speed, hue_offset, sat_offset, val_offset)`.
pub type PsychedelicParams = (f64, f64, f64, f64, f64, f64);

/// Palette multipliers `(r_mult, g_mult, b_mult)` shared by the four
/// discrete formulas.
pub type PaletteParams = (f64, f64, f64);

/// Numeric parameters behind every effect toggle.
///
/// Each tuple is regenerated with fresh random values when its effect
/// transitions off→on, and only then — toggling an effect off and back on
/// changes its look, but an effect left on keeps the look it came up with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectParams {
    pub psychedelic: PsychedelicParams,
    pub warp_frequency: f64,
    pub warp_amplitude: f64,
    pub tunnel_power: f64,
    pub glitch_chance: f64,
    pub crush_levels: u32,
    pub rgb_shift_amount: i32,
    pub julia_morph_radius: f64,
    pub palette: PaletteParams,
    pub scan_line_spacing: u32,
    pub scan_line_darkness: f64,
}

impl Default for EffectParams {
    fn default() -> Self {
        Self {
            psychedelic: (2.0, 3.0, 1.0, 0.0, 0.0, 0.0),
            warp_frequency: 30.0,
            warp_amplitude: 10.0,
            tunnel_power: 2.0,
            glitch_chance: 0.001,
            crush_levels: 4,
            rgb_shift_amount: 2,
            julia_morph_radius: 0.005,
            palette: (15.0, 5.0, 2.0),
            scan_line_spacing: 4,
            scan_line_darkness: 0.7,
        }
    }
}

impl EffectParams {
    /// Re-rolls the parameters of every effect that is on in `next` but was
    /// off in `previous`.
    pub fn randomize_rising_edges(
        &mut self,
        previous: EffectState,
        next: EffectState,
        rng: &mut StdRng,
    ) {
        if next.psychedelic && !previous.psychedelic {
            self.psychedelic = (
                rng.gen_range(1.0..4.0),
                rng.gen_range(1.0..4.0),
                rng.gen_range(0.5..2.0),
                rng.r#gen(),
                rng.r#gen(),
                rng.r#gen(),
            );
        }
        if next.warp_bands && !previous.warp_bands {
            self.warp_frequency = rng.gen_range(15.0..60.0);
            self.warp_amplitude = rng.gen_range(5.0..15.0);
        }
        if next.tunnel && !previous.tunnel {
            self.tunnel_power = rng.gen_range(1.5..3.5);
        }
        if next.glitch && !previous.glitch {
            self.glitch_chance = rng.gen_range(0.0005..0.0025);
        }
        if next.crush && !previous.crush {
            self.crush_levels = rng.gen_range(3..=8);
        }
        if next.rgb_shift && !previous.rgb_shift {
            self.rgb_shift_amount = rng.gen_range(1..=4);
        }
        if next.julia_morph && !previous.julia_morph {
            self.julia_morph_radius = rng.gen_range(0.002..0.01);
        }
        // Neon and emboss share the palette multipliers.
        if (next.neon_edges && !previous.neon_edges) || (next.emboss && !previous.emboss) {
            self.palette = self.random_palette(rng);
        }
        if next.scan_lines && !previous.scan_lines {
            self.scan_line_spacing = rng.gen_range(3..=6);
            self.scan_line_darkness = rng.gen_range(0.5..0.8);
        }
    }

    /// Fresh palette multipliers, also used by the snapshot export path.
    #[must_use]
    pub fn random_palette(&self, rng: &mut StdRng) -> PaletteParams {
        (
            rng.gen_range(5.0..20.0),
            rng.gen_range(2.0..10.0),
            rng.gen_range(1.0..5.0),
        )
    }
}
