/// The full set of per-effect boolean toggles, as presented by the
/// interactive layer. Plain data; edge detection against the previous state
/// happens in the render session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EffectState {
    pub psychedelic: bool,
    pub warp_bands: bool,
    pub tunnel: bool,
    pub glitch: bool,
    pub crush: bool,
    pub scan_lines: bool,
    pub rgb_shift: bool,
    pub neon_edges: bool,
    pub emboss: bool,
    pub julia_morph: bool,
    pub strobe: bool,
}

impl EffectState {
    /// Psychedelic coloring and palette strobing are mutually exclusive;
    /// enabling psychedelic drops strobe.
    pub fn resolve_conflicts(&mut self) {
        if self.psychedelic {
            self.strobe = false;
        }
    }
}
