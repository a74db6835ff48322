#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    /// Scales all three channels by `brightness`, expected in `[0, 1]`.
    #[must_use]
    pub fn scaled(self, brightness: f64) -> Self {
        Self {
            r: (self.r as f64 * brightness) as u8,
            g: (self.g as f64 * brightness) as u8,
            b: (self.b as f64 * brightness) as u8,
        }
    }
}
