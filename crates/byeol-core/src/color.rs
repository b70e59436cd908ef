//! Renderer-agnostic color type.

/// An RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Create a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Blend this color over `background` with the given alpha in `[0, 1]`.
    ///
    /// Terminals have no alpha channel, so translucency is approximated by
    /// mixing toward the background color.
    pub fn blend_over(self, background: Rgb, alpha: f64) -> Rgb {
        let alpha = alpha.clamp(0.0, 1.0);
        let mix = |fg: u8, bg: u8| {
            (f64::from(bg) + (f64::from(fg) - f64::from(bg)) * alpha).round() as u8
        };
        Rgb {
            r: mix(self.r, background.r),
            g: mix(self.g, background.g),
            b: mix(self.b, background.b),
        }
    }
}
