use std::fmt;

/// HSL colour with alpha. Saturation and lightness are percentages.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
    pub alpha: f32,
}

impl Hsla {
    #[inline]
    pub fn new(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> Self {
        Self {
            hue,
            saturation,
            lightness,
            alpha,
        }
    }

    /// Fully saturated colour for a particle hue.
    #[inline]
    pub fn vivid(hue: f32, lightness: f32, alpha: f32) -> Self {
        Self::new(hue, 100.0, lightness, alpha)
    }

    #[inline]
    pub fn white(alpha: f32) -> Self {
        Self::new(0.0, 0.0, 100.0, alpha)
    }
}

// CSS colour string, directly usable as a canvas fill/stroke style.
impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsla({:.1}, {:.1}%, {:.1}%, {:.3})",
            self.hue, self.saturation, self.lightness, self.alpha
        )
    }
}
