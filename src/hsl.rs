//! Model a color with the HSL notation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A color specified as a hue angle with saturation and lightness percents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hsl {
    /// The hue angle of the color in degrees, in [0, 360).
    pub hue: u16,
    /// The saturation of the color in percent, in [0, 100].
    pub saturation: u8,
    /// The lightness of the color in percent, in [0, 100].
    pub lightness: u8,
}

impl Hsl {
    /// Create a new color with HSL (hue, saturation, lightness) components.
    ///
    /// The hue is brought into [0, 360); saturation and lightness are clamped
    /// to 100.
    pub fn new(hue: u16, saturation: u8, lightness: u8) -> Self {
        Self {
            hue: hue % 360,
            saturation: saturation.min(100),
            lightness: lightness.min(100),
        }
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.hue, self.saturation, self.lightness)
    }
}
