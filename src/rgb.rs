//! Model a color as a triplet of 8-bit RGB channels.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::InvalidFormat;

/// A color specified as red, green and blue channels in [0, 255].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    /// The red channel of the color.
    pub red: u8,
    /// The green channel of the color.
    pub green: u8,
    /// The blue channel of the color.
    pub blue: u8,
}

impl Rgb {
    /// Create a new color with RGB (red, green, blue) channels.
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Parse a hex color code. The leading `#` is optional and both the
    /// 3-digit shorthand and the full 6-digit form are accepted, in either
    /// case.
    pub fn from_hex(code: &str) -> Result<Self, InvalidFormat> {
        let digits = code.strip_prefix('#').unwrap_or(code);

        if !matches!(digits.len(), 3 | 6) || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(InvalidFormat::new(code));
        }

        let expanded;
        let digits = if digits.len() == 3 {
            // "A3F" reads as "AA33FF".
            expanded = digits.chars().flat_map(|c| [c, c]).collect::<String>();
            expanded.as_str()
        } else {
            digits
        };

        let packed =
            u32::from_str_radix(digits, 16).map_err(|_| InvalidFormat::new(code))?;
        Ok(Self::new(
            ((packed >> 16) & 0xFF) as u8,
            ((packed >> 8) & 0xFF) as u8,
            (packed & 0xFF) as u8,
        ))
    }

    /// Render the color as a canonical hex code: `#` followed by each channel
    /// as two uppercase, zero-padded hex digits.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.red, self.green, self.blue)
    }
}
