//! Resolve a color code into every notation the toolbox understands.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::parse::{self, Notation};
use crate::{classify, Hsl, InvalidFormat, Rgb};

/// A single color resolved into all of its renderings: typed RGB and HSL
/// values plus the canonical hex code.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Swatch {
    /// The color as RGB channels.
    pub rgb: Rgb,
    /// The color in the HSL notation.
    pub hsl: Hsl,
    /// The canonical hex code, uppercase and `#`-prefixed.
    pub hex: String,
}

impl Swatch {
    /// Resolve a color code written in any recognized notation. Surrounding
    /// whitespace is ignored.
    ///
    /// The notation the code was written in wins: its components are kept
    /// verbatim and the remaining renderings are derived from them.
    pub fn parse(code: &str) -> Result<Self, InvalidFormat> {
        let code = code.trim();
        match classify(code)? {
            Notation::Hex => Ok(Self::from(Rgb::from_hex(code)?)),
            Notation::Rgb => Ok(Self::from(parse::rgb_functional(code)?)),
            Notation::Hsl => Ok(Self::from(parse::hsl_functional(code)?)),
        }
    }
}

impl From<Rgb> for Swatch {
    fn from(rgb: Rgb) -> Self {
        Self {
            rgb,
            hsl: rgb.to_hsl(),
            hex: rgb.to_hex(),
        }
    }
}

impl From<Hsl> for Swatch {
    fn from(hsl: Hsl) -> Self {
        let rgb = hsl.to_rgb();
        Self {
            rgb,
            hsl,
            hex: rgb.to_hex(),
        }
    }
}

impl FromStr for Swatch {
    type Err = InvalidFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Swatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex)
    }
}
