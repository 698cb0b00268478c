//! Textual recognition of color codes.
//!
//! A code is matched against the hex, `rgb()` and `hsl()` grammars in that
//! order; a code that matches none of them is rejected outright, with no
//! partial parse.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::InvalidFormat;
use crate::{Hsl, Rgb};

static HEX_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#?(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap());

static RGB_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^rgb\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*\)$").unwrap()
});

static HSL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^hsl\(\s*(\d{1,3})\s*,\s*(\d{1,3})%\s*,\s*(\d{1,3})%\s*\)$").unwrap()
});

/// The notation a color code is written in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notation {
    /// 3 or 6 hex digits with an optional leading `#`.
    Hex,
    /// The `rgb(r, g, b)` functional form.
    Rgb,
    /// The `hsl(h, s%, l%)` functional form.
    Hsl,
}

/// Classify a color code by notation without parsing its components.
pub fn classify(code: &str) -> Result<Notation, InvalidFormat> {
    if HEX_PATTERN.is_match(code) {
        Ok(Notation::Hex)
    } else if RGB_PATTERN.is_match(code) {
        Ok(Notation::Rgb)
    } else if HSL_PATTERN.is_match(code) {
        Ok(Notation::Hsl)
    } else {
        Err(InvalidFormat::new(code))
    }
}

pub(crate) fn rgb_functional(code: &str) -> Result<Rgb, InvalidFormat> {
    let captures = RGB_PATTERN
        .captures(code)
        .ok_or_else(|| InvalidFormat::new(code))?;

    let channel = |index: usize| {
        captures[index]
            .parse::<u8>()
            .map_err(|_| InvalidFormat::new(code))
    };

    Ok(Rgb::new(channel(1)?, channel(2)?, channel(3)?))
}

pub(crate) fn hsl_functional(code: &str) -> Result<Hsl, InvalidFormat> {
    let captures = HSL_PATTERN
        .captures(code)
        .ok_or_else(|| InvalidFormat::new(code))?;

    // 360 reads as a full turn back to 0; anything past it is rejected, as
    // are saturation and lightness above 100.
    let hue = captures[1]
        .parse::<u16>()
        .ok()
        .filter(|&hue| hue <= 360)
        .ok_or_else(|| InvalidFormat::new(code))?;
    let percent = |index: usize| {
        captures[index]
            .parse::<u8>()
            .ok()
            .filter(|&value| value <= 100)
            .ok_or_else(|| InvalidFormat::new(code))
    };

    Ok(Hsl::new(hue % 360, percent(2)?, percent(3)?))
}
