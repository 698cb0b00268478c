//! Session state for an interactive color tool.

use crate::{InvalidFormat, Rgb, Swatch};

/// Holds the color a session is currently displaying.
///
/// Callers own one of these and feed it every code the user enters; a code
/// that fails to parse leaves the current swatch untouched, so the display
/// keeps showing the last accepted color.
#[derive(Clone, Debug, Default)]
pub struct ColorTool {
    current: Option<Swatch>,
}

impl ColorTool {
    /// Create a tool with no active color.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a color code into the tool. A recognized code becomes the active
    /// swatch; an unrecognized one is rejected and the previous swatch stays
    /// active.
    pub fn input(&mut self, code: &str) -> Result<&Swatch, InvalidFormat> {
        let swatch = Swatch::parse(code)?;
        Ok(self.current.insert(swatch))
    }

    /// Make a sampled pixel the active swatch.
    pub fn pick(&mut self, rgb: Rgb) -> &Swatch {
        self.current.insert(Swatch::from(rgb))
    }

    /// The active swatch, if any input has been accepted yet.
    pub fn current(&self) -> Option<&Swatch> {
        self.current.as_ref()
    }
}
