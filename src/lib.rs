//! colorcode converts color codes between their hex, RGB and HSL notations
//! and resolves any recognized code into all three at once.
//!
//! ```rust
//! use colorcode::Swatch;
//!
//! let swatch = Swatch::parse("#FF5733")?;
//! assert_eq!(swatch.rgb.to_string(), "rgb(255, 87, 51)");
//! assert_eq!(swatch.hsl.to_string(), "hsl(11, 100%, 60%)");
//! # Ok::<(), colorcode::InvalidFormat>(())
//! ```

#![deny(missing_docs)]

mod color;
mod convert;
mod error;
mod hsl;
mod parse;
mod rgb;
mod swatch;
mod tool;


pub use color::{Component, Components};
pub use error::InvalidFormat;
pub use hsl::Hsl;
pub use parse::{classify, Notation};
pub use rgb::Rgb;
pub use swatch::Swatch;
pub use tool::ColorTool;
