//! The single error kind raised when a color code is not recognized.

use thiserror::Error;

/// Raised when a string cannot be parsed as any recognized color code. It
/// carries the rejected input verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid color format: {0:?}")]
pub struct InvalidFormat(pub String);

impl InvalidFormat {
    /// Create an error recording the rejected color code.
    pub fn new(code: &str) -> Self {
        Self(code.to_string())
    }
}
