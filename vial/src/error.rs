//! Crate-wide error types
//!
//! Assertions never fail with an error: a failed check is reported through a
//! [`Reporter`](crate::Reporter). The only fallible surface is parsing
//! configuration values.

use thiserror::Error;

/// Errors raised while reading configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A color mode string was not one of the recognized names
    #[error("invalid color mode '{value}': expected one of auto, always, never")]
    InvalidColorMode { value: String },
}

impl ConfigError {
    /// Create an InvalidColorMode error
    pub fn invalid_color_mode(value: impl Into<String>) -> Self {
        Self::InvalidColorMode {
            value: value.into(),
        }
    }
}
