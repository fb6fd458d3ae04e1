//! Opaque theme color token.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Color token supplied by the theme layer (a color name or hex code).
///
/// The formatter never interprets it; rendering sinks resolve it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorRef(String);

impl ColorRef {
    /// Creates a token.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the raw token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ColorRef {
    fn default() -> Self {
        Self::new("DarkGray")
    }
}

impl fmt::Display for ColorRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ColorRef {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
