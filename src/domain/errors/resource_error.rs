//! String-table resolution error types.

use thiserror::Error;

use crate::domain::entities::ResourceKey;

/// Failures reported by a string resolver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum ResourceError {
    #[error("no string for key `{key}`")]
    MissingKey { key: ResourceKey },

    #[error("invalid time stamp pattern: {pattern}")]
    InvalidPattern { pattern: String },

    #[error("template `{key}` references argument {{{index}}} but only {supplied} supplied")]
    ArgumentCount {
        key: ResourceKey,
        index: usize,
        supplied: usize,
    },
}

impl ResourceError {
    /// Creates missing key error.
    #[must_use]
    pub const fn missing(key: ResourceKey) -> Self {
        Self::MissingKey { key }
    }

    /// Creates invalid pattern error.
    #[must_use]
    pub fn invalid_pattern(pattern: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
        }
    }
}
