//! Domain layer with value objects, errors, and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;

pub use entities::{AttributedText, StyleRange, TextStyle};
pub use errors::ResourceError;
pub use ports::StringResolver;
