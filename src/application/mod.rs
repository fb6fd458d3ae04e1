//! Application layer with formatting services and DTOs.

/// Data transfer objects.
pub mod dto;
/// Formatting and text services.
pub mod services;

pub use dto::TranscriptEntry;
pub use services::{LinkExtractor, MessageFormatter, TextNormalizer};
