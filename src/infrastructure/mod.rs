//! Infrastructure layer with configuration, resources, and transcript input.

/// Application configuration.
pub mod config;
/// Localized string resources.
pub mod resources;
/// Transcript input.
pub mod transcript;

pub use config::{AppConfig, CliArgs, LogLevel, StorageManager};
pub use resources::StringTable;
pub use transcript::{TranscriptError, read_transcript};
