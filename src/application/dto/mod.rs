//! Data transfer objects for the application layer.

mod transcript_entry;

pub use transcript_entry::TranscriptEntry;
