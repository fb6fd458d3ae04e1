//! JSON-lines transcript reader.

use std::io::BufRead;

use thiserror::Error;
use tracing::debug;

use crate::application::dto::TranscriptEntry;

/// Transcript reading failures.
#[derive(Debug, Error)]
pub enum TranscriptError {
    /// Input could not be read.
    #[error("failed to read transcript: {0}")]
    Io(#[from] std::io::Error),

    /// A line is not a valid entry.
    #[error("line {line}: {source}")]
    Parse {
        /// One-based line number.
        line: usize,
        /// JSON error.
        #[source]
        source: serde_json::Error,
    },
}

/// Reads one entry per line, skipping blank lines.
///
/// # Errors
/// Returns `TranscriptError` on the first unreadable or malformed line.
pub fn read_transcript<R: BufRead>(reader: R) -> Result<Vec<TranscriptEntry>, TranscriptError> {
    let mut entries = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let entry: TranscriptEntry =
            serde_json::from_str(&line).map_err(|source| TranscriptError::Parse {
                line: index + 1,
                source,
            })?;
        entries.push(entry);
    }

    debug!(count = entries.len(), "transcript loaded");
    Ok(entries)
}
