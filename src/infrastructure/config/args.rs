//! Command-line arguments.

use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "chatfmt",
    version,
    about = "Render chat-log transcripts as styled terminal text",
    long_about = None
)]
pub struct CliArgs {
    /// Transcript file (JSON lines). Reads stdin when omitted.
    #[arg(value_name = "TRANSCRIPT")]
    pub transcript: Option<PathBuf>,

    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Render as a fast-scrolling list (plain text, no timestamps).
    #[arg(long)]
    pub scrolling: Option<bool>,

    /// Treat presence changes as group chat joins and leaves.
    #[arg(long)]
    pub group_chat: Option<bool>,

    /// Timestamp color (name or hex code).
    #[arg(long)]
    pub muted_color: Option<String>,

    /// Print style ranges under each entry.
    #[arg(long)]
    pub show_ranges: bool,
}
