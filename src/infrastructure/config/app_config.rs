//! Application configuration.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use super::args::CliArgs;
use crate::domain::entities::{ColorRef, DisplayContext};

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    Info,
    /// Warning level.
    #[default]
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path. Logs go to stderr when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Render as a fast-scrolling list (plain text, no timestamps).
    #[serde(default)]
    pub scrolling: bool,

    /// Treat presence changes as group chat joins and leaves.
    #[serde(default)]
    pub group_chat: bool,

    /// Theme configuration.
    #[serde(default)]
    pub theme: ThemeConfig,

    /// Overrides for the built-in string table, keyed by string name.
    #[serde(default)]
    pub strings: BTreeMap<String, String>,
}

/// Theme color tokens (names or hex codes).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Message text color.
    #[serde(default = "default_chat_msg_color")]
    pub chat_msg: ColorRef,

    /// Presence notice color.
    #[serde(default = "default_presence_color")]
    pub chat_msg_presence: ColorRef,

    /// Error notice color.
    #[serde(default = "default_error_color")]
    pub error: ColorRef,

    /// Timestamp color.
    #[serde(default = "default_muted_color")]
    pub muted: ColorRef,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            chat_msg: default_chat_msg_color(),
            chat_msg_presence: default_presence_color(),
            error: default_error_color(),
            muted: default_muted_color(),
        }
    }
}

fn default_chat_msg_color() -> ColorRef {
    ColorRef::new("Reset")
}

fn default_presence_color() -> ColorRef {
    ColorRef::new("Gray")
}

fn default_error_color() -> ColorRef {
    ColorRef::new("Red")
}

fn default_muted_color() -> ColorRef {
    ColorRef::new("DarkGray")
}

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: &CliArgs) {
        if let Some(config_path) = &args.config {
            self.config = Some(config_path.clone());
        }
        if let Some(log_path) = &args.log_path {
            self.log_path = Some(log_path.clone());
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(scrolling) = args.scrolling {
            self.scrolling = scrolling;
        }
        if let Some(group_chat) = args.group_chat {
            self.group_chat = group_chat;
        }
        if let Some(muted) = &args.muted_color {
            self.theme.muted = ColorRef::new(muted.as_str());
        }
    }

    /// Display context selected by the configuration.
    #[must_use]
    pub fn display_context(&self) -> DisplayContext {
        DisplayContext::from(self.scrolling)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            log_level: LogLevel::Warn,
            scrolling: false,
            group_chat: false,
            theme: ThemeConfig::default(),
            strings: BTreeMap::new(),
        }
    }
}
