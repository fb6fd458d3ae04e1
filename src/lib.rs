//! chatfmt - chat-log message formatting.
//!
//! Turns incoming and outgoing messages, presence changes, and error notices
//! into attributed text (a plain string plus style ranges) for message lists,
//! with a ratatui rendering sink and a terminal transcript viewer.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing formatting services and DTOs.
pub mod application;
/// Domain layer containing value objects, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing configuration and resource adapters.
pub mod infrastructure;
/// Presentation layer containing the message view and terminal output.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "chatfmt";
