//! Presentation layer: theme resolution, message rows, and terminal output.

/// Terminal output.
pub mod terminal_printer;
/// Theme colors.
pub mod theme;
/// Message list widgets.
pub mod widgets;

pub use terminal_printer::TerminalPrinter;
pub use theme::Palette;
pub use widgets::{IconSlot, MessageView, RenderedMessage};
