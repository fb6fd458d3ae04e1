//! Writes rendered rows to a terminal stream.

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Attribute, Color as TermColor, ContentStyle, Print, PrintStyledContent, StyledContent};
use ratatui::style::{Color, Modifier, Style};

use crate::domain::entities::{DeliveryIcon, TextStyle};
use crate::presentation::widgets::{IconSlot, RenderedMessage};

const ICON_DELIVERED: &str = "\u{2713}";
const ICON_FAILED: &str = "\u{2717}";

/// Streams rows with ANSI styling.
pub struct TerminalPrinter<W: Write> {
    out: W,
    show_ranges: bool,
}

impl<W: Write> TerminalPrinter<W> {
    /// Wraps `out`; `show_ranges` also prints each style range.
    pub const fn new(out: W, show_ranges: bool) -> Self {
        Self { out, show_ranges }
    }

    /// Prints one row followed by a blank line.
    ///
    /// # Errors
    /// Returns any error from the underlying writer.
    pub fn print(&mut self, message: &RenderedMessage) -> io::Result<()> {
        let last = message.text.lines.len().saturating_sub(1);

        for (i, line) in message.text.lines.iter().enumerate() {
            for span in &line.spans {
                let styled = StyledContent::new(to_content_style(span.style), &*span.content);
                queue!(self.out, PrintStyledContent(styled))?;
            }
            if i == last {
                self.print_icon(message.icon)?;
            }
            queue!(self.out, Print("\n"))?;
        }

        if self.show_ranges {
            for range in message.content.ranges() {
                queue!(
                    self.out,
                    Print(format!(
                        "  [{}..{}) {}\n",
                        range.start(),
                        range.end(),
                        describe(range.style())
                    ))
                )?;
            }
        }

        queue!(self.out, Print("\n"))?;
        self.out.flush()
    }

    /// Consumes the printer and returns the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn print_icon(&mut self, icon: IconSlot) -> io::Result<()> {
        match icon {
            IconSlot::Visible(DeliveryIcon::Delivered) => queue!(self.out, Print(format!(" {ICON_DELIVERED}"))),
            IconSlot::Visible(DeliveryIcon::Failed) => queue!(self.out, Print(format!(" {ICON_FAILED}"))),
            IconSlot::Invisible => queue!(self.out, Print("  ")),
            IconSlot::Gone => Ok(()),
        }
    }
}

fn describe(style: &TextStyle) -> String {
    match style {
        TextStyle::Bold => "bold".to_string(),
        TextStyle::Italic => "italic".to_string(),
        TextStyle::RelativeSize(scale) => format!("size x{scale}"),
        TextStyle::ForegroundColor(color) => format!("color {color}"),
    }
}

fn to_content_style(style: Style) -> ContentStyle {
    let mut content = ContentStyle::new();
    content.foreground_color = style.fg.and_then(to_term_color);

    for (modifier, attribute) in [
        (Modifier::BOLD, Attribute::Bold),
        (Modifier::ITALIC, Attribute::Italic),
        (Modifier::DIM, Attribute::Dim),
    ] {
        if style.add_modifier.contains(modifier) {
            content.attributes.set(attribute);
        }
    }

    content
}

fn to_term_color(color: Color) -> Option<TermColor> {
    let mapped = match color {
        Color::Reset => return None,
        Color::Black => TermColor::Black,
        Color::Red => TermColor::DarkRed,
        Color::Green => TermColor::DarkGreen,
        Color::Yellow => TermColor::DarkYellow,
        Color::Blue => TermColor::DarkBlue,
        Color::Magenta => TermColor::DarkMagenta,
        Color::Cyan => TermColor::DarkCyan,
        Color::Gray => TermColor::Grey,
        Color::DarkGray => TermColor::DarkGrey,
        Color::LightRed => TermColor::Red,
        Color::LightGreen => TermColor::Green,
        Color::LightYellow => TermColor::Yellow,
        Color::LightBlue => TermColor::Blue,
        Color::LightMagenta => TermColor::Magenta,
        Color::LightCyan => TermColor::Cyan,
        Color::White => TermColor::White,
        Color::Rgb(r, g, b) => TermColor::Rgb { r, g, b },
        Color::Indexed(i) => TermColor::AnsiValue(i),
    };
    Some(mapped)
}
