//! Message list row: formatted text plus delivery icon and links.

use chrono::{DateTime, Local};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};

use crate::application::dto::TranscriptEntry;
use crate::application::services::{LinkExtractor, LinkSpan, MessageFormatter};
use crate::domain::entities::{
    AttributedText, DeliveryIcon, DeliveryState, DisplayContext, MessageType, TextStyle,
};
use crate::domain::errors::ResourceError;
use crate::presentation::theme::Palette;

/// State of the delivery icon slot beside a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconSlot {
    /// Icon shown.
    Visible(DeliveryIcon),
    /// Slot keeps its width but shows nothing.
    Invisible,
    /// Slot collapsed.
    Gone,
}

/// A row ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedMessage {
    /// Formatted text with style ranges.
    pub content: AttributedText,
    /// Terminal rendering of `content`.
    pub text: Text<'static>,
    /// Delivery icon slot.
    pub icon: IconSlot,
    /// Links found in `content`.
    pub links: Vec<LinkSpan>,
}

impl RenderedMessage {
    /// URLs of the links in the row, in order.
    #[must_use]
    pub fn message_links(&self) -> Vec<&str> {
        self.links.iter().map(|l| l.url.as_str()).collect()
    }
}

/// Binds chat-log entries to rows.
pub struct MessageView {
    formatter: MessageFormatter,
    palette: Palette,
}

impl MessageView {
    /// Creates a view over a formatter and resolved palette.
    #[must_use]
    pub const fn new(formatter: MessageFormatter, palette: Palette) -> Self {
        Self { formatter, palette }
    }

    /// # Errors
    /// Returns `ResourceError` if formatting needs a string that cannot be resolved.
    pub fn bind_incoming(
        &self,
        contact: &str,
        body: &str,
        timestamp: Option<DateTime<Local>>,
        context: DisplayContext,
    ) -> Result<RenderedMessage, ResourceError> {
        let content = self
            .formatter
            .compose_incoming(contact, body, timestamp, context)?;
        Ok(self.render(content, Style::default().fg(self.palette.chat_msg), IconSlot::Invisible))
    }

    /// # Errors
    /// Returns `ResourceError` if formatting needs a string that cannot be resolved.
    pub fn bind_outgoing(
        &self,
        body: &str,
        timestamp: Option<DateTime<Local>>,
        context: DisplayContext,
        delivery: DeliveryState,
    ) -> Result<RenderedMessage, ResourceError> {
        let content = self
            .formatter
            .compose_outgoing(body, timestamp, context, delivery)?;
        let icon = delivery.icon().map_or(IconSlot::Gone, IconSlot::Visible);
        Ok(self.render(content, Style::default().fg(self.palette.chat_msg), icon))
    }

    /// Returns `Ok(None)` when `kind` has no presence text.
    ///
    /// # Errors
    /// Returns `ResourceError` if the template cannot be resolved.
    pub fn bind_presence(
        &self,
        contact: &str,
        kind: MessageType,
        is_group_chat: bool,
        context: DisplayContext,
    ) -> Result<Option<RenderedMessage>, ResourceError> {
        let Some(content) = self
            .formatter
            .compose_presence(contact, kind, is_group_chat, context)?
        else {
            return Ok(None);
        };
        let base = Style::default().fg(self.palette.chat_msg_presence);
        Ok(Some(self.render(content, base, IconSlot::Invisible)))
    }

    /// # Errors
    /// Returns `ResourceError` if the notice string cannot be resolved.
    pub fn bind_error(&self, code: i32) -> Result<RenderedMessage, ResourceError> {
        let content = self.formatter.compose_error(code)?;
        let base = Style::default().fg(self.palette.error);
        Ok(self.render(content, base, IconSlot::Invisible))
    }

    /// Dispatches a transcript entry to the matching bind operation.
    ///
    /// # Errors
    /// Returns `ResourceError` if formatting needs a string that cannot be resolved.
    pub fn bind_entry(
        &self,
        entry: &TranscriptEntry,
        context: DisplayContext,
        is_group_chat: bool,
    ) -> Result<Option<RenderedMessage>, ResourceError> {
        match entry {
            TranscriptEntry::Incoming {
                contact,
                body,
                timestamp,
            } => self
                .bind_incoming(contact, body, *timestamp, context)
                .map(Some),
            TranscriptEntry::Outgoing {
                body,
                timestamp,
                delivery,
            } => self
                .bind_outgoing(body, *timestamp, context, *delivery)
                .map(Some),
            TranscriptEntry::Presence {
                contact,
                message_type,
                group_chat,
            } => self.bind_presence(
                contact,
                *message_type,
                group_chat.unwrap_or(is_group_chat),
                context,
            ),
            TranscriptEntry::Error { code } => self.bind_error(*code).map(Some),
        }
    }

    fn render(&self, content: AttributedText, base: Style, icon: IconSlot) -> RenderedMessage {
        let text = to_text(&content, base, &self.palette);
        let links = LinkExtractor::extract_links(content.text());
        RenderedMessage {
            content,
            text,
            icon,
            links,
        }
    }
}

/// Converts attributed text to ratatui lines, splitting on `\n`.
#[must_use]
pub fn to_text(content: &AttributedText, base: Style, palette: &Palette) -> Text<'static> {
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();

    for segment in content.segments() {
        let style = segment
            .styles
            .iter()
            .fold(base, |style, s| style.patch(span_style(s, palette)));

        for (i, part) in segment.text.split('\n').enumerate() {
            if i > 0 {
                lines.push(Line::from(std::mem::take(&mut current)));
            }
            if !part.is_empty() {
                current.push(Span::styled(part.to_string(), style));
            }
        }
    }
    lines.push(Line::from(current));

    Text::from(lines)
}

fn span_style(style: &TextStyle, palette: &Palette) -> Style {
    match style {
        TextStyle::Bold => Style::default().add_modifier(Modifier::BOLD),
        TextStyle::Italic => Style::default().add_modifier(Modifier::ITALIC),
        TextStyle::RelativeSize(scale) if *scale < 1.0 => Style::default().add_modifier(Modifier::DIM),
        TextStyle::RelativeSize(_) => Style::default(),
        TextStyle::ForegroundColor(color) => Style::default().fg(palette.resolve(color)),
    }
}
