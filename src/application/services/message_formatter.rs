//! Composition of chat-log entries into attributed text.

use std::fmt::Write as _;
use std::sync::Arc;

use chrono::format::StrftimeItems;
use chrono::{DateTime, Local};
use tracing::{debug, trace};

use super::text_normalizer::TextNormalizer;
use crate::domain::entities::{
    AttributedText, AttributedTextBuilder, ColorRef, DeliveryState, DisplayContext, MessageType,
    PresenceEventKind, ResourceKey, TextStyle,
};
use crate::domain::errors::ResourceError;
use crate::domain::ports::StringResolver;

/// Relative size of timestamp lines and presence notices.
pub const SECONDARY_TEXT_SCALE: f32 = 0.8;

/// Separator between sender label and body.
const SENDER_DELIMITER: &str = ": ";

/// Builds styled text for messages, presence notices, and error notices.
///
/// Holds no mutable state; every call returns a fresh value.
pub struct MessageFormatter {
    resolver: Arc<dyn StringResolver>,
    muted_color: ColorRef,
}

impl MessageFormatter {
    /// Creates a formatter resolving strings through `resolver` and drawing
    /// timestamps in `muted_color`.
    #[must_use]
    pub fn new(resolver: Arc<dyn StringResolver>, muted_color: ColorRef) -> Self {
        Self {
            resolver,
            muted_color,
        }
    }

    /// Composes a conversational message.
    ///
    /// While scrolling the result is `"<sender>: <body>"` with no styling and no
    /// timestamp. Otherwise sender prefix and body share one bold range and the
    /// timestamp, if any, follows on its own line.
    ///
    /// # Errors
    /// Returns `ResourceError` if the time stamp pattern cannot be resolved or
    /// is not a valid pattern.
    pub fn compose_message(
        &self,
        sender: Option<&str>,
        body: &str,
        timestamp: Option<DateTime<Local>>,
        context: DisplayContext,
    ) -> Result<AttributedText, ResourceError> {
        let body = TextNormalizer::normalize(body);
        let mut buf = AttributedText::builder();

        if let Some(sender) = sender {
            buf.append(sender);
            buf.append(SENDER_DELIMITER);
        }

        buf.append(&body);

        if context.is_scrolling() {
            return Ok(buf.build());
        }

        buf.apply(TextStyle::Bold, 0..buf.len());

        if let Some(timestamp) = timestamp {
            self.append_timestamp(&mut buf, timestamp)?;
        }

        Ok(buf.build())
    }

    /// Composes a message received from `contact`.
    ///
    /// # Errors
    /// See [`MessageFormatter::compose_message`].
    pub fn compose_incoming(
        &self,
        contact: &str,
        body: &str,
        timestamp: Option<DateTime<Local>>,
        context: DisplayContext,
    ) -> Result<AttributedText, ResourceError> {
        self.compose_message(Some(contact), body, timestamp, context)
    }

    /// Composes a message sent by the local user, labelled with the `me` string.
    ///
    /// `delivery` only drives the status icon and never changes the text.
    ///
    /// # Errors
    /// Returns `ResourceError` if the `me` label or the time stamp pattern
    /// cannot be resolved.
    pub fn compose_outgoing(
        &self,
        body: &str,
        timestamp: Option<DateTime<Local>>,
        context: DisplayContext,
        delivery: DeliveryState,
    ) -> Result<AttributedText, ResourceError> {
        trace!(?delivery, "composing outgoing message");
        let me = self.resolver.resolve(ResourceKey::Me, &[])?;
        self.compose_message(Some(&me), body, timestamp, context)
    }

    /// Composes a presence-change notice for `contact`.
    ///
    /// Returns `Ok(None)` when `kind` is not a presence event; callers render
    /// nothing in that case.
    ///
    /// # Errors
    /// Returns `ResourceError` if the template cannot be resolved.
    pub fn compose_presence(
        &self,
        contact: &str,
        kind: MessageType,
        is_group_chat: bool,
        context: DisplayContext,
    ) -> Result<Option<AttributedText>, ResourceError> {
        let Some(presence) = kind.presence_kind() else {
            debug!(?kind, "no presence text for message type");
            return Ok(None);
        };

        let body = self
            .resolver
            .resolve(presence_template(presence, is_group_chat), &[contact])?;

        if context.is_scrolling() {
            return Ok(Some(AttributedText::plain(body)));
        }

        let mut buf = AttributedText::builder();
        let span = buf.append(&body);
        buf.apply(TextStyle::Italic, span.clone());
        buf.apply(TextStyle::RelativeSize(SECONDARY_TEXT_SCALE), span);
        Ok(Some(buf.build()))
    }

    /// Composes the send-failure notice.
    ///
    /// `code` is accepted for callers that have one but does not select the
    /// message: every code renders the same text.
    ///
    /// # Errors
    /// Returns `ResourceError` if the notice string cannot be resolved.
    pub fn compose_error(&self, code: i32) -> Result<AttributedText, ResourceError> {
        debug!(code, "composing error notice");
        let text = self.resolver.resolve(ResourceKey::MsgSentFailed, &[])?;
        Ok(AttributedText::plain(text))
    }

    fn append_timestamp(
        &self,
        buf: &mut AttributedTextBuilder,
        timestamp: DateTime<Local>,
    ) -> Result<(), ResourceError> {
        let pattern = self.resolver.resolve(ResourceKey::TimeStampPattern, &[])?;
        let date = format_timestamp(&pattern, timestamp)?;

        buf.push_char('\n');
        let span = buf.append(&date);
        buf.apply(TextStyle::Italic, span.clone());
        buf.apply(TextStyle::RelativeSize(SECONDARY_TEXT_SCALE), span.clone());
        buf.apply(TextStyle::ForegroundColor(self.muted_color.clone()), span);
        Ok(())
    }
}

/// Template key for a presence event.
#[must_use]
pub const fn presence_template(kind: PresenceEventKind, is_group_chat: bool) -> ResourceKey {
    match kind {
        PresenceEventKind::Available if is_group_chat => ResourceKey::ContactJoined,
        PresenceEventKind::Available => ResourceKey::ContactOnline,
        PresenceEventKind::Away => ResourceKey::ContactAway,
        PresenceEventKind::DoNotDisturb => ResourceKey::ContactBusy,
        PresenceEventKind::Unavailable if is_group_chat => ResourceKey::ContactLeft,
        PresenceEventKind::Unavailable => ResourceKey::ContactOffline,
    }
}

/// Formats `timestamp` with a strftime `pattern`.
///
/// # Errors
/// Returns `ResourceError::InvalidPattern` if the pattern does not parse.
pub fn format_timestamp(pattern: &str, timestamp: DateTime<Local>) -> Result<String, ResourceError> {
    let mut out = String::new();
    write!(out, "{}", timestamp.format_with_items(StrftimeItems::new(pattern)))
        .map_err(|_| ResourceError::invalid_pattern(pattern))?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use test_case::test_case;

    #[test_case(PresenceEventKind::Available, true, ResourceKey::ContactJoined)]
    #[test_case(PresenceEventKind::Available, false, ResourceKey::ContactOnline)]
    #[test_case(PresenceEventKind::Away, true, ResourceKey::ContactAway)]
    #[test_case(PresenceEventKind::Away, false, ResourceKey::ContactAway)]
    #[test_case(PresenceEventKind::DoNotDisturb, true, ResourceKey::ContactBusy)]
    #[test_case(PresenceEventKind::DoNotDisturb, false, ResourceKey::ContactBusy)]
    #[test_case(PresenceEventKind::Unavailable, true, ResourceKey::ContactLeft)]
    #[test_case(PresenceEventKind::Unavailable, false, ResourceKey::ContactOffline)]
    fn test_presence_template(kind: PresenceEventKind, group: bool, expected: ResourceKey) {
        assert_eq!(presence_template(kind, group), expected);
    }

    #[test]
    fn test_format_timestamp() {
        let ts = Local.with_ymd_and_hms(2024, 3, 5, 14, 7, 9).single().unwrap();
        assert_eq!(format_timestamp("%H:%M", ts).unwrap(), "14:07");
        assert_eq!(format_timestamp("%Y-%m-%d %H:%M:%S", ts).unwrap(), "2024-03-05 14:07:09");
    }

    #[test]
    fn test_format_timestamp_invalid_pattern() {
        let ts = Local.with_ymd_and_hms(2024, 3, 5, 14, 7, 9).single().unwrap();
        let err = format_timestamp("%Q", ts).unwrap_err();
        assert_eq!(err, ResourceError::invalid_pattern("%Q"));
    }
}
