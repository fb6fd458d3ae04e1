#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{DateTime, Local, TimeZone};

    use crate::application::services::message_formatter::{
        MessageFormatter, SECONDARY_TEXT_SCALE, format_timestamp,
    };
    use crate::domain::entities::{
        AttributedText, ColorRef, DeliveryState, DisplayContext, MessageType, PresenceEventKind,
        ResourceKey, TextStyle,
    };
    use crate::domain::errors::ResourceError;
    use crate::domain::ports::mocks::{FailingStringResolver, MockStringResolver};

    const PATTERN: &str = "%H:%M";

    fn timestamp() -> DateTime<Local> {
        Local.with_ymd_and_hms(2023, 11, 20, 9, 41, 0).single().unwrap()
    }

    fn resolver() -> Arc<MockStringResolver> {
        Arc::new(
            MockStringResolver::new()
                .with(ResourceKey::TimeStampPattern, PATTERN)
                .with(ResourceKey::Me, "Me")
                .with(ResourceKey::MsgSentFailed, "Message could not be sent"),
        )
    }

    fn formatter_with(resolver: Arc<MockStringResolver>) -> MessageFormatter {
        MessageFormatter::new(resolver, ColorRef::new("gray"))
    }

    fn formatter() -> MessageFormatter {
        formatter_with(resolver())
    }

    fn assert_ranges_contained(text: &AttributedText) {
        for range in text.ranges() {
            assert!(range.start() <= range.end(), "{range:?}");
            assert!(range.end() <= text.len(), "{range:?}");
        }
    }

    #[test]
    fn test_scrolling_message_is_plain() {
        let text = formatter()
            .compose_message(Some("Bob"), "hi", Some(timestamp()), DisplayContext::Scrolling)
            .unwrap();

        assert_eq!(text.text(), "Bob: hi");
        assert!(text.ranges().is_empty());
    }

    #[test]
    fn test_scrolling_message_skips_pattern_lookup() {
        let resolver = resolver();
        formatter_with(resolver.clone())
            .compose_message(Some("Bob"), "hi", Some(timestamp()), DisplayContext::Scrolling)
            .unwrap();

        assert!(resolver.calls().is_empty());
    }

    #[test]
    fn test_static_message_layout() {
        let date = format_timestamp(PATTERN, timestamp()).unwrap();
        let text = formatter()
            .compose_message(Some("Bob"), "hi", Some(timestamp()), DisplayContext::Static)
            .unwrap();

        assert_eq!(text.text(), format!("Bob: hi\n{date}"));
        assert_eq!(text.ranges().len(), 4);

        let bold = &text.ranges()[0];
        assert_eq!(bold.style(), &TextStyle::Bold);
        assert_eq!(bold.range(), 0.."Bob: hi".len());

        let date_start = "Bob: hi\n".len();
        let expected = [
            TextStyle::Italic,
            TextStyle::RelativeSize(SECONDARY_TEXT_SCALE),
            TextStyle::ForegroundColor(ColorRef::new("gray")),
        ];
        for (range, style) in text.ranges()[1..].iter().zip(expected.iter()) {
            assert_eq!(range.style(), style);
            assert_eq!(range.range(), date_start..text.len());
            assert_eq!(text.slice(range), date);
        }
        assert_ranges_contained(&text);
    }

    #[test]
    fn test_timestamp_ranges_exclude_newline() {
        let text = formatter()
            .compose_message(Some("Bob"), "hi", Some(timestamp()), DisplayContext::Static)
            .unwrap();
        let newline = text.text().find('\n').unwrap();

        for range in &text.ranges()[1..] {
            assert!(range.start() > newline);
        }
        assert!(text.ranges()[0].end() <= newline);
    }

    #[test]
    fn test_static_message_without_timestamp() {
        let text = formatter()
            .compose_message(Some("Bob"), "hi", None, DisplayContext::Static)
            .unwrap();

        assert_eq!(text.text(), "Bob: hi");
        assert_eq!(text.ranges().len(), 1);
        assert_eq!(text.ranges()[0].style(), &TextStyle::Bold);
    }

    #[test]
    fn test_message_without_sender() {
        for context in [DisplayContext::Scrolling, DisplayContext::Static] {
            let text = formatter()
                .compose_message(None, "hi", None, context)
                .unwrap();
            assert_eq!(text.text(), "hi");
            assert!(!text.text().contains(": "));
        }
    }

    #[test]
    fn test_message_body_is_normalized() {
        let text = formatter()
            .compose_message(Some("Bob"), "<b>a</b>\r\nb", None, DisplayContext::Scrolling)
            .unwrap();
        assert_eq!(text.text(), "Bob: a\nb");
    }

    #[test]
    fn test_empty_body_static() {
        let text = formatter()
            .compose_message(None, "", None, DisplayContext::Static)
            .unwrap();
        assert!(text.is_empty());
        assert_eq!(text.ranges().len(), 1);
        assert!(text.ranges()[0].is_empty());
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        let resolver = Arc::new(MockStringResolver::new().with(ResourceKey::TimeStampPattern, "%Q"));
        let err = formatter_with(resolver)
            .compose_message(Some("Bob"), "hi", Some(timestamp()), DisplayContext::Static)
            .unwrap_err();
        assert_eq!(err, ResourceError::invalid_pattern("%Q"));
    }

    #[test]
    fn test_outgoing_uses_me_label_and_ignores_delivery() {
        let f = formatter();
        let texts: Vec<AttributedText> = [
            DeliveryState::Neutral,
            DeliveryState::Delivered,
            DeliveryState::Undelivered,
        ]
        .into_iter()
        .map(|d| {
            f.compose_outgoing("sent", Some(timestamp()), DisplayContext::Static, d)
                .unwrap()
        })
        .collect();

        assert!(texts[0].text().starts_with("Me: sent\n"));
        assert_eq!(texts[0], texts[1]);
        assert_eq!(texts[1], texts[2]);
    }

    #[test]
    fn test_incoming_matches_compose_message() {
        let f = formatter();
        let incoming = f
            .compose_incoming("Ann", "yo", Some(timestamp()), DisplayContext::Static)
            .unwrap();
        let message = f
            .compose_message(Some("Ann"), "yo", Some(timestamp()), DisplayContext::Static)
            .unwrap();
        assert_eq!(incoming, message);
    }

    #[test]
    fn test_presence_group_join() {
        let resolver = resolver();
        let text = formatter_with(resolver.clone())
            .compose_presence(
                "Alice",
                PresenceEventKind::Available.into(),
                true,
                DisplayContext::Static,
            )
            .unwrap()
            .unwrap();

        assert_eq!(
            resolver.calls(),
            vec![(ResourceKey::ContactJoined, vec!["Alice".to_string()])]
        );
        assert_eq!(text.text(), "contact_joined(Alice)");
        assert_eq!(text.ranges().len(), 2);
        assert_eq!(text.ranges()[0].style(), &TextStyle::Italic);
        assert_eq!(
            text.ranges()[1].style(),
            &TextStyle::RelativeSize(SECONDARY_TEXT_SCALE)
        );
        for range in text.ranges() {
            assert_eq!(range.range(), 0..text.len());
        }
        assert!(
            !text
                .ranges()
                .iter()
                .any(|r| matches!(r.style(), TextStyle::ForegroundColor(_)))
        );
    }

    #[test]
    fn test_presence_scrolling_is_plain() {
        let text = formatter()
            .compose_presence(
                "Alice",
                PresenceEventKind::Unavailable.into(),
                false,
                DisplayContext::Scrolling,
            )
            .unwrap()
            .unwrap();

        assert_eq!(text.text(), "contact_offline(Alice)");
        assert!(text.ranges().is_empty());
    }

    #[test]
    fn test_presence_unknown_kind_renders_nothing() {
        let resolver = resolver();
        let f = formatter_with(resolver.clone());

        for kind in [MessageType::Incoming, MessageType::Status, MessageType::from(77)] {
            for context in [DisplayContext::Scrolling, DisplayContext::Static] {
                assert_eq!(f.compose_presence("Alice", kind, true, context).unwrap(), None);
            }
        }
        assert!(resolver.calls().is_empty());
    }

    #[test]
    fn test_error_notice_ignores_code() {
        let f = formatter();
        let first = f.compose_error(0).unwrap();

        assert_eq!(first.text(), "Message could not be sent");
        assert!(first.ranges().is_empty());
        for code in [-1, 1, 404, i32::MAX] {
            assert_eq!(f.compose_error(code).unwrap(), first);
        }
    }

    #[test]
    fn test_resolver_failures_propagate() {
        let f = MessageFormatter::new(Arc::new(FailingStringResolver), ColorRef::default());

        assert_eq!(
            f.compose_error(1).unwrap_err(),
            ResourceError::missing(ResourceKey::MsgSentFailed)
        );
        assert!(
            f.compose_presence("A", MessageType::PresenceAway, false, DisplayContext::Static)
                .is_err()
        );
        assert!(
            f.compose_outgoing("x", None, DisplayContext::Scrolling, DeliveryState::Neutral)
                .is_err()
        );
        // no lookups needed
        assert!(
            f.compose_message(Some("A"), "x", Some(timestamp()), DisplayContext::Scrolling)
                .is_ok()
        );
    }

    #[test]
    fn test_ranges_stay_within_text() {
        let f = formatter();
        let bodies = ["", "hi", "ünïcödé <i>x</i>", "a\r\nb\rc", "<unterminated"];

        for body in bodies {
            for context in [DisplayContext::Scrolling, DisplayContext::Static] {
                for sender in [None, Some("Bob"), Some("Zoë")] {
                    let text = f
                        .compose_message(sender, body, Some(timestamp()), context)
                        .unwrap();
                    assert_ranges_contained(&text);
                }
            }
        }

        for kind in 0..10u8 {
            if let Some(text) = f
                .compose_presence("Zoë", MessageType::from(kind), false, DisplayContext::Static)
                .unwrap()
            {
                assert_ranges_contained(&text);
            }
        }
    }
}
