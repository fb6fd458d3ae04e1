use serde::{Deserialize, Serialize};

/// Chat-log entry type as stored by the chat provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
#[allow(missing_docs)]
pub enum MessageType {
    Incoming,
    Outgoing,
    PresenceAvailable,
    PresenceAway,
    PresenceDnd,
    PresenceUnavailable,
    ConvertedToGroupChat,
    Status,
    Postponed,
    /// Unrecognized code; only built by `MessageType::from(u8)`.
    Unknown(UnknownCode),
}

/// Entry type code outside the known range. Never one of the known codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnknownCode(u8);

impl UnknownCode {
    /// Raw code as stored.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl From<u8> for MessageType {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::Incoming,
            1 => Self::Outgoing,
            2 => Self::PresenceAvailable,
            3 => Self::PresenceAway,
            4 => Self::PresenceDnd,
            5 => Self::PresenceUnavailable,
            6 => Self::ConvertedToGroupChat,
            7 => Self::Status,
            8 => Self::Postponed,
            other => Self::Unknown(UnknownCode(other)),
        }
    }
}

impl From<MessageType> for u8 {
    fn from(value: MessageType) -> Self {
        match value {
            MessageType::Incoming => 0,
            MessageType::Outgoing => 1,
            MessageType::PresenceAvailable => 2,
            MessageType::PresenceAway => 3,
            MessageType::PresenceDnd => 4,
            MessageType::PresenceUnavailable => 5,
            MessageType::ConvertedToGroupChat => 6,
            MessageType::Status => 7,
            MessageType::Postponed => 8,
            MessageType::Unknown(code) => code.get(),
        }
    }
}

impl MessageType {
    /// Returns the presence event this entry describes, if any.
    #[must_use]
    pub const fn presence_kind(self) -> Option<PresenceEventKind> {
        match self {
            Self::PresenceAvailable => Some(PresenceEventKind::Available),
            Self::PresenceAway => Some(PresenceEventKind::Away),
            Self::PresenceDnd => Some(PresenceEventKind::DoNotDisturb),
            Self::PresenceUnavailable => Some(PresenceEventKind::Unavailable),
            _ => None,
        }
    }
}

/// Contact presence change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresenceEventKind {
    /// Came online, or joined a group chat.
    Available,
    /// Went away.
    Away,
    /// Do not disturb.
    DoNotDisturb,
    /// Went offline, or left a group chat.
    Unavailable,
}

impl From<PresenceEventKind> for MessageType {
    fn from(kind: PresenceEventKind) -> Self {
        match kind {
            PresenceEventKind::Available => Self::PresenceAvailable,
            PresenceEventKind::Away => Self::PresenceAway,
            PresenceEventKind::DoNotDisturb => Self::PresenceDnd,
            PresenceEventKind::Unavailable => Self::PresenceUnavailable,
        }
    }
}

/// Transmission outcome of an outgoing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryState {
    /// Pending or not tracked.
    #[default]
    Neutral,
    /// Acknowledged by the peer.
    Delivered,
    /// Failed to deliver.
    Undelivered,
}

/// Status icon shown next to an outgoing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryIcon {
    /// Delivery confirmed.
    Delivered,
    /// Delivery failed.
    Failed,
}

impl DeliveryState {
    /// Icon to show for this state; `None` hides the icon.
    #[must_use]
    pub const fn icon(self) -> Option<DeliveryIcon> {
        match self {
            Self::Neutral => None,
            Self::Delivered => Some(DeliveryIcon::Delivered),
            Self::Undelivered => Some(DeliveryIcon::Failed),
        }
    }
}

/// Display mode of the message list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayContext {
    /// Fast-scrolling transcript: plain text, no timestamp, no styling.
    Scrolling,
    /// Settled view: full styling.
    #[default]
    Static,
}

impl DisplayContext {
    /// Returns true while the list is scrolling.
    #[must_use]
    pub const fn is_scrolling(self) -> bool {
        matches!(self, Self::Scrolling)
    }
}

impl From<bool> for DisplayContext {
    fn from(scrolling: bool) -> Self {
        if scrolling {
            Self::Scrolling
        } else {
            Self::Static
        }
    }
}
