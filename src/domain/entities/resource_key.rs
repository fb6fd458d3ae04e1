//! Keys into the localized string table.

use std::fmt;

/// Symbolic string-table key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum ResourceKey {
    ContactJoined,
    ContactOnline,
    ContactAway,
    ContactBusy,
    ContactLeft,
    ContactOffline,
    MsgSentFailed,
    Me,
    TimeStampPattern,
}

impl ResourceKey {
    /// Every key, in table order.
    pub const ALL: [Self; 9] = [
        Self::ContactJoined,
        Self::ContactOnline,
        Self::ContactAway,
        Self::ContactBusy,
        Self::ContactLeft,
        Self::ContactOffline,
        Self::MsgSentFailed,
        Self::Me,
        Self::TimeStampPattern,
    ];

    /// Table name of the key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ContactJoined => "contact_joined",
            Self::ContactOnline => "contact_online",
            Self::ContactAway => "contact_away",
            Self::ContactBusy => "contact_busy",
            Self::ContactLeft => "contact_left",
            Self::ContactOffline => "contact_offline",
            Self::MsgSentFailed => "msg_sent_failed",
            Self::Me => "me",
            Self::TimeStampPattern => "time_stamp_pattern",
        }
    }

    /// Looks a key up by table name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == name)
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
