//! Chat-log transcript entries.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{DeliveryState, MessageType};

/// One line of a chat-log transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TranscriptEntry {
    /// Message received from a contact.
    Incoming {
        /// Sender label.
        contact: String,
        /// Decrypted body.
        body: String,
        /// Receive time.
        #[serde(default)]
        timestamp: Option<DateTime<Local>>,
    },
    /// Message sent by the local user.
    Outgoing {
        /// Decrypted body.
        body: String,
        /// Send time.
        #[serde(default)]
        timestamp: Option<DateTime<Local>>,
        /// Delivery outcome.
        #[serde(default)]
        delivery: DeliveryState,
    },
    /// Presence change of a contact.
    Presence {
        /// Contact whose presence changed.
        contact: String,
        /// Raw entry type code.
        #[serde(rename = "type")]
        message_type: MessageType,
        /// Overrides the transcript-wide group chat flag.
        #[serde(default)]
        group_chat: Option<bool>,
    },
    /// Send failure notice.
    Error {
        /// Provider error code.
        #[serde(default)]
        code: i32,
    },
}

impl TranscriptEntry {
    /// Short name of the entry kind, for logging.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Incoming { .. } => "incoming",
            Self::Outgoing { .. } => "outgoing",
            Self::Presence { .. } => "presence",
            Self::Error { .. } => "error",
        }
    }
}
