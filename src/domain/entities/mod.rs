//! Domain entity definitions.

mod attributed_text;
mod color_ref;
mod message;
mod resource_key;

pub use attributed_text::{AttributedText, AttributedTextBuilder, Segment, StyleRange, TextStyle};
pub use color_ref::ColorRef;
pub use message::{
    DeliveryIcon, DeliveryState, DisplayContext, MessageType, PresenceEventKind, UnknownCode,
};
pub use resource_key::ResourceKey;
