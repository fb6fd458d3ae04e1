mod message_view;

pub use message_view::{IconSlot, MessageView, RenderedMessage, to_text};
