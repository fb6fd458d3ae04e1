pub mod link_extractor;
pub mod message_formatter;
pub mod text_normalizer;

pub use link_extractor::{LinkExtractor, LinkSpan};
pub use message_formatter::{MessageFormatter, presence_template};
pub use text_normalizer::TextNormalizer;

#[cfg(test)]
mod message_formatter_test;
