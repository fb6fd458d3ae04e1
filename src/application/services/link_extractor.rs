//! Hyperlink detection in rendered message text.

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

/// Hyperlink detected in rendered text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkSpan {
    /// Byte span of the link in the text.
    pub range: Range<usize>,
    /// Openable URL; `www.` links get an `http://` scheme.
    pub url: String,
}

/// Finds hyperlinks in plain text.
pub struct LinkExtractor;

impl LinkExtractor {
    /// Finds `http(s)://` and `www.` links, first occurrence of each URL only.
    #[must_use]
    pub fn extract_links(text: &str) -> Vec<LinkSpan> {
        static LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r#"(?i)\b(?:https?://|www\.)[^\s<>"]+"#).unwrap()
        });

        if !text.contains("://") && !text.to_ascii_lowercase().contains("www.") {
            return Vec::new();
        }

        let mut links: Vec<LinkSpan> = Vec::new();

        for m in LINK_RE.find_iter(text) {
            let trimmed = m.as_str().trim_end_matches(['.', ',', ';', ':', '!', '?', ')', ']', '\'']);
            let scheme_len = trimmed.find("://").map_or(4, |i| i + 3);
            if trimmed.len() <= scheme_len {
                continue;
            }

            let url = if trimmed.contains("://") {
                trimmed.to_owned()
            } else {
                format!("http://{trimmed}")
            };

            if links.iter().any(|l| l.url == url) {
                continue;
            }

            links.push(LinkSpan {
                range: m.start()..m.start() + trimmed.len(),
                url,
            });
        }

        links
    }
}
