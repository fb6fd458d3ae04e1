//! Message body cleanup before composition.

use regex::Regex;
use std::sync::LazyLock;

/// Cleans raw message bodies into plain text the styled-text model can hold.
pub struct TextNormalizer;

impl TextNormalizer {
    /// Collapses `\r\n` and lone `\r` to `\n`, then strips `<...>` tags.
    ///
    /// Tags may span lines. Tag contents are dropped, not interpreted.
    #[must_use]
    pub fn normalize(body: &str) -> String {
        static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<.*?>").unwrap());

        let unified;
        let body = if body.contains('\r') {
            // \r\n first so the pair is not counted as two line breaks
            unified = body.replace("\r\n", "\n").replace('\r', "\n");
            unified.as_str()
        } else {
            body
        };

        TAG_RE.replace_all(body, "").into_owned()
    }
}
