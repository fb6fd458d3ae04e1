//! String table backed by built-in English defaults and config overrides.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::domain::entities::ResourceKey;
use crate::domain::errors::ResourceError;
use crate::domain::ports::StringResolver;

const DEFAULT_STRINGS: [(ResourceKey, &str); 9] = [
    (ResourceKey::ContactJoined, "{0} joined"),
    (ResourceKey::ContactOnline, "{0} is online"),
    (ResourceKey::ContactAway, "{0} is away"),
    (ResourceKey::ContactBusy, "{0} is busy"),
    (ResourceKey::ContactLeft, "{0} left"),
    (ResourceKey::ContactOffline, "{0} is offline"),
    (ResourceKey::MsgSentFailed, "Message could not be sent"),
    (ResourceKey::Me, "Me"),
    (ResourceKey::TimeStampPattern, "%H:%M"),
];

/// In-memory string table with `{N}` positional placeholders.
#[derive(Debug, Clone)]
pub struct StringTable {
    entries: HashMap<ResourceKey, String>,
}

impl Default for StringTable {
    fn default() -> Self {
        Self {
            entries: DEFAULT_STRINGS
                .iter()
                .map(|(key, value)| (*key, (*value).to_string()))
                .collect(),
        }
    }
}

impl StringTable {
    #[cfg(test)]
    fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Applies overrides keyed by string name; unknown names are skipped.
    #[must_use]
    pub fn with_overrides<'a, I>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        for (name, value) in overrides {
            match ResourceKey::from_name(name) {
                Some(key) => {
                    debug!(key = %key, "string override");
                    self.entries.insert(key, value.clone());
                }
                None => warn!(name = %name, "ignoring unknown string override"),
            }
        }
        self
    }

    /// Sets a single entry.
    #[must_use]
    pub fn with(mut self, key: ResourceKey, value: impl Into<String>) -> Self {
        self.entries.insert(key, value.into());
        self
    }
}

impl StringResolver for StringTable {
    fn resolve(&self, key: ResourceKey, args: &[&str]) -> Result<String, ResourceError> {
        let template = self
            .entries
            .get(&key)
            .ok_or(ResourceError::missing(key))?;
        substitute(key, template, args)
    }
}

/// Replaces `{N}` with `args[N]`. `{{` and `}}` are literal braces.
fn substitute(key: ResourceKey, template: &str, args: &[&str]) -> Result<String, ResourceError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find(['{', '}']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if tail.starts_with("{{") || tail.starts_with("}}") {
            out.push_str(&tail[..1]);
            rest = &tail[2..];
            continue;
        }

        let placeholder = tail
            .strip_prefix('{')
            .and_then(|t| t.split_once('}'))
            .and_then(|(index, after)| index.parse::<usize>().ok().map(|i| (i, after)));

        match placeholder {
            Some((index, after)) => {
                let arg = args.get(index).ok_or(ResourceError::ArgumentCount {
                    key,
                    index,
                    supplied: args.len(),
                })?;
                out.push_str(arg);
                rest = after;
            }
            None => {
                out.push_str(&tail[..1]);
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_defaults_cover_every_key() {
        let table = StringTable::default();
        for key in ResourceKey::ALL {
            assert!(table.resolve(key, &["x"]).is_ok(), "missing {key}");
        }
    }

    #[test_case(ResourceKey::ContactJoined, "Alice joined")]
    #[test_case(ResourceKey::ContactOnline, "Alice is online")]
    #[test_case(ResourceKey::ContactAway, "Alice is away")]
    #[test_case(ResourceKey::ContactBusy, "Alice is busy")]
    #[test_case(ResourceKey::ContactLeft, "Alice left")]
    #[test_case(ResourceKey::ContactOffline, "Alice is offline")]
    fn test_presence_defaults(key: ResourceKey, expected: &str) {
        assert_eq!(StringTable::default().resolve(key, &["Alice"]).unwrap(), expected);
    }

    #[test]
    fn test_overrides_replace_defaults() {
        let overrides: std::collections::BTreeMap<String, String> = [
            ("contact_online".to_string(), "{0} ist online".to_string()),
            ("bogus".to_string(), "ignored".to_string()),
        ]
        .into_iter()
        .collect();

        let table = StringTable::default().with_overrides(&overrides);
        assert_eq!(
            table.resolve(ResourceKey::ContactOnline, &["Ann"]).unwrap(),
            "Ann ist online"
        );
        assert_eq!(table.resolve(ResourceKey::Me, &[]).unwrap(), "Me");
    }

    #[test]
    fn test_missing_key() {
        assert_eq!(
            StringTable::empty().resolve(ResourceKey::Me, &[]).unwrap_err(),
            ResourceError::missing(ResourceKey::Me)
        );
    }

    #[test_case("{1} and {0}", &["a", "b"], "b and a" ; "reordered")]
    #[test_case("{{0}} is {0}", &["x"], "{0} is x" ; "escaped braces")]
    #[test_case("{name} stays", &["x"], "{name} stays" ; "non numeric")]
    #[test_case("open { brace", &[], "open { brace" ; "lone brace")]
    #[test_case("%H:%M", &[], "%H:%M" ; "no placeholders")]
    fn test_substitute(template: &str, args: &[&str], expected: &str) {
        assert_eq!(substitute(ResourceKey::Me, template, args).unwrap(), expected);
    }

    #[test]
    fn test_substitute_missing_argument() {
        let err = substitute(ResourceKey::ContactAway, "{0} is {1}", &["Ann"]).unwrap_err();
        assert_eq!(
            err,
            ResourceError::ArgumentCount {
                key: ResourceKey::ContactAway,
                index: 1,
                supplied: 1,
            }
        );
    }
}
