//! Localized string resolution port.

use crate::domain::entities::ResourceKey;
use crate::domain::errors::ResourceError;

/// Port for localized string lookup.
///
/// Serves both message templates (with positional arguments) and the
/// time stamp pattern (`resolve(ResourceKey::TimeStampPattern, &[])`).
pub trait StringResolver: Send + Sync {
    /// Resolves `key`, substituting `args` positionally.
    ///
    /// # Errors
    /// Returns `ResourceError` if the key has no string or the template
    /// references an argument that was not supplied.
    fn resolve(&self, key: ResourceKey, args: &[&str]) -> Result<String, ResourceError>;
}

#[cfg(test)]
#[allow(dead_code)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    /// Resolver returning `"<key>(<args>)"` unless overridden, recording every call.
    #[derive(Default)]
    pub struct MockStringResolver {
        pub calls: Arc<Mutex<Vec<(ResourceKey, Vec<String>)>>>,
        overrides: HashMap<ResourceKey, String>,
    }

    impl MockStringResolver {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with(mut self, key: ResourceKey, value: impl Into<String>) -> Self {
            self.overrides.insert(key, value.into());
            self
        }

        pub fn calls(&self) -> Vec<(ResourceKey, Vec<String>)> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl StringResolver for MockStringResolver {
        fn resolve(&self, key: ResourceKey, args: &[&str]) -> Result<String, ResourceError> {
            self.calls
                .lock()
                .unwrap()
                .push((key, args.iter().map(ToString::to_string).collect()));

            if let Some(value) = self.overrides.get(&key) {
                return Ok(value.clone());
            }
            Ok(format!("{}({})", key.as_str(), args.join(",")))
        }
    }

    /// Resolver that knows no keys.
    pub struct FailingStringResolver;

    impl StringResolver for FailingStringResolver {
        fn resolve(&self, key: ResourceKey, _args: &[&str]) -> Result<String, ResourceError> {
            Err(ResourceError::missing(key))
        }
    }
}
