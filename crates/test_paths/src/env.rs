//! Environment variable lookup

use std::collections::HashMap;

/// Source of environment variables
///
/// Lets build detection run against the process environment or a fixed map.
pub trait EnvSource {
    /// Raw value of `key`, if present
    fn var(&self, key: &str) -> Option<String>;

    /// Value of `key` when present and non-empty
    fn non_empty(&self, key: &str) -> Option<String> {
        self.var(key).filter(|value| !value.is_empty())
    }
}

/// The environment of the current process
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl EnvSource for HashMap<&str, &str> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).map(ToString::to_string)
    }
}
