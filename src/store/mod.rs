//! Asynchronous key-value preference store.
//!
//! The store holds scalar values (string, 64-bit integer, float) under string
//! keys in a single namespace. Consumers observe full snapshots through a
//! watch channel (current value first, then one emission per change) and
//! update one key at a time with an atomic read-modify-write.
//!
//! Implementations:
//! - [`MemoryStore`]: in-process, used by tests and as a fallback
//! - [`FileStore`]: JSON file under the user's local data directory

mod file;
mod memory;

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

use crate::Result;

pub use file::FileStore;
pub use memory::MemoryStore;

/// The four persisted settings keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreferenceKey {
    ScrollerText,
    TextColor,
    BackgroundColor,
    Speed,
}

impl PreferenceKey {
    pub const ALL: [PreferenceKey; 4] = [
        PreferenceKey::ScrollerText,
        PreferenceKey::TextColor,
        PreferenceKey::BackgroundColor,
        PreferenceKey::Speed,
    ];

    /// Position in [`PreferenceKey::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Name of the key inside the store.
    pub const fn name(self) -> &'static str {
        match self {
            PreferenceKey::ScrollerText => "scroller text",
            PreferenceKey::TextColor => "used text color",
            PreferenceKey::BackgroundColor => "used background color",
            PreferenceKey::Speed => "used speed",
        }
    }
}

impl std::fmt::Display for PreferenceKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A stored scalar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreferenceValue {
    String(String),
    Long(i64),
    Float(f32),
}

/// Full snapshot of the store contents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Preferences {
    values: BTreeMap<String, PreferenceValue>,
}

impl Preferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&PreferenceValue> {
        self.values.get(key)
    }

    /// String value under `key`; `None` if absent or not a string.
    pub fn get_string(&self, key: &str) -> Option<&str> {
        match self.values.get(key)? {
            PreferenceValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Integer value under `key`; `None` if absent or not an integer.
    pub fn get_long(&self, key: &str) -> Option<i64> {
        match self.values.get(key)? {
            PreferenceValue::Long(v) => Some(*v),
            _ => None,
        }
    }

    /// Float value under `key`; `None` if absent or not a float.
    pub fn get_float(&self, key: &str) -> Option<f32> {
        match self.values.get(key)? {
            PreferenceValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn set(&mut self, key: impl Into<String>, value: PreferenceValue) {
        self.values.insert(key.into(), value);
    }

    /// Builder-style [`Preferences::set`].
    pub fn with(mut self, key: impl Into<String>, value: PreferenceValue) -> Self {
        self.set(key, value);
        self
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Stream of store snapshots, current value first.
pub type PreferenceStream = WatchStream<Preferences>;

/// Opaque asynchronous preference store.
///
/// Implementations serialize concurrent edits themselves; callers add no
/// locking of their own.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Receiver holding the current snapshot and notified on every change.
    fn subscribe(&self) -> watch::Receiver<Preferences>;

    /// Atomically replace the value of a single key.
    async fn edit(&self, key: &str, value: PreferenceValue) -> Result<()>;

    /// Stream of snapshots, current value first.
    fn observe(&self) -> PreferenceStream {
        WatchStream::new(self.subscribe())
    }

    /// Current snapshot without subscribing.
    fn snapshot(&self) -> Preferences {
        self.subscribe().borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_names_match_store_layout() {
        let names: Vec<_> = PreferenceKey::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(
            names,
            ["scroller text", "used text color", "used background color", "used speed"]
        );
    }

    #[test]
    fn typed_getters_ignore_mismatched_types() {
        let prefs = Preferences::new()
            .with("a", PreferenceValue::String("x".into()))
            .with("b", PreferenceValue::Long(7))
            .with("c", PreferenceValue::Float(1.5));

        assert_eq!(prefs.get_string("a"), Some("x"));
        assert_eq!(prefs.get_long("a"), None);
        assert_eq!(prefs.get_long("b"), Some(7));
        assert_eq!(prefs.get_float("b"), None);
        assert_eq!(prefs.get_float("c"), Some(1.5));
        assert_eq!(prefs.get_string("missing"), None);
    }

    #[test]
    fn serializes_as_tagged_map() {
        let prefs = Preferences::new()
            .with("used speed", PreferenceValue::Float(2.0))
            .with("scroller text", PreferenceValue::String("ABC".into()));
        let json = serde_json::to_string(&prefs).unwrap();
        assert_eq!(json, r#"{"scroller text":{"string":"ABC"},"used speed":{"float":2.0}}"#);

        let back: Preferences = serde_json::from_str(&json).unwrap();
        assert_eq!(back, prefs);
    }
}
