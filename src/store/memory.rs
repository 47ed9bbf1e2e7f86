//! In-process preference store.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::watch;

use super::{PreferenceStore, PreferenceValue, Preferences};
use crate::{Error, Result};

/// Preference store kept entirely in memory.
///
/// Edits are applied with `send_modify`, which holds the channel lock for the
/// whole read-modify-write. Writes can be made to fail on demand to exercise
/// error paths.
#[derive(Debug)]
pub struct MemoryStore {
    state: watch::Sender<Preferences>,
    failing_writes: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_preferences(Preferences::default())
    }

    /// Create a store pre-populated with `prefs`.
    pub fn with_preferences(prefs: Preferences) -> Self {
        let (state, _) = watch::channel(prefs);
        Self {
            state,
            failing_writes: AtomicUsize::new(0),
        }
    }

    /// Reject the next `count` edits with [`Error::Store`].
    pub fn fail_next_writes(&self, count: usize) {
        self.failing_writes.store(count, Ordering::SeqCst);
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PreferenceStore for MemoryStore {
    fn subscribe(&self) -> watch::Receiver<Preferences> {
        self.state.subscribe()
    }

    async fn edit(&self, key: &str, value: PreferenceValue) -> Result<()> {
        let rejected = self
            .failing_writes
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if rejected {
            return Err(Error::Store(format!("write to '{key}' rejected")));
        }
        self.state.send_modify(|prefs| prefs.set(key, value));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_updates_snapshot() {
        let store = MemoryStore::new();
        pollster::block_on(store.edit("used speed", PreferenceValue::Float(3.0))).unwrap();
        assert_eq!(store.snapshot().get_float("used speed"), Some(3.0));
    }

    #[test]
    fn edit_replaces_only_one_key() {
        let store = MemoryStore::with_preferences(
            Preferences::new()
                .with("scroller text", PreferenceValue::String("keep".into()))
                .with("used speed", PreferenceValue::Float(1.0)),
        );
        pollster::block_on(store.edit("used speed", PreferenceValue::Float(4.0))).unwrap();

        let prefs = store.snapshot();
        assert_eq!(prefs.get_string("scroller text"), Some("keep"));
        assert_eq!(prefs.get_float("used speed"), Some(4.0));
    }

    #[test]
    fn subscribers_see_every_change() {
        let store = MemoryStore::new();
        let mut rx = store.subscribe();
        assert!(!rx.has_changed().unwrap());

        pollster::block_on(store.edit("scroller text", PreferenceValue::String("A".into())))
            .unwrap();
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().get_string("scroller text"), Some("A"));
    }

    #[test]
    fn injected_failures_leave_state_untouched() {
        let store = MemoryStore::new();
        store.fail_next_writes(1);

        let err = pollster::block_on(store.edit("used speed", PreferenceValue::Float(2.0)));
        assert!(matches!(err, Err(Error::Store(_))));
        assert!(store.snapshot().is_empty());

        pollster::block_on(store.edit("used speed", PreferenceValue::Float(2.0))).unwrap();
        assert_eq!(store.snapshot().get_float("used speed"), Some(2.0));
    }
}
