//! Write-through of settings changes to the preference store.
//!
//! Every user edit becomes one single-key write spawned on a background
//! runtime. The caller never waits: local state is updated first and the
//! write is fire-and-forget. Failed writes are retried a bounded number of
//! times, then logged and reported over a channel so the edit screen can
//! surface them.
//!
//! Writes to the same key are ordered: each write bumps the key's
//! generation, and an attempt whose generation is no longer current is
//! dropped instead of overwriting the newer value.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::store::{PreferenceKey, PreferenceStore, PreferenceValue};

/// How often and how patiently a failed write is retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts including the first one.
    pub attempts: u32,
    /// Pause between attempts.
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 3,
            delay: Duration::from_millis(50),
        }
    }
}

/// A write that still failed after all retries.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreFailure {
    pub key: PreferenceKey,
    pub error: String,
    pub attempts: u32,
}

impl std::fmt::Display for StoreFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Saving '{}' failed after {} attempt(s): {}",
            self.key, self.attempts, self.error
        )
    }
}

/// Write ordering state of one key.
#[derive(Debug, Default)]
struct KeySlot {
    /// Bumped by every scheduled write.
    generation: AtomicU64,
    /// Held while an attempt checks its generation and hits the store.
    lock: tokio::sync::Mutex<()>,
}

/// Spawns single-key writes against a shared store.
#[derive(Clone)]
pub struct PreferenceMirror {
    store: Arc<dyn PreferenceStore>,
    runtime: Handle,
    retry: RetryPolicy,
    failures: mpsc::UnboundedSender<StoreFailure>,
    slots: Arc<[KeySlot; PreferenceKey::ALL.len()]>,
    /// Writes that may still be running, pruned on every new write.
    pending: Arc<Mutex<Vec<JoinHandle<()>>>>,
}

impl std::fmt::Debug for PreferenceMirror {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreferenceMirror")
            .field("retry", &self.retry)
            .field("pending", &self.pending_writes())
            .finish()
    }
}

impl PreferenceMirror {
    /// Create a mirror writing to `store` on `runtime`. The receiver yields
    /// every write that failed for good.
    pub fn new(
        store: Arc<dyn PreferenceStore>,
        runtime: Handle,
        retry: RetryPolicy,
    ) -> (Self, mpsc::UnboundedReceiver<StoreFailure>) {
        let (failures, rx) = mpsc::unbounded_channel();
        let mirror = Self {
            store,
            runtime,
            retry,
            failures,
            slots: Arc::default(),
            pending: Arc::new(Mutex::new(Vec::new())),
        };
        (mirror, rx)
    }

    pub fn store(&self) -> &Arc<dyn PreferenceStore> {
        &self.store
    }

    /// Schedule a write of `value` under `key` and return immediately.
    pub fn write(&self, key: PreferenceKey, value: PreferenceValue) {
        let store = Arc::clone(&self.store);
        let retry = self.retry;
        let failures = self.failures.clone();
        let slots = Arc::clone(&self.slots);
        let generation = slots[key.index()].generation.fetch_add(1, Ordering::SeqCst) + 1;

        let handle = self.runtime.spawn(async move {
            let slot = &slots[key.index()];
            if let Err(failure) =
                write_latest(store.as_ref(), slot, generation, key, value, retry).await
            {
                tracing::warn!("{failure}");
                // The controller may already be gone at shutdown.
                let _ = failures.send(failure);
            }
        });

        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        pending.retain(|h| !h.is_finished());
        pending.push(handle);
    }

    /// Number of writes that have not finished yet.
    pub fn pending_writes(&self) -> usize {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|h| !h.is_finished())
            .count()
    }

    /// Wait for every write scheduled so far.
    pub async fn flush(&self) {
        let handles: Vec<_> = {
            let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
            pending.drain(..).collect()
        };
        for handle in handles {
            if let Err(e) = handle.await {
                tracing::warn!("Preference write task did not complete: {e}");
            }
        }
    }
}

/// Write one key, retrying per `retry`, until it lands, fails for good, or
/// a newer write to the same key supersedes it.
async fn write_latest(
    store: &dyn PreferenceStore,
    slot: &KeySlot,
    generation: u64,
    key: PreferenceKey,
    value: PreferenceValue,
    retry: RetryPolicy,
) -> Result<(), StoreFailure> {
    let attempts = retry.attempts.max(1);
    let mut attempt = 0;
    loop {
        attempt += 1;
        let result = {
            let _guard = slot.lock.lock().await;
            if slot.generation.load(Ordering::SeqCst) != generation {
                tracing::debug!("Dropping superseded write of '{}' = {:?}", key, value);
                return Ok(());
            }
            store.edit(key.name(), value.clone()).await
        };
        match result {
            Ok(()) => {
                tracing::debug!("Saved '{}' = {:?}", key, value);
                return Ok(());
            }
            Err(e) if attempt < attempts => {
                tracing::debug!("Saving '{}' failed (attempt {}): {}", key, attempt, e);
                tokio::time::sleep(retry.delay).await;
            }
            Err(e) => {
                return Err(StoreFailure {
                    key,
                    error: e.to_string(),
                    attempts: attempt,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn quick_retry(attempts: u32) -> RetryPolicy {
        RetryPolicy {
            attempts,
            delay: Duration::from_millis(1),
        }
    }

    #[tokio::test]
    async fn write_lands_in_store() {
        let store = Arc::new(MemoryStore::new());
        let (mirror, _failures) =
            PreferenceMirror::new(store.clone(), Handle::current(), quick_retry(1));

        mirror.write(PreferenceKey::Speed, PreferenceValue::Float(3.0));
        mirror.flush().await;

        assert_eq!(store.snapshot().get_float("used speed"), Some(3.0));
        assert_eq!(mirror.pending_writes(), 0);
    }

    #[tokio::test]
    async fn transient_failure_is_retried() {
        let store = Arc::new(MemoryStore::new());
        store.fail_next_writes(2);
        let (mirror, mut failures) =
            PreferenceMirror::new(store.clone(), Handle::current(), quick_retry(3));

        mirror.write(PreferenceKey::ScrollerText, PreferenceValue::String("HI".into()));
        mirror.flush().await;

        assert_eq!(store.snapshot().get_string("scroller text"), Some("HI"));
        assert!(failures.try_recv().is_err());
    }

    #[tokio::test]
    async fn persistent_failure_is_reported_once() {
        let store = Arc::new(MemoryStore::new());
        store.fail_next_writes(10);
        let (mirror, mut failures) =
            PreferenceMirror::new(store.clone(), Handle::current(), quick_retry(2));

        mirror.write(PreferenceKey::TextColor, PreferenceValue::Long(0xFF00_0000));
        mirror.flush().await;

        let failure = failures.try_recv().unwrap();
        assert_eq!(failure.key, PreferenceKey::TextColor);
        assert_eq!(failure.attempts, 2);
        assert!(failures.try_recv().is_err());
        assert!(store.snapshot().is_empty());
    }

    #[tokio::test]
    async fn zero_attempts_still_tries_once() {
        let store = Arc::new(MemoryStore::new());
        let (mirror, mut failures) =
            PreferenceMirror::new(store.clone(), Handle::current(), quick_retry(0));

        mirror.write(PreferenceKey::Speed, PreferenceValue::Float(2.0));
        mirror.flush().await;

        assert_eq!(store.snapshot().get_float("used speed"), Some(2.0));
        assert!(failures.try_recv().is_err());
    }

    #[tokio::test]
    async fn retry_never_overwrites_newer_write() {
        let store = Arc::new(MemoryStore::new());
        store.fail_next_writes(1);
        let (mirror, mut failures) =
            PreferenceMirror::new(store.clone(), Handle::current(), quick_retry(3));

        mirror.write(PreferenceKey::Speed, PreferenceValue::Float(2.0));
        // First attempt fails and the task backs off.
        tokio::task::yield_now().await;
        mirror.write(PreferenceKey::Speed, PreferenceValue::Float(3.0));
        mirror.flush().await;

        assert_eq!(store.snapshot().get_float("used speed"), Some(3.0));
        assert!(failures.try_recv().is_err());
    }

    #[tokio::test]
    async fn other_keys_are_not_superseded() {
        let store = Arc::new(MemoryStore::new());
        let (mirror, _failures) =
            PreferenceMirror::new(store.clone(), Handle::current(), quick_retry(1));

        mirror.write(PreferenceKey::TextColor, PreferenceValue::Long(1));
        mirror.write(PreferenceKey::BackgroundColor, PreferenceValue::Long(2));
        mirror.flush().await;

        assert_eq!(store.snapshot().get_long("used text color"), Some(1));
        assert_eq!(store.snapshot().get_long("used background color"), Some(2));
    }
}
