//! Durable preference store backed by a JSON file.
//!
//! Stored at `~/.local/share/led-scroller/preferences.json` by default. The
//! file is read once when the store is opened; every edit rewrites it through
//! a temporary file and a rename so a crash never leaves a half-written file.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::{Mutex, watch};

use super::{PreferenceStore, PreferenceValue, Preferences};
use crate::Result;

/// Preference store persisted as a JSON object of tagged scalars.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    state: watch::Sender<Preferences>,
    /// Serializes read-modify-write cycles so file and snapshot agree.
    write_lock: Mutex<()>,
}

impl FileStore {
    /// Default preference file path.
    pub fn default_path() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("led-scroller")
            .join("preferences.json")
    }

    /// Open the store at `path`. A missing file is an empty store; an
    /// unreadable or malformed file is an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let prefs = match std::fs::read_to_string(&path) {
            Ok(contents) => {
                let contents = contents.strip_prefix('\u{feff}').unwrap_or(&contents);
                serde_json::from_str(contents)?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Preferences::default(),
            Err(e) => return Err(e.into()),
        };
        tracing::debug!(
            "Opened preference store {} ({} keys)",
            path.display(),
            prefs.len()
        );

        let (state, _) = watch::channel(prefs);
        Ok(Self {
            path,
            state,
            write_lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, prefs: &Preferences) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let json = serde_json::to_string_pretty(prefs)?;
        let tmp = self.path.with_extension("json.tmp");
        let written = match tokio::fs::write(&tmp, json).await {
            Ok(()) => tokio::fs::rename(&tmp, &self.path).await,
            Err(e) => Err(e),
        };
        if let Err(e) = written {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(e.into());
        }
        Ok(())
    }
}

#[async_trait]
impl PreferenceStore for FileStore {
    fn subscribe(&self) -> watch::Receiver<Preferences> {
        self.state.subscribe()
    }

    async fn edit(&self, key: &str, value: PreferenceValue) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut next = self.state.borrow().clone();
        next.set(key, value);
        self.persist(&next).await?;
        self.state.send_replace(next);
        tracing::trace!("Persisted '{}' to {}", key, self.path.display());
        Ok(())
    }
}
