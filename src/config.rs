//! Application configuration.
//!
//! Stored as JSON at `~/.local/share/led-scroller/config.json`. Loaded once
//! on startup with every field falling back to its default; command-line
//! flags override individual fields afterwards.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::controller::ControllerOptions;
use crate::measure::REFERENCE_FONT_SIZE;
use crate::mirror::RetryPolicy;
use crate::preview::DEFAULT_BASE_RATE;
use crate::store::FileStore;

/// Default config file path.
fn default_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("led-scroller")
        .join("config.json")
}

/// Arrangement of the edit screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ScreenLayout {
    /// Every section full width, stacked top to bottom.
    #[default]
    Standard,
    /// Shorter preview, speed and font pickers side by side.
    Compact,
}

/// Persisted application settings (not the marquee settings, which live in
/// the preference store).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub layout: ScreenLayout,
    /// Preference file; the platform data directory when unset.
    #[serde(default)]
    pub store_path: Option<PathBuf>,
    #[serde(default = "default_write_attempts")]
    pub write_attempts: u32,
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
    /// Scroll rate in pixels per second at the base speed.
    #[serde(default = "default_base_scroll_rate")]
    pub base_scroll_rate: f32,
    #[serde(default = "default_reference_font_size")]
    pub reference_font_size: f32,
    #[serde(default = "default_preview_height")]
    pub preview_height: f32,
    #[serde(default = "default_window_width")]
    pub window_width: f32,
    #[serde(default = "default_window_height")]
    pub window_height: f32,
    /// Extra font files used when measuring text.
    #[serde(default)]
    pub fonts_dir: Option<PathBuf>,
    #[serde(default = "default_notification_ms")]
    pub notification_ms: u64,
    /// Path the config was loaded from (not serialized).
    #[serde(skip)]
    path: PathBuf,
}

fn default_write_attempts() -> u32 { 3 }
fn default_retry_delay_ms() -> u64 { 50 }
fn default_base_scroll_rate() -> f32 { DEFAULT_BASE_RATE }
fn default_reference_font_size() -> f32 { REFERENCE_FONT_SIZE }
fn default_preview_height() -> f32 { 200.0 }
fn default_window_width() -> f32 { 420.0 }
fn default_window_height() -> f32 { 860.0 }
fn default_notification_ms() -> u64 { 2000 }

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            layout: ScreenLayout::default(),
            store_path: None,
            write_attempts: default_write_attempts(),
            retry_delay_ms: default_retry_delay_ms(),
            base_scroll_rate: default_base_scroll_rate(),
            reference_font_size: default_reference_font_size(),
            preview_height: default_preview_height(),
            window_width: default_window_width(),
            window_height: default_window_height(),
            fonts_dir: None,
            notification_ms: default_notification_ms(),
            path: default_path(),
        }
    }
}

impl AppConfig {
    /// Load from the default location, falling back to defaults on any error.
    pub fn load() -> Self {
        Self::load_from(default_path())
    }

    /// Load from `path`, falling back to defaults on any error.
    pub fn load_from(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut config = match std::fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!("Ignoring malformed config {}: {}", path.display(), e);
                Self::default()
            }),
            Err(_) => Self::default(),
        };
        config.path = path;
        config
    }

    /// Persist current config to disk.
    pub fn save(&self) -> crate::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Preference file to open.
    pub fn store_path(&self) -> PathBuf {
        self.store_path.clone().unwrap_or_else(FileStore::default_path)
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            attempts: self.write_attempts,
            delay: Duration::from_millis(self.retry_delay_ms),
        }
    }

    pub fn controller_options(&self) -> ControllerOptions {
        ControllerOptions {
            layout: self.layout,
            reference_font_size: self.reference_font_size,
            base_scroll_rate: self.base_scroll_rate,
            viewport_width: self.window_width,
            notification_duration: Duration::from_millis(self.notification_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = AppConfig::load_from(dir.path().join("config.json"));
        assert_eq!(config.layout, ScreenLayout::Standard);
        assert_eq!(config.write_attempts, 3);
        assert_eq!(config.reference_font_size, 50.0);
        assert_eq!(config.path(), dir.path().join("config.json"));
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "layout": "compact", "write_attempts": 5 }"#).unwrap();

        let config = AppConfig::load_from(&path);
        assert_eq!(config.layout, ScreenLayout::Compact);
        assert_eq!(config.write_attempts, 5);
        assert_eq!(config.preview_height, 200.0);
        assert_eq!(config.retry_policy().delay, Duration::from_millis(50));
    }

    #[test]
    fn malformed_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert_eq!(AppConfig::load_from(&path).layout, ScreenLayout::Standard);
    }

    #[test]
    fn save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let mut config = AppConfig::load_from(&path);
        config.layout = ScreenLayout::Compact;
        config.store_path = Some(dir.path().join("prefs.json"));
        config.save().unwrap();

        let loaded = AppConfig::load_from(&path);
        assert_eq!(loaded.layout, ScreenLayout::Compact);
        assert_eq!(loaded.store_path(), dir.path().join("prefs.json"));
    }
}
