//! LED Scroller edit screen.
//!
//! Usage:
//!   led-scroller                          # Edit with the saved preferences
//!   led-scroller --layout compact         # Compact arrangement
//!   led-scroller --memory                 # Session-only preferences
//!
//! Pressing Start prints the playback hand-off as one JSON line and exits.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use led_scroller::config::{AppConfig, ScreenLayout};
use led_scroller::mirror::PreferenceMirror;
use led_scroller::store::{FileStore, MemoryStore, PreferenceStore};
use led_scroller::ui::{Launch, run_editor};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "led-scroller")]
#[command(about = "LED marquee text editor with live preview")]
struct Cli {
    /// Config file (defaults to the platform data directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Preference file, overrides the config
    #[arg(long)]
    store: Option<PathBuf>,

    /// Screen arrangement, overrides the config
    #[arg(long, value_enum)]
    layout: Option<ScreenLayout>,

    /// Keep preferences in memory only
    #[arg(long)]
    memory: bool,

    /// Write the effective config back to disk before starting
    #[arg(long)]
    save_config: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli);
    if cli.save_config {
        config.save()?;
        tracing::info!("Saved config to {}", config.path().display());
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()?;

    let store = open_store(&config, cli.memory);
    let (mirror, failures) =
        PreferenceMirror::new(store, runtime.handle().clone(), config.retry_policy());

    run_editor(Launch {
        mirror: mirror.clone(),
        failures,
        config,
    })?;

    // Let in-flight writes land before the runtime shuts down
    runtime.block_on(mirror.flush());
    Ok(())
}

fn load_config(cli: &Cli) -> AppConfig {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    };
    if let Some(store) = &cli.store {
        config.store_path = Some(store.clone());
    }
    if let Some(layout) = cli.layout {
        config.layout = layout;
    }
    config
}

/// File-backed store, or an in-memory one when asked for or when the file
/// cannot be opened.
fn open_store(config: &AppConfig, memory: bool) -> Arc<dyn PreferenceStore> {
    if memory {
        tracing::info!("Using in-memory preferences");
        return Arc::new(MemoryStore::new());
    }
    let path = config.store_path();
    match FileStore::open(&path) {
        Ok(store) => {
            tracing::info!("Preferences: {}", path.display());
            Arc::new(store)
        }
        Err(e) => {
            tracing::error!(
                "Cannot open preferences at {}: {}; continuing without persistence",
                path.display(),
                e
            );
            Arc::new(MemoryStore::new())
        }
    }
}
