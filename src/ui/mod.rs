//! Iced front end for the edit screen.
//!
//! This module is split into several submodules:
//! - `app`: EditorApp struct and initialization
//! - `update`: EditorApp::update() and message handling
//! - `view`: EditorApp::view(), layouts and subscription
//! - `pickers`: color, speed and font picker widgets
//! - `marquee`: canvas program drawing the live preview
//! - `styles`: UI styling functions and color palette

mod app;
mod marquee;
mod pickers;
mod styles;
mod update;
mod view;

use std::cell::RefCell;
use std::time::Instant;

use iced::Size;
use tokio::sync::mpsc;

use crate::config::AppConfig;
use crate::mirror::{PreferenceMirror, StoreFailure};
use crate::options::{FontChoice, PaletteColor, ScrollSpeed};
use crate::store::Preferences;

pub use app::EditorApp;
pub use styles::palette;

/// Application messages.
#[derive(Debug, Clone)]
pub enum Message {
    /// New snapshot from the preference store.
    PreferencesChanged(Preferences),
    /// Preference stream ended (store dropped).
    PreferencesClosed,
    TextEdited(String),
    SpeedSelected(ScrollSpeed),
    TextColorSelected(PaletteColor),
    BackgroundColorSelected(PaletteColor),
    /// Tap on the font dropdown field.
    FontMenuToggled,
    /// Tap outside the open font menu.
    FontMenuDismissed,
    FontSelected(FontChoice),
    StartPressed,
    /// Animation frame.
    Tick(Instant),
    ViewportResized(Size),
}

/// Everything the editor needs at boot.
pub struct Launch {
    pub mirror: PreferenceMirror,
    pub failures: mpsc::UnboundedReceiver<StoreFailure>,
    pub config: AppConfig,
}

// Thread-local storage for init params
thread_local! {
    static INIT_LAUNCH: RefCell<Option<Launch>> = const { RefCell::new(None) };
}

/// Run the edit screen until the window closes or Start hands off.
pub fn run_editor(launch: Launch) -> Result<(), Box<dyn std::error::Error>> {
    let window_size = Size::new(launch.config.window_width, launch.config.window_height);

    // Store in thread-local for the boot function
    INIT_LAUNCH.with(|cell| *cell.borrow_mut() = Some(launch));

    iced::application(EditorApp::boot, EditorApp::update, EditorApp::view)
        .title(EditorApp::title)
        .subscription(EditorApp::subscription)
        .window_size(window_size)
        .run()?;

    Ok(())
}
