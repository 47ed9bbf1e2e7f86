//! Edit screen controller.
//!
//! Wires the settings model, the live preview, the pickers and the Start
//! action together. The screen has two states: `Editing` (initial) and
//! `Transitioning` (terminal, control has passed to playback). The only
//! transition is Start, gated on the text not being blank.
//!
//! The UI drives the controller with one call per user action, calls
//! [`EditController::render_step`] after each of them, and draws
//! [`EditController::preview_frame`].

use std::time::{Duration, Instant};

use serde::Serialize;
use tokio::sync::mpsc;

use crate::config::ScreenLayout;
use crate::measure::{MeasureText, REFERENCE_FONT_SIZE};
use crate::mirror::{PreferenceMirror, StoreFailure};
use crate::options::{FontChoice, PaletteColor, ScrollSpeed};
use crate::picker::FontMenu;
use crate::platform::{PlatformServices, SystemBarStyle};
use crate::preview::{DEFAULT_BASE_RATE, Marquee, PreviewFrame};
use crate::settings::Settings;
use crate::store::{PreferenceStream, Preferences};

/// Notice shown when Start is pressed without text.
pub const EMPTY_TEXT_NOTICE: &str = "Please enter text";

/// Hand-off to the playback screen. Carries the character count rather than
/// the text; playback reads the text from the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StartPayload {
    pub text_length: String,
    pub speed: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenState {
    Editing,
    Transitioning,
}

/// Result of pressing Start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// Hand-off invoked; the screen is now `Transitioning`.
    Started,
    /// Text was blank; the notice is showing.
    Rejected,
    /// Already transitioning.
    Ignored,
}

/// Transient notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub expires_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerOptions {
    pub layout: ScreenLayout,
    pub reference_font_size: f32,
    pub base_scroll_rate: f32,
    /// Initial viewport width until the window reports its size.
    pub viewport_width: f32,
    pub notification_duration: Duration,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            layout: ScreenLayout::Standard,
            reference_font_size: REFERENCE_FONT_SIZE,
            base_scroll_rate: DEFAULT_BASE_RATE,
            viewport_width: 420.0,
            notification_duration: Duration::from_secs(2),
        }
    }
}

/// Callback receiving the Start hand-off.
pub type StartHandler = Box<dyn FnMut(&StartPayload) + Send>;

pub struct EditController {
    settings: Settings,
    options: ControllerOptions,
    state: ScreenState,
    font_menu: FontMenu,
    toast: Option<Toast>,
    measured_width: f32,
    viewport_width: f32,
    viewport_changed: bool,
    marquee: Marquee,
    failures: mpsc::UnboundedReceiver<StoreFailure>,
    last_failure: Option<StoreFailure>,
    on_start: StartHandler,
}

impl std::fmt::Debug for EditController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditController")
            .field("settings", &self.settings)
            .field("state", &self.state)
            .field("measured_width", &self.measured_width)
            .field("viewport_width", &self.viewport_width)
            .finish()
    }
}

impl EditController {
    /// Create the controller. `failures` is the receiver paired with
    /// `mirror`; `on_start` is invoked once when Start succeeds.
    pub fn new(
        mirror: PreferenceMirror,
        failures: mpsc::UnboundedReceiver<StoreFailure>,
        options: ControllerOptions,
        on_start: StartHandler,
    ) -> Self {
        let settings = Settings::new(mirror);
        let marquee = Marquee::new(
            options.viewport_width,
            0.0,
            settings.scroll_speed(),
            options.base_scroll_rate,
            Instant::now(),
        );
        Self {
            settings,
            options,
            state: ScreenState::Editing,
            font_menu: FontMenu::default(),
            toast: None,
            measured_width: 0.0,
            viewport_width: options.viewport_width,
            viewport_changed: false,
            marquee,
            failures,
            last_failure: None,
            on_start,
        }
    }

    /// Screen entry: issue the platform calls and start observing the store.
    /// Every item of the returned stream goes to
    /// [`EditController::apply_preferences`].
    pub fn enter(&mut self, platform: &dyn PlatformServices) -> PreferenceStream {
        platform.lock_portrait();
        platform.set_status_bar(SystemBarStyle {
            transparent: true,
            dark_content: false,
        });
        platform.set_navigation_bar(SystemBarStyle {
            transparent: false,
            dark_content: false,
        });
        tracing::info!("Edit screen entered ({:?} layout)", self.options.layout);
        self.settings.mirror().store().observe()
    }

    /// Store emission: the latest snapshot always wins.
    pub fn apply_preferences(&mut self, prefs: &Preferences) {
        self.settings.apply_preferences(prefs);
    }

    pub fn edit_text(&mut self, text: impl Into<String>) {
        self.font_menu.dismiss();
        self.settings.set_scroll_text(text);
    }

    pub fn select_speed(&mut self, speed: ScrollSpeed) {
        self.font_menu.dismiss();
        self.settings.set_scroll_speed(speed);
    }

    pub fn select_text_color(&mut self, color: PaletteColor) {
        self.font_menu.dismiss();
        self.settings.set_text_color(color);
    }

    pub fn select_background_color(&mut self, color: PaletteColor) {
        self.font_menu.dismiss();
        self.settings.set_background_color(color);
    }

    pub fn select_font(&mut self, font: FontChoice) {
        let font = self.font_menu.select(font);
        self.settings.set_font(font);
    }

    pub fn toggle_font_menu(&mut self) {
        self.font_menu.toggle();
    }

    pub fn dismiss_font_menu(&mut self) {
        self.font_menu.dismiss();
    }

    pub fn set_viewport_width(&mut self, width: f32) {
        if width != self.viewport_width {
            self.viewport_width = width;
            self.viewport_changed = true;
        }
    }

    /// Consume pending changes: remeasure the text when text or font
    /// changed, restart the marquee when text, speed, font or viewport
    /// changed.
    pub fn render_step(&mut self, measurer: &mut dyn MeasureText, now: Instant) {
        let changes = self.settings.take_changes();
        let viewport_changed = std::mem::take(&mut self.viewport_changed);
        if !changes.any() && !viewport_changed {
            return;
        }

        if changes.needs_measure() {
            self.measured_width = measurer.measure(
                self.settings.scroll_text(),
                self.settings.font(),
                self.options.reference_font_size,
            );
            tracing::trace!("Measured text width {:.1}px", self.measured_width);
        }

        if changes.needs_restart() || viewport_changed {
            self.marquee = Marquee::new(
                self.viewport_width,
                self.measured_width,
                self.settings.scroll_speed(),
                self.options.base_scroll_rate,
                now,
            );
        }
    }

    /// What the preview shows at `now`.
    pub fn preview_frame(&self, now: Instant) -> PreviewFrame {
        PreviewFrame {
            text: self.settings.scroll_text().to_string(),
            offset: self.marquee.offset_at(now),
            text_color: self.settings.text_color(),
            background_color: self.settings.background_color(),
            font: self.settings.font(),
            font_size: self.options.reference_font_size,
            animated: !self.marquee.is_static(),
        }
    }

    /// Start action.
    pub fn start(&mut self, now: Instant) -> StartOutcome {
        self.font_menu.dismiss();
        if self.state == ScreenState::Transitioning {
            return StartOutcome::Ignored;
        }
        if self.settings.is_text_blank() {
            tracing::debug!("Start rejected: blank text");
            self.toast = Some(Toast {
                message: EMPTY_TEXT_NOTICE.to_string(),
                expires_at: now + self.options.notification_duration,
            });
            return StartOutcome::Rejected;
        }

        let payload = StartPayload {
            text_length: self.settings.scroll_text().chars().count().to_string(),
            speed: self.settings.scroll_speed().to_decimal_string(),
        };
        tracing::info!(
            "Starting playback (length {}, speed {})",
            payload.text_length,
            payload.speed
        );
        self.state = ScreenState::Transitioning;
        (self.on_start)(&payload);
        StartOutcome::Started
    }

    /// Periodic housekeeping: expire the toast and collect store failures.
    pub fn tick(&mut self, now: Instant) {
        if self.toast.as_ref().is_some_and(|t| now >= t.expires_at) {
            self.toast = None;
        }
        while let Ok(failure) = self.failures.try_recv() {
            tracing::error!("{failure}");
            self.last_failure = Some(failure);
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn state(&self) -> ScreenState {
        self.state
    }

    pub fn layout(&self) -> ScreenLayout {
        self.options.layout
    }

    pub fn font_menu(&self) -> FontMenu {
        self.font_menu
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    pub fn last_failure(&self) -> Option<&StoreFailure> {
        self.last_failure.as_ref()
    }

    pub fn measured_width(&self) -> f32 {
        self.measured_width
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    pub fn marquee(&self) -> &Marquee {
        &self.marquee
    }
}
