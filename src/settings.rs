//! In-memory settings edited on the edit screen.
//!
//! Four fields are persisted (text, text color, background color, speed);
//! the font is kept for the session only. Setters update the field, record
//! what changed for the next render step, and hand a single-key write to the
//! [`PreferenceMirror`]. Store snapshots are applied with
//! [`Settings::apply_preferences`], which never writes back.

use crate::mirror::PreferenceMirror;
use crate::options::{FontChoice, PaletteColor, ScrollSpeed};
use crate::store::{PreferenceKey, PreferenceValue, Preferences};

pub const DEFAULT_TEXT_COLOR: PaletteColor = PaletteColor::White;
pub const DEFAULT_BACKGROUND_COLOR: PaletteColor = PaletteColor::Black;

/// Fields changed since the last render step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SettingsChanges {
    pub text: bool,
    pub text_color: bool,
    pub background_color: bool,
    pub speed: bool,
    pub font: bool,
}

impl SettingsChanges {
    pub const ALL: SettingsChanges = SettingsChanges {
        text: true,
        text_color: true,
        background_color: true,
        speed: true,
        font: true,
    };

    pub fn any(self) -> bool {
        self.text || self.text_color || self.background_color || self.speed || self.font
    }

    /// Whether the measured text width is stale.
    pub fn needs_measure(self) -> bool {
        self.text || self.font
    }

    /// Whether the marquee must start over from the right edge.
    pub fn needs_restart(self) -> bool {
        self.text || self.speed || self.font
    }
}

/// The edit screen's settings.
#[derive(Debug)]
pub struct Settings {
    scroll_text: String,
    text_color: PaletteColor,
    background_color: PaletteColor,
    scroll_speed: ScrollSpeed,
    font: FontChoice,
    changes: SettingsChanges,
    mirror: PreferenceMirror,
}

impl Settings {
    /// Default settings. Everything starts dirty so the first render step
    /// measures and starts the marquee.
    pub fn new(mirror: PreferenceMirror) -> Self {
        Self {
            scroll_text: String::new(),
            text_color: DEFAULT_TEXT_COLOR,
            background_color: DEFAULT_BACKGROUND_COLOR,
            scroll_speed: ScrollSpeed::default(),
            font: FontChoice::default(),
            changes: SettingsChanges::ALL,
            mirror,
        }
    }

    pub fn scroll_text(&self) -> &str {
        &self.scroll_text
    }

    pub fn text_color(&self) -> PaletteColor {
        self.text_color
    }

    pub fn background_color(&self) -> PaletteColor {
        self.background_color
    }

    pub fn scroll_speed(&self) -> ScrollSpeed {
        self.scroll_speed
    }

    pub fn font(&self) -> FontChoice {
        self.font
    }

    /// True when the text is empty or only whitespace.
    pub fn is_text_blank(&self) -> bool {
        self.scroll_text.trim().is_empty()
    }

    pub fn set_scroll_text(&mut self, text: impl Into<String>) {
        self.scroll_text = text.into();
        self.changes.text = true;
        self.mirror.write(
            PreferenceKey::ScrollerText,
            PreferenceValue::String(self.scroll_text.clone()),
        );
    }

    pub fn set_text_color(&mut self, color: PaletteColor) {
        self.text_color = color;
        self.changes.text_color = true;
        self.mirror
            .write(PreferenceKey::TextColor, PreferenceValue::Long(color.packed()));
    }

    pub fn set_background_color(&mut self, color: PaletteColor) {
        self.background_color = color;
        self.changes.background_color = true;
        self.mirror.write(
            PreferenceKey::BackgroundColor,
            PreferenceValue::Long(color.packed()),
        );
    }

    pub fn set_scroll_speed(&mut self, speed: ScrollSpeed) {
        self.scroll_speed = speed;
        self.changes.speed = true;
        self.mirror
            .write(PreferenceKey::Speed, PreferenceValue::Float(speed.value()));
    }

    /// Session-only; nothing is written to the store.
    pub fn set_font(&mut self, font: FontChoice) {
        self.font = font;
        self.changes.font = true;
    }

    /// Overwrite the persisted fields with a store snapshot. Absent or
    /// invalid entries fall back to the defaults. Only fields whose value
    /// actually differs are marked changed.
    pub fn apply_preferences(&mut self, prefs: &Preferences) {
        let text = resolve(prefs, PreferenceKey::ScrollerText, String::new(), |v| match v {
            PreferenceValue::String(s) => Some(s.clone()),
            _ => None,
        });
        let text_color = resolve(prefs, PreferenceKey::TextColor, DEFAULT_TEXT_COLOR, |v| {
            match v {
                PreferenceValue::Long(packed) => PaletteColor::from_packed(*packed),
                _ => None,
            }
        });
        let background_color = resolve(
            prefs,
            PreferenceKey::BackgroundColor,
            DEFAULT_BACKGROUND_COLOR,
            |v| match v {
                PreferenceValue::Long(packed) => PaletteColor::from_packed(*packed),
                _ => None,
            },
        );
        let speed = resolve(prefs, PreferenceKey::Speed, ScrollSpeed::default(), |v| match v {
            PreferenceValue::Float(value) => ScrollSpeed::from_value(*value),
            _ => None,
        });

        if text != self.scroll_text {
            self.scroll_text = text;
            self.changes.text = true;
        }
        if text_color != self.text_color {
            self.text_color = text_color;
            self.changes.text_color = true;
        }
        if background_color != self.background_color {
            self.background_color = background_color;
            self.changes.background_color = true;
        }
        if speed != self.scroll_speed {
            self.scroll_speed = speed;
            self.changes.speed = true;
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.changes.any()
    }

    /// Return the pending changes and clear them.
    pub fn take_changes(&mut self) -> SettingsChanges {
        std::mem::take(&mut self.changes)
    }

    pub fn mirror(&self) -> &PreferenceMirror {
        &self.mirror
    }
}

/// Read `key` from `prefs`, falling back to `default` when absent or when
/// `parse` rejects the stored value.
fn resolve<T>(
    prefs: &Preferences,
    key: PreferenceKey,
    default: T,
    parse: impl FnOnce(&PreferenceValue) -> Option<T>,
) -> T {
    let Some(stored) = prefs.get(key.name()) else {
        return default;
    };
    match parse(stored) {
        Some(value) => value,
        None => {
            tracing::warn!("Ignoring invalid stored value for '{}': {:?}", key, stored);
            default
        }
    }
}
