//! EditorApp::update() and message handling.

use std::time::Instant;

use iced::Task;

use crate::controller::StartOutcome;

use super::app::EditorApp;
use super::Message;

impl EditorApp {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        let now = Instant::now();
        match message {
            Message::PreferencesChanged(prefs) => self.controller.apply_preferences(&prefs),
            Message::PreferencesClosed => tracing::warn!("Preference store stopped emitting"),
            Message::TextEdited(text) => self.controller.edit_text(text),
            Message::SpeedSelected(speed) => self.controller.select_speed(speed),
            Message::TextColorSelected(color) => self.controller.select_text_color(color),
            Message::BackgroundColorSelected(color) => {
                self.controller.select_background_color(color)
            }
            Message::FontMenuToggled => self.controller.toggle_font_menu(),
            Message::FontMenuDismissed => self.controller.dismiss_font_menu(),
            Message::FontSelected(font) => self.controller.select_font(font),
            Message::StartPressed => return self.handle_start(now),
            Message::Tick(at) => self.handle_tick(at),
            Message::ViewportResized(size) => self.handle_resize(size.width),
        }

        self.controller.render_step(&mut self.measurer, now);
        Task::none()
    }

    // ── Event handlers ──────────────────────────────────────────────────

    fn handle_start(&mut self, now: Instant) -> Task<Message> {
        match self.controller.start(now) {
            StartOutcome::Started => iced::exit(),
            StartOutcome::Rejected | StartOutcome::Ignored => Task::none(),
        }
    }

    fn handle_tick(&mut self, at: Instant) {
        self.now = at;
        self.controller.tick(at);
    }

    fn handle_resize(&mut self, window_width: f32) {
        let width = (window_width - 2.0 * super::view::SCREEN_PADDING).max(0.0);
        self.controller.set_viewport_width(width);
    }
}
