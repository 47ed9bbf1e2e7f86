//! EditorApp struct definition and core initialization.

use std::time::Instant;

use iced::Task;

use crate::config::{AppConfig, ScreenLayout};
use crate::controller::{EditController, StartPayload};
use crate::measure::CosmicMeasurer;
use crate::platform::DesktopPlatform;

use super::{INIT_LAUNCH, Launch, Message};

/// The edit screen application.
pub struct EditorApp {
    pub(super) controller: EditController,
    pub(super) measurer: CosmicMeasurer,
    pub(super) layout: ScreenLayout,
    pub(super) preview_height: f32,
    /// Time of the last animation frame.
    pub(super) now: Instant,
}

impl EditorApp {
    pub fn boot() -> (Self, Task<Message>) {
        let Launch { mirror, failures, config } = INIT_LAUNCH
            .with(|cell| cell.borrow_mut().take())
            .expect("Launch parameters not initialized");

        let mut controller = EditController::new(
            mirror,
            failures,
            config.controller_options(),
            Box::new(print_payload),
        );
        let stream = controller.enter(&DesktopPlatform);
        let measurer = CosmicMeasurer::new(config.fonts_dir.as_deref());

        let app = Self::build_app(controller, measurer, &config);
        let observe = Task::run(stream, Message::PreferencesChanged)
            .chain(Task::done(Message::PreferencesClosed));
        (app, observe)
    }

    fn build_app(
        controller: EditController,
        measurer: CosmicMeasurer,
        config: &AppConfig,
    ) -> Self {
        let mut app = EditorApp {
            controller,
            measurer,
            layout: config.layout,
            preview_height: match config.layout {
                ScreenLayout::Standard => config.preview_height,
                ScreenLayout::Compact => config.preview_height * 0.6,
            },
            now: Instant::now(),
        };
        app.controller
            .set_viewport_width((config.window_width - 2.0 * super::view::SCREEN_PADDING).max(0.0));
        app.controller.render_step(&mut app.measurer, app.now);
        app
    }

    pub fn title(&self) -> String {
        "LED Scroller".to_string()
    }
}

/// Hand-off to the playback screen: one JSON line on stdout.
fn print_payload(payload: &StartPayload) {
    match serde_json::to_string(payload) {
        Ok(json) => println!("{json}"),
        Err(e) => tracing::error!("Failed to encode start payload: {}", e),
    }
}
