//! Shared test helpers.

use std::sync::{Arc, Mutex};

use led_scroller::controller::{ControllerOptions, EditController, StartPayload};
use led_scroller::measure::MeasureText;
use led_scroller::mirror::{PreferenceMirror, RetryPolicy};
use led_scroller::options::FontChoice;
use led_scroller::platform::{PlatformServices, SystemBarStyle};
use led_scroller::store::PreferenceStore;
use tokio::runtime::Handle;

/// Every character advances by the same width, regardless of font.
pub struct FixedAdvance(pub f32);

impl MeasureText for FixedAdvance {
    fn measure(&mut self, text: &str, _font: FontChoice, _font_size: f32) -> f32 {
        text.chars().count() as f32 * self.0
    }
}

/// Records the platform calls issued on screen entry.
#[derive(Default)]
#[allow(dead_code)]
pub struct RecordingPlatform {
    pub calls: Mutex<Vec<String>>,
}

impl PlatformServices for RecordingPlatform {
    fn lock_portrait(&self) {
        self.calls.lock().unwrap().push("portrait".into());
    }

    fn set_status_bar(&self, style: SystemBarStyle) {
        self.calls.lock().unwrap().push(format!("status {style:?}"));
    }

    fn set_navigation_bar(&self, style: SystemBarStyle) {
        self.calls.lock().unwrap().push(format!("navigation {style:?}"));
    }
}

/// Payloads handed to the start callback.
pub type Handoffs = Arc<Mutex<Vec<StartPayload>>>;

/// Controller over `store` with a fast retry policy. Must be called inside a
/// tokio runtime.
#[allow(dead_code)]
pub fn controller_over(store: Arc<dyn PreferenceStore>) -> (EditController, Handoffs) {
    let retry = RetryPolicy {
        attempts: 3,
        delay: std::time::Duration::from_millis(1),
    };
    let (mirror, failures) = PreferenceMirror::new(store, Handle::current(), retry);
    let handoffs: Handoffs = Arc::default();
    let sink = Arc::clone(&handoffs);
    let controller = EditController::new(
        mirror,
        failures,
        ControllerOptions {
            viewport_width: 400.0,
            ..Default::default()
        },
        Box::new(move |payload| sink.lock().unwrap().push(payload.clone())),
    );
    (controller, handoffs)
}
