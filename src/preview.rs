//! Marquee animation for the live preview.
//!
//! The text starts just past the right edge of the viewport (offset =
//! viewport width) and moves left at `base_rate * speed` pixels per second
//! until it has fully left on the left side (offset = -text width), then
//! wraps around and starts again. Until the text has a measured width the
//! marquee is static and the text is drawn at offset 0.

use std::time::{Duration, Instant};

use crate::options::{FontChoice, PaletteColor, ScrollSpeed};

/// Pixels per second at the base speed.
pub const DEFAULT_BASE_RATE: f32 = 120.0;

/// One marquee run, anchored at the instant it was (re)started.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marquee {
    viewport_width: f32,
    text_width: f32,
    rate: f32,
    started_at: Instant,
}

impl Marquee {
    pub fn new(
        viewport_width: f32,
        text_width: f32,
        speed: ScrollSpeed,
        base_rate: f32,
        started_at: Instant,
    ) -> Self {
        Self {
            viewport_width,
            text_width,
            rate: base_rate * speed.value(),
            started_at,
        }
    }

    /// Offset at the start of a cycle.
    pub fn start_offset(&self) -> f32 {
        self.viewport_width
    }

    /// Offset at the end of a cycle, just before wrapping.
    pub fn end_offset(&self) -> f32 {
        -self.text_width
    }

    /// Pixels travelled per cycle.
    pub fn distance(&self) -> f32 {
        self.viewport_width + self.text_width
    }

    /// Pixels per second.
    pub fn rate(&self) -> f32 {
        self.rate
    }

    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    /// True when there is nothing to animate: no measured width yet, or a
    /// degenerate distance or rate.
    pub fn is_static(&self) -> bool {
        let animated = self.text_width > 0.0
            && self.distance() > 0.0
            && self.rate > 0.0
            && self.distance().is_finite()
            && self.rate.is_finite();
        !animated
    }

    pub fn cycle_duration(&self) -> Option<Duration> {
        if self.is_static() {
            return None;
        }
        Some(Duration::from_secs_f32(self.distance() / self.rate))
    }

    /// Offset after `progress` of a cycle (clamped to `0.0..=1.0`).
    pub fn offset_at_progress(&self, progress: f32) -> f32 {
        if self.is_static() {
            return 0.0;
        }
        let progress = progress.clamp(0.0, 1.0);
        self.start_offset() + (self.end_offset() - self.start_offset()) * progress
    }

    /// Offset at `now`, wrapping every cycle.
    pub fn offset_at(&self, now: Instant) -> f32 {
        if self.is_static() {
            return 0.0;
        }
        // f64 keeps sub-pixel steps after hours without a restart.
        let elapsed = now.saturating_duration_since(self.started_at).as_secs_f64();
        let travelled = (elapsed * f64::from(self.rate)) % f64::from(self.distance());
        (f64::from(self.start_offset()) - travelled) as f32
    }
}

/// Everything the preview canvas needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewFrame {
    pub text: String,
    pub offset: f32,
    pub text_color: PaletteColor,
    pub background_color: PaletteColor,
    pub font: FontChoice,
    pub font_size: f32,
    pub animated: bool,
}

impl PreviewFrame {
    /// Nothing visible to draw.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
