//! Text width measurement using cosmic-text.
//!
//! The preview needs the rendered width of the marquee text at the reference
//! font size to know how far it has to travel. [`CosmicMeasurer`] shapes the
//! text with the system fonts (plus an optional extra font directory) and
//! returns the widest layout line.

use std::path::Path;

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping, Weight};

use crate::options::FontChoice;

/// Default reference font size for measuring and drawing the marquee text.
pub const REFERENCE_FONT_SIZE: f32 = 50.0;

/// Measures the pixel width of a single line of text.
pub trait MeasureText {
    fn measure(&mut self, text: &str, font: FontChoice, font_size: f32) -> f32;
}

/// cosmic-text attributes for a font choice. Must stay in sync with the
/// faces the UI draws with.
pub fn font_attrs(font: FontChoice) -> Attrs<'static> {
    match font {
        FontChoice::Led => Attrs::new().family(Family::Monospace).weight(Weight::BOLD),
        FontChoice::Sans => Attrs::new().family(Family::SansSerif),
        FontChoice::Serif => Attrs::new().family(Family::Serif),
        FontChoice::Monospace => Attrs::new().family(Family::Monospace),
        FontChoice::Cursive => Attrs::new().family(Family::Cursive),
    }
}

/// Shapes text with cosmic-text.
pub struct CosmicMeasurer {
    font_system: FontSystem,
}

impl std::fmt::Debug for CosmicMeasurer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CosmicMeasurer")
            .field("faces", &self.font_system.db().len())
            .finish()
    }
}

impl CosmicMeasurer {
    /// Load the system fonts, plus every font file in `extra_fonts_dir`.
    pub fn new(extra_fonts_dir: Option<&Path>) -> Self {
        let mut font_system = FontSystem::new();
        if let Some(dir) = extra_fonts_dir {
            if dir.is_dir() {
                let before = font_system.db().len();
                font_system.db_mut().load_fonts_dir(dir);
                tracing::debug!(
                    "Loaded {} font face(s) from {}",
                    font_system.db().len() - before,
                    dir.display()
                );
            } else {
                tracing::warn!("Font directory not found: {}", dir.display());
            }
        }
        Self { font_system }
    }
}

impl MeasureText for CosmicMeasurer {
    fn measure(&mut self, text: &str, font: FontChoice, font_size: f32) -> f32 {
        if text.is_empty() {
            return 0.0;
        }
        let metrics = Metrics::new(font_size, font_size * 1.2);
        let mut buffer = Buffer::new(&mut self.font_system, metrics);
        buffer.set_size(&mut self.font_system, None, None);
        buffer.set_text(
            &mut self.font_system,
            text,
            &font_attrs(font),
            Shaping::Advanced,
            None,
        );
        buffer.shape_until_scroll(&mut self.font_system, false);

        buffer
            .layout_runs()
            .map(|run| run.line_w)
            .fold(0.0, f32::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_has_zero_width() {
        let mut measurer = CosmicMeasurer::new(None);
        assert_eq!(measurer.measure("", FontChoice::Led, REFERENCE_FONT_SIZE), 0.0);
    }

    #[test]
    fn width_is_never_negative() {
        let mut measurer = CosmicMeasurer::new(None);
        for font in FontChoice::ALL {
            let width = measurer.measure("HELLO", font, REFERENCE_FONT_SIZE);
            assert!(width >= 0.0 && width.is_finite(), "{font}: {width}");
        }
    }

    #[test]
    fn missing_font_dir_is_tolerated() {
        let mut measurer = CosmicMeasurer::new(Some(Path::new("/nonexistent/fonts")));
        assert_eq!(measurer.measure("", FontChoice::Serif, 12.0), 0.0);
    }
}
