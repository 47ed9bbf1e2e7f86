//! Canvas program drawing the live preview.

use iced::widget::canvas::{self, Geometry};
use iced::{Point, Rectangle, Theme};

use crate::preview::PreviewFrame;

use super::Message;
use super::styles::{iced_font, to_iced_color};

/// Draws one [`PreviewFrame`]: the background fill and the text at its
/// current horizontal offset, vertically centered and clipped to the bounds.
pub struct MarqueeCanvas {
    pub frame: PreviewFrame,
}

impl canvas::Program<Message> for MarqueeCanvas {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        frame.fill_rectangle(
            Point::ORIGIN,
            bounds.size(),
            to_iced_color(self.frame.background_color),
        );

        if !self.frame.is_empty() {
            let size = self.frame.font_size;
            frame.fill_text(canvas::Text {
                content: self.frame.text.clone(),
                position: Point::new(self.frame.offset, (bounds.height - size) / 2.0),
                color: to_iced_color(self.frame.text_color),
                size: iced::Pixels(size),
                font: iced_font(self.frame.font),
                ..Default::default()
            });
        }

        vec![frame.into_geometry()]
    }
}
