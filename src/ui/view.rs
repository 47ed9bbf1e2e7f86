//! EditorApp::view() and subscription methods.

use std::time::Duration;

use iced::widget::{Column, button, canvas, column, container, mouse_area, row, scrollable, text, text_input};
use iced::{Element, Length, Subscription};

use crate::config::ScreenLayout;

use super::Message;
use super::app::EditorApp;
use super::marquee::MarqueeCanvas;
use super::pickers::{self, label};
use super::styles::{self, palette, to_iced_color};

/// Outer padding of the screen; the preview spans the rest of the width.
pub const SCREEN_PADDING: f32 = 16.0;

const TEXT_PLACEHOLDER: &str = "Type here...";

impl EditorApp {
    pub fn view(&self) -> Element<'_, Message> {
        let editor = match self.layout {
            ScreenLayout::Standard => self.build_standard_sections(),
            ScreenLayout::Compact => self.build_compact_sections(),
        };

        let screen = column![
            self.build_preview(),
            scrollable(editor).height(Length::Fill),
            self.build_status_line(),
            self.build_start_button(),
        ]
        .spacing(12)
        .padding(SCREEN_PADDING);

        let screen = container(screen)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::screen_style);

        if self.controller.font_menu().is_open() {
            mouse_area(screen).on_press(Message::FontMenuDismissed).into()
        } else {
            screen.into()
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        // Animation frames (~60fps) and viewport tracking
        Subscription::batch([
            iced::time::every(Duration::from_millis(16)).map(Message::Tick),
            iced::window::resize_events().map(|(_id, size)| Message::ViewportResized(size)),
        ])
    }

    fn build_preview(&self) -> Element<'_, Message> {
        let frame = self.controller.preview_frame(self.now);
        let background = to_iced_color(frame.background_color);
        let canvas = canvas(MarqueeCanvas { frame })
            .width(Length::Fill)
            .height(self.preview_height);

        container(canvas)
            .width(Length::Fill)
            .clip(true)
            .style(styles::preview_style(background))
            .into()
    }

    fn build_text_field(&self) -> Element<'_, Message> {
        text_input(TEXT_PLACEHOLDER, self.controller.settings().scroll_text())
            .on_input(Message::TextEdited)
            .padding(10)
            .size(18)
            .style(styles::input_style)
            .into()
    }

    fn build_color_sections(&self) -> Column<'_, Message> {
        let settings = self.controller.settings();
        column![
            label("Text color"),
            pickers::color_row(settings.text_color(), Message::TextColorSelected),
            label("Background color"),
            pickers::color_row(settings.background_color(), Message::BackgroundColorSelected),
        ]
        .spacing(8)
    }

    fn build_speed_section(&self) -> Column<'_, Message> {
        column![
            label("Speed"),
            pickers::speed_row(self.controller.settings().scroll_speed()),
        ]
        .spacing(8)
    }

    fn build_font_section(&self) -> Column<'_, Message> {
        column![
            label("Font"),
            pickers::font_dropdown(self.controller.settings().font(), self.controller.font_menu()),
        ]
        .spacing(8)
    }

    /// Every section full width, top to bottom.
    fn build_standard_sections(&self) -> Element<'_, Message> {
        column![
            self.build_text_field(),
            self.build_color_sections(),
            self.build_speed_section(),
            self.build_font_section(),
        ]
        .spacing(16)
        .into()
    }

    /// Speed and font side by side.
    fn build_compact_sections(&self) -> Element<'_, Message> {
        column![
            self.build_text_field(),
            self.build_color_sections(),
            row![
                self.build_speed_section().width(Length::FillPortion(3)),
                self.build_font_section().width(Length::FillPortion(2)),
            ]
            .spacing(12),
        ]
        .spacing(12)
        .into()
    }

    /// Transient notice, or the most recent store failure.
    fn build_status_line(&self) -> Element<'_, Message> {
        if let Some(toast) = self.controller.toast() {
            return container(text(toast.message.clone()).size(14))
                .padding([6, 14])
                .style(styles::toast_style)
                .into();
        }
        match self.controller.last_failure() {
            Some(failure) => text(format!("Could not save {}", failure.key))
                .size(12)
                .color(palette::ERROR)
                .into(),
            None => text("").size(12).into(),
        }
    }

    fn build_start_button(&self) -> Element<'_, Message> {
        button(
            container(text("Start").size(18))
                .width(Length::Fill)
                .center_x(Length::Fill),
        )
        .width(Length::Fill)
        .padding(12)
        .style(styles::start_button_style)
        .on_press(Message::StartPressed)
        .into()
    }
}
