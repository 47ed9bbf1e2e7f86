//! Picker widgets: color swatch rows, speed radios, font dropdown.

use iced::widget::{Column, Row, button, column, container, radio, scrollable, text};
use iced::{Element, Length};

use crate::options::{FontChoice, PaletteColor, ScrollSpeed};
use crate::picker::{self, FontMenu, Shape};

use super::Message;
use super::styles::{self, iced_font, palette, to_iced_color};

const SWATCH_SIZE: f32 = 36.0;

/// Horizontally scrollable row of palette swatches.
pub fn color_row<'a>(
    selected: PaletteColor,
    on_select: fn(PaletteColor) -> Message,
) -> Element<'a, Message> {
    let swatches = picker::color_options(selected).into_iter().map(|item| {
        let radius = match item.shape {
            Shape::Circle => SWATCH_SIZE / 2.0,
            Shape::RoundedSquare => 8.0,
        };
        button(text(""))
            .width(SWATCH_SIZE)
            .height(SWATCH_SIZE)
            .style(styles::swatch_style(to_iced_color(item.value), item.selected, radius))
            .on_press(on_select(item.value))
            .into()
    });

    scrollable(Row::with_children(swatches).spacing(10).padding([4, 2]))
        .direction(scrollable::Direction::Horizontal(
            scrollable::Scrollbar::default(),
        ))
        .width(Length::Fill)
        .into()
}

/// One radio per speed, labelled "1x" to "4x".
pub fn speed_row<'a>(selected: ScrollSpeed) -> Element<'a, Message> {
    let radios = picker::speed_options(selected).into_iter().map(|item| {
        radio(
            item.value.label(),
            item.value,
            Some(selected),
            Message::SpeedSelected,
        )
        .size(18)
        .spacing(6)
        .style(styles::radio_style)
        .into()
    });
    Row::with_children(radios).spacing(16).into()
}

/// Dropdown field showing the current font; the open menu lists every
/// choice drawn in its own face.
pub fn font_dropdown<'a>(selected: FontChoice, menu: FontMenu) -> Element<'a, Message> {
    let marker = if menu.is_open() { "▴" } else { "▾" };
    let field = button(text(format!("{}  {}", selected.name(), marker)).font(iced_font(selected)))
        .width(Length::Fill)
        .padding([8, 12])
        .style(styles::dropdown_style(false))
        .on_press(Message::FontMenuToggled);

    if !menu.is_open() {
        return field.into();
    }

    let entries = picker::font_options(selected).into_iter().map(|item| {
        button(text(item.value.name()).font(iced_font(item.value)))
            .width(Length::Fill)
            .padding([6, 12])
            .style(styles::dropdown_style(item.selected))
            .on_press(Message::FontSelected(item.value))
            .into()
    });
    let list = container(Column::with_children(entries).spacing(2))
        .padding(4)
        .style(styles::menu_style);

    column![field, list].spacing(4).into()
}

/// Section heading.
pub fn label<'a>(content: &'a str) -> Element<'a, Message> {
    text(content).size(14).color(palette::TEXT_SECONDARY).into()
}
