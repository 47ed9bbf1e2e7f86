//! UI style functions for iced widgets.

use iced::widget::{button, container, radio, text_input};
use iced::{Border, Color, Font, Theme, font};

use crate::options::{FontChoice, PaletteColor};

// Dark editor palette
pub mod palette {
    use iced::Color;

    pub const BG_DARK: Color = Color::from_rgb(0.07, 0.07, 0.09);
    pub const BG_PANEL: Color = Color::from_rgb(0.13, 0.13, 0.16);
    pub const BG_INPUT: Color = Color::from_rgb(0.10, 0.10, 0.12);
    pub const ACCENT: Color = Color::from_rgb(0.20, 0.60, 1.00);
    pub const ACCENT_DIM: Color = Color::from_rgb(0.12, 0.38, 0.66);
    pub const TEXT_PRIMARY: Color = Color::from_rgb(0.93, 0.93, 0.95);
    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.62, 0.62, 0.68);
    pub const TEXT_MUTED: Color = Color::from_rgb(0.42, 0.42, 0.48);
    pub const BORDER: Color = Color::from_rgb(0.24, 0.24, 0.28);
    pub const BORDER_HIGHLIGHT: Color = Color::from_rgb(0.38, 0.38, 0.44);
    pub const ERROR: Color = Color::from_rgb(0.95, 0.35, 0.35);
}

/// Corner radius of the preview area.
pub const PREVIEW_RADIUS: f32 = 16.0;

pub fn to_iced_color(color: PaletteColor) -> Color {
    let (r, g, b, a) = color.rgba8();
    Color::from_rgba8(r, g, b, a as f32 / 255.0)
}

/// Face used to draw a font choice. Mirrors `measure::font_attrs`.
pub fn iced_font(choice: FontChoice) -> Font {
    let family = match choice {
        FontChoice::Led | FontChoice::Monospace => font::Family::Monospace,
        FontChoice::Sans => font::Family::SansSerif,
        FontChoice::Serif => font::Family::Serif,
        FontChoice::Cursive => font::Family::Cursive,
    };
    let weight = match choice {
        FontChoice::Led => font::Weight::Bold,
        _ => font::Weight::Normal,
    };
    Font {
        family,
        weight,
        ..Font::DEFAULT
    }
}

pub fn screen_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(palette::BG_DARK)),
        text_color: Some(palette::TEXT_PRIMARY),
        ..Default::default()
    }
}

/// Rounded preview container filled with the selected background color.
pub fn preview_style(background: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(iced::Background::Color(background)),
        border: Border {
            color: palette::BORDER,
            width: 1.0,
            radius: PREVIEW_RADIUS.into(),
        },
        ..Default::default()
    }
}

/// Floating font menu.
pub fn menu_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(palette::BG_PANEL)),
        border: Border {
            color: palette::BORDER_HIGHLIGHT,
            width: 1.0,
            radius: 6.0.into(),
        },
        ..Default::default()
    }
}

/// Notification bubble above the Start button.
pub fn toast_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(palette::BG_PANEL)),
        text_color: Some(palette::TEXT_PRIMARY),
        border: Border {
            color: palette::BORDER,
            width: 1.0,
            radius: 12.0.into(),
        },
        ..Default::default()
    }
}

/// Style for the scroll text field.
pub fn input_style(_theme: &Theme, status: text_input::Status) -> text_input::Style {
    let border_color = match status {
        text_input::Status::Active => palette::BORDER,
        text_input::Status::Hovered => palette::BORDER_HIGHLIGHT,
        text_input::Status::Focused { is_hovered: _ } => palette::ACCENT,
        text_input::Status::Disabled => palette::BG_DARK,
    };

    text_input::Style {
        background: iced::Background::Color(palette::BG_INPUT),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: 6.0.into(),
        },
        icon: palette::TEXT_MUTED,
        placeholder: palette::TEXT_MUTED,
        value: palette::TEXT_PRIMARY,
        selection: palette::ACCENT_DIM,
    }
}

/// Style for the Start button.
pub fn start_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let (bg, text_color) = match status {
        button::Status::Active => (palette::ACCENT, Color::WHITE),
        button::Status::Hovered => (palette::ACCENT_DIM, Color::WHITE),
        button::Status::Pressed => (palette::ACCENT_DIM, palette::TEXT_SECONDARY),
        button::Status::Disabled => (palette::BG_PANEL, palette::TEXT_MUTED),
    };

    button::Style {
        background: Some(iced::Background::Color(bg)),
        text_color,
        border: Border {
            color: bg,
            width: 1.0,
            radius: 24.0.into(),
        },
        ..Default::default()
    }
}

/// Style for the font dropdown field and its entries.
pub fn dropdown_style(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let bg = match status {
            button::Status::Hovered | button::Status::Pressed => palette::BORDER,
            _ if selected => palette::ACCENT_DIM,
            _ => palette::BG_INPUT,
        };
        button::Style {
            background: Some(iced::Background::Color(bg)),
            text_color: palette::TEXT_PRIMARY,
            border: Border {
                color: palette::BORDER,
                width: 1.0,
                radius: 6.0.into(),
            },
            ..Default::default()
        }
    }
}

/// Color swatch; the selected swatch gets a bright ring.
pub fn swatch_style(
    fill: Color,
    selected: bool,
    radius: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let border_color = if selected {
            palette::ACCENT
        } else if matches!(status, button::Status::Hovered) {
            palette::BORDER_HIGHLIGHT
        } else {
            palette::BORDER
        };
        button::Style {
            background: Some(iced::Background::Color(fill)),
            text_color: palette::TEXT_PRIMARY,
            border: Border {
                color: border_color,
                width: if selected { 3.0 } else { 1.0 },
                radius: radius.into(),
            },
            ..Default::default()
        }
    }
}

/// Style for the speed radio buttons.
pub fn radio_style(_theme: &Theme, status: radio::Status) -> radio::Style {
    let (is_selected, hovered) = match status {
        radio::Status::Active { is_selected } => (is_selected, false),
        radio::Status::Hovered { is_selected } => (is_selected, true),
    };
    radio::Style {
        background: iced::Background::Color(palette::BG_INPUT),
        dot_color: palette::ACCENT,
        border_width: 1.0,
        border_color: if is_selected || hovered {
            palette::ACCENT
        } else {
            palette::BORDER_HIGHLIGHT
        },
        text_color: Some(palette::TEXT_PRIMARY),
    }
}
