//! Option rows for the color, speed and font pickers.
//!
//! Pickers are stateless: each row is rebuilt from the option list and the
//! current selection, and a tap hands the chosen option back to the caller.
//! The only state is [`FontMenu`], the open/closed flag of the font dropdown.

use crate::options::{FontChoice, PaletteColor, ScrollSpeed};

/// How an option is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Circle,
    RoundedSquare,
}

/// One entry of a picker row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerItem<T> {
    pub value: T,
    pub selected: bool,
    pub shape: Shape,
}

/// Palette swatches; the first color gets the rounded-square shape.
pub fn color_options(selected: PaletteColor) -> Vec<PickerItem<PaletteColor>> {
    PaletteColor::ALL
        .into_iter()
        .map(|color| PickerItem {
            value: color,
            selected: color == selected,
            shape: if color.is_first() { Shape::RoundedSquare } else { Shape::Circle },
        })
        .collect()
}

pub fn speed_options(selected: ScrollSpeed) -> Vec<PickerItem<ScrollSpeed>> {
    ScrollSpeed::ALL
        .into_iter()
        .map(|speed| PickerItem {
            value: speed,
            selected: speed == selected,
            shape: Shape::Circle,
        })
        .collect()
}

pub fn font_options(selected: FontChoice) -> Vec<PickerItem<FontChoice>> {
    FontChoice::ALL
        .into_iter()
        .map(|font| PickerItem {
            value: font,
            selected: font == selected,
            shape: Shape::RoundedSquare,
        })
        .collect()
}

/// Open/closed state of the font dropdown. Closed by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FontMenu {
    open: bool,
}

impl FontMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Tap on the dropdown field.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Tap outside the open menu.
    pub fn dismiss(&mut self) {
        self.open = false;
    }

    /// Pick an entry; closes the menu and returns the choice.
    pub fn select(&mut self, font: FontChoice) -> FontChoice {
        self.open = false;
        font
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_color_is_selected() {
        let items = color_options(PaletteColor::Purple);
        assert_eq!(items.len(), PaletteColor::ALL.len());
        let selected: Vec<_> = items.iter().filter(|i| i.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].value, PaletteColor::Purple);
    }

    #[test]
    fn only_first_color_is_square() {
        let items = color_options(PaletteColor::White);
        assert_eq!(items[0].shape, Shape::RoundedSquare);
        assert!(items[1..].iter().all(|i| i.shape == Shape::Circle));
    }

    #[test]
    fn speed_and_font_rows_keep_order() {
        let speeds: Vec<_> = speed_options(ScrollSpeed::Triple).iter().map(|i| i.value).collect();
        assert_eq!(speeds, ScrollSpeed::ALL);
        assert!(speed_options(ScrollSpeed::Triple)[2].selected);

        let fonts: Vec<_> = font_options(FontChoice::Led).iter().map(|i| i.value).collect();
        assert_eq!(fonts, FontChoice::ALL);
        assert!(font_options(FontChoice::Led)[0].selected);
    }

    #[test]
    fn font_menu_opens_and_closes() {
        let mut menu = FontMenu::default();
        assert!(!menu.is_open());

        menu.toggle();
        assert!(menu.is_open());
        assert_eq!(menu.select(FontChoice::Cursive), FontChoice::Cursive);
        assert!(!menu.is_open());

        menu.toggle();
        menu.dismiss();
        assert!(!menu.is_open());
    }
}
