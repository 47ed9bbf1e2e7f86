//! Fixed option lists offered by the edit screen pickers.
//!
//! Every selectable value is a closed enum, so a setting can only ever hold
//! one of the listed options:
//! - `color`: the ordered palette used for text and background
//! - `speed`: the four scroll speeds
//! - `font`: the five fonts of the font dropdown

mod color;
mod font;
mod speed;

pub use color::PaletteColor;
pub use font::FontChoice;
pub use speed::ScrollSpeed;
