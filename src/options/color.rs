//! Color palette shared by the text and background color pickers.

/// A palette entry. Order matches the picker order; the first entry is drawn
/// with a distinct shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteColor {
    White,
    Black,
    Red,
    Orange,
    Yellow,
    Green,
    Cyan,
    Blue,
    Purple,
    Pink,
}

impl PaletteColor {
    pub const ALL: [PaletteColor; 10] = [
        PaletteColor::White,
        PaletteColor::Black,
        PaletteColor::Red,
        PaletteColor::Orange,
        PaletteColor::Yellow,
        PaletteColor::Green,
        PaletteColor::Cyan,
        PaletteColor::Blue,
        PaletteColor::Purple,
        PaletteColor::Pink,
    ];

    /// Opaque color as `0xAARRGGBB`.
    pub const fn argb(self) -> u32 {
        match self {
            PaletteColor::White => 0xFFFF_FFFF,
            PaletteColor::Black => 0xFF00_0000,
            PaletteColor::Red => 0xFFF4_4336,
            PaletteColor::Orange => 0xFFFF_9800,
            PaletteColor::Yellow => 0xFFFF_EB3B,
            PaletteColor::Green => 0xFF4C_AF50,
            PaletteColor::Cyan => 0xFF00_BCD4,
            PaletteColor::Blue => 0xFF21_96F3,
            PaletteColor::Purple => 0xFF9C_27B0,
            PaletteColor::Pink => 0xFFE9_1E63,
        }
    }

    /// Value written to the preference store (ARGB zero-extended to 64 bits).
    pub const fn packed(self) -> i64 {
        self.argb() as i64
    }

    /// Look up the palette entry for a stored value.
    pub fn from_packed(value: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|color| color.packed() == value)
    }

    /// Split into `(r, g, b, a)` bytes.
    pub const fn rgba8(self) -> (u8, u8, u8, u8) {
        let argb = self.argb();
        (
            (argb >> 16) as u8,
            (argb >> 8) as u8,
            argb as u8,
            (argb >> 24) as u8,
        )
    }

    pub fn is_first(self) -> bool {
        self == Self::ALL[0]
    }

    pub fn name(self) -> &'static str {
        match self {
            PaletteColor::White => "White",
            PaletteColor::Black => "Black",
            PaletteColor::Red => "Red",
            PaletteColor::Orange => "Orange",
            PaletteColor::Yellow => "Yellow",
            PaletteColor::Green => "Green",
            PaletteColor::Cyan => "Cyan",
            PaletteColor::Blue => "Blue",
            PaletteColor::Purple => "Purple",
            PaletteColor::Pink => "Pink",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packed_values_are_unique() {
        for (i, a) in PaletteColor::ALL.iter().enumerate() {
            for b in &PaletteColor::ALL[i + 1..] {
                assert_ne!(a.packed(), b.packed(), "{} and {} collide", a.name(), b.name());
            }
        }
    }

    #[test]
    fn from_packed_finds_every_entry() {
        for color in PaletteColor::ALL {
            assert_eq!(PaletteColor::from_packed(color.packed()), Some(color));
        }
    }

    #[test]
    fn from_packed_rejects_colors_outside_palette() {
        assert_eq!(PaletteColor::from_packed(0x8012_3456), None);
        assert_eq!(PaletteColor::from_packed(-1), None);
    }

    #[test]
    fn rgba8_splits_channels() {
        assert_eq!(PaletteColor::Red.rgba8(), (0xF4, 0x43, 0x36, 0xFF));
        assert_eq!(PaletteColor::Black.rgba8(), (0, 0, 0, 0xFF));
    }

    #[test]
    fn only_white_is_first() {
        assert!(PaletteColor::White.is_first());
        assert!(PaletteColor::ALL[1..].iter().all(|c| !c.is_first()));
    }
}
