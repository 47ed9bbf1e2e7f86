//! Fonts offered by the font dropdown.

/// Font used for the marquee text. Selected per session, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontChoice {
    #[default]
    Led,
    Sans,
    Serif,
    Monospace,
    Cursive,
}

impl FontChoice {
    pub const ALL: [FontChoice; 5] = [
        FontChoice::Led,
        FontChoice::Sans,
        FontChoice::Serif,
        FontChoice::Monospace,
        FontChoice::Cursive,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FontChoice::Led => "Led",
            FontChoice::Sans => "Sans",
            FontChoice::Serif => "Serif",
            FontChoice::Monospace => "Monospace",
            FontChoice::Cursive => "Cursive",
        }
    }
}

impl std::fmt::Display for FontChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
