//! The four scroll speeds.

/// Scroll speed multiplier. `Normal` is the base speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScrollSpeed {
    #[default]
    Normal,
    Double,
    Triple,
    Quadruple,
}

impl ScrollSpeed {
    pub const ALL: [ScrollSpeed; 4] = [
        ScrollSpeed::Normal,
        ScrollSpeed::Double,
        ScrollSpeed::Triple,
        ScrollSpeed::Quadruple,
    ];

    /// Multiplier as stored under the speed key.
    pub const fn value(self) -> f32 {
        match self {
            ScrollSpeed::Normal => 1.0,
            ScrollSpeed::Double => 2.0,
            ScrollSpeed::Triple => 3.0,
            ScrollSpeed::Quadruple => 4.0,
        }
    }

    pub fn from_value(value: f32) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|speed| (speed.value() - value).abs() < f32::EPSILON)
    }

    /// Radio button label.
    pub fn label(self) -> &'static str {
        match self {
            ScrollSpeed::Normal => "1x",
            ScrollSpeed::Double => "2x",
            ScrollSpeed::Triple => "3x",
            ScrollSpeed::Quadruple => "4x",
        }
    }

    /// Decimal text form used in the playback hand-off (`"2.0"`, `"1.5"`).
    pub fn to_decimal_string(self) -> String {
        let value = self.value();
        if value.fract() == 0.0 {
            format!("{value:.1}")
        } else {
            value.to_string()
        }
    }
}
