#![forbid(unsafe_code)]

//! SGR color and decoration codes.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;

/// Offset between a foreground color code and its background counterpart.
const BACKGROUND_OFFSET: u8 = 10;

/// The sixteen ANSI colors.
///
/// Terminals differ in how (and whether) they render these.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    HiBlack,
    HiRed,
    HiGreen,
    HiYellow,
    HiBlue,
    HiMagenta,
    HiCyan,
    HiWhite,
}

impl Color {
    /// All colors in code order.
    pub const ALL: [Color; 16] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
        Color::HiBlack,
        Color::HiRed,
        Color::HiGreen,
        Color::HiYellow,
        Color::HiBlue,
        Color::HiMagenta,
        Color::HiCyan,
        Color::HiWhite,
    ];

    /// SGR parameter selecting this color as foreground (30-37, 90-97).
    #[must_use]
    pub const fn fg_code(self) -> u8 {
        match self {
            Color::Black => 30,
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
            Color::Magenta => 35,
            Color::Cyan => 36,
            Color::White => 37,
            Color::HiBlack => 90,
            Color::HiRed => 91,
            Color::HiGreen => 92,
            Color::HiYellow => 93,
            Color::HiBlue => 94,
            Color::HiMagenta => 95,
            Color::HiCyan => 96,
            Color::HiWhite => 97,
        }
    }

    /// SGR parameter selecting this color as background (40-47, 100-107).
    #[must_use]
    pub const fn bg_code(self) -> u8 {
        self.fg_code() + BACKGROUND_OFFSET
    }

    const fn name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
            Color::HiBlack => "hi-black",
            Color::HiRed => "hi-red",
            Color::HiGreen => "hi-green",
            Color::HiYellow => "hi-yellow",
            Color::HiBlue => "hi-blue",
            Color::HiMagenta => "hi-magenta",
            Color::HiCyan => "hi-cyan",
            Color::HiWhite => "hi-white",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a color name is not recognized.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnknownColor(pub String);

impl fmt::Display for UnknownColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown color name {:?}", self.0)
    }
}

impl std::error::Error for UnknownColor {}

impl FromStr for Color {
    type Err = UnknownColor;

    /// Parse a color name such as `"red"`, `"hi-cyan"` or `"HiCyan"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        Color::ALL
            .into_iter()
            .find(|color| color.name().replace('-', "") == wanted)
            .ok_or_else(|| UnknownColor(s.to_string()))
    }
}

bitflags! {
    /// Text decorations. Most terminals support only a subset.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct Attrs: u16 {
        const BOLD = 1 << 0;
        const FAINT = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const BLINK_SLOW = 1 << 4;
        const BLINK_RAPID = 1 << 5;
        const REVERSE = 1 << 6;
        const CONCEAL = 1 << 7;
        const CROSSED_OUT = 1 << 8;
    }
}

impl Attrs {
    /// SGR parameters for the set decorations, in ascending order.
    pub fn codes(self) -> impl Iterator<Item = u8> {
        // Bit n maps to SGR parameter n + 1.
        (0..9u8).filter(move |bit| self.bits() & (1u16 << *bit) != 0).map(|bit| bit + 1)
    }
}

/// A single SGR code, for building a [`Style`](crate::Style) from a list.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Code {
    /// `0`: reset all attributes.
    Reset,
    Fg(Color),
    Bg(Color),
    /// One or more decorations.
    Attr(Attrs),
}

impl From<Color> for Code {
    fn from(color: Color) -> Self {
        Code::Fg(color)
    }
}

impl From<Attrs> for Code {
    fn from(attrs: Attrs) -> Self {
        Code::Attr(attrs)
    }
}
