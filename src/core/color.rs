//! The color palette
//!
//! Six colors, each with a single-letter code used for typing guesses and an
//! emoji glyph used for rendering them.

use super::GuessError;
use std::fmt;

/// A peg color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Red,
    Yellow,
    Green,
    Purple,
    Blue,
    White,
}

impl Color {
    /// Every color, in palette order
    pub const ALL: [Self; 6] = [
        Self::Red,
        Self::Yellow,
        Self::Green,
        Self::Purple,
        Self::Blue,
        Self::White,
    ];

    /// Upper-case name of the color
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "RED",
            Self::Yellow => "YELLOW",
            Self::Green => "GREEN",
            Self::Purple => "PURPLE",
            Self::Blue => "BLUE",
            Self::White => "WHITE",
        }
    }

    /// Single-letter code, the first letter of the name
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Red => 'R',
            Self::Yellow => 'Y',
            Self::Green => 'G',
            Self::Purple => 'P',
            Self::Blue => 'B',
            Self::White => 'W',
        }
    }

    /// Emoji glyph for rendering
    ///
    /// White is a two-codepoint sequence (cloud + variation selector), so
    /// glyphs are strings rather than chars.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Red => "😡",
            Self::Yellow => "😉",
            Self::Green => "🤢",
            Self::Purple => "🌚",
            Self::Blue => "🥶",
            Self::White => "☁️",
        }
    }

    /// Look up a color by its code, ignoring case
    ///
    /// # Errors
    /// Returns `GuessError::UnknownSymbolCode` if no color has this code.
    ///
    /// # Examples
    /// ```
    /// use emoji_mastermind::core::Color;
    ///
    /// assert_eq!(Color::from_code('p').unwrap(), Color::Purple);
    /// assert!(Color::from_code('X').is_err());
    /// ```
    pub fn from_code(code: char) -> Result<Self, GuessError> {
        let upper = code.to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|color| color.code() == upper)
            .ok_or_else(|| GuessError::UnknownSymbolCode(code.to_string()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
