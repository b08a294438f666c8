//! Fixed-length color sequences
//!
//! Both the secret and every guess are a `Sequence`. Guesses are typed as
//! whitespace-separated color codes, e.g. `r g b y`.

use super::{Color, GuessError};
use std::fmt;
use std::str::FromStr;

/// Number of pegs in a sequence
pub const CODE_LENGTH: usize = 4;

/// An ordered row of exactly `CODE_LENGTH` colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sequence([Color; CODE_LENGTH]);

impl Sequence {
    #[inline]
    #[must_use]
    pub const fn new(colors: [Color; CODE_LENGTH]) -> Self {
        Self(colors)
    }

    #[inline]
    #[must_use]
    pub const fn colors(&self) -> &[Color; CODE_LENGTH] {
        &self.0
    }

    /// Space-separated codes, e.g. `R G B Y`
    #[must_use]
    pub fn codes(&self) -> String {
        self.to_string()
    }

    /// Parse a guess line
    ///
    /// Tokens are separated by any whitespace and matched case-insensitively.
    /// The token count is checked before the codes, so `r g` reports a length
    /// problem even though both codes are valid.
    ///
    /// # Errors
    /// - `GuessError::LengthMismatch` if there are not exactly `CODE_LENGTH` tokens
    /// - `GuessError::UnknownSymbolCode` for the first token that is not a color code
    ///
    /// # Examples
    /// ```
    /// use emoji_mastermind::core::{Color, Sequence};
    ///
    /// let guess = Sequence::parse("r  Y g\tb").unwrap();
    /// assert_eq!(
    ///     guess.colors(),
    ///     &[Color::Red, Color::Yellow, Color::Green, Color::Blue]
    /// );
    /// assert!(Sequence::parse("r y g").is_err());
    /// ```
    pub fn parse(line: &str) -> Result<Self, GuessError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();

        if tokens.len() != CODE_LENGTH {
            return Err(GuessError::LengthMismatch {
                expected: CODE_LENGTH,
                found: tokens.len(),
            });
        }

        let mut colors = [Color::Red; CODE_LENGTH];
        for (slot, token) in colors.iter_mut().zip(tokens) {
            let mut chars = token.chars();
            *slot = match (chars.next(), chars.next()) {
                (Some(code), None) => Color::from_code(code)?,
                _ => return Err(GuessError::UnknownSymbolCode(token.to_string())),
            };
        }

        Ok(Self(colors))
    }
}

impl FromStr for Sequence {
    type Err = GuessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, color) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{color}")?;
        }
        Ok(())
    }
}
