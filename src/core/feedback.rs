//! Scoring a guess against the secret
//!
//! Feedback is a pair of counts:
//! - exact matches: right color in the right position
//! - color matches: right color in the wrong position
//!
//! Each secret position can be credited at most once, so a guess with a
//! repeated color never earns more pegs for it than the secret has copies.

use super::{CODE_LENGTH, Color, ScoreError, Sequence};
use rustc_hash::FxHashMap;

/// A single feedback peg
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Peg {
    /// Right color, right position
    ExactMatch,
    /// Right color, wrong position
    ColorMatch,
}

impl Peg {
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::ExactMatch => "💘",
            Self::ColorMatch => "💔",
        }
    }
}

/// Result of scoring one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback {
    exact: usize,
    color: usize,
    length: usize,
}

impl Feedback {
    /// All exact matches for a standard-length sequence
    pub const PERFECT: Self = Self {
        exact: CODE_LENGTH,
        color: 0,
        length: CODE_LENGTH,
    };

    /// Score two sequences of any (equal) length
    ///
    /// # Algorithm
    /// 1. First pass: count exact matches; every other secret position goes
    ///    into the pool of unconsumed colors
    /// 2. Second pass: for each non-exact guess position, take one matching
    ///    color out of the pool if one is left
    ///
    /// # Errors
    /// Returns `ScoreError::LengthMismatch` if the lengths differ.
    ///
    /// # Examples
    /// ```
    /// use emoji_mastermind::core::{Color::*, Feedback};
    ///
    /// let feedback = Feedback::calculate(&[Red, Red, Green, Blue], &[Red, Blue, Blue, Blue]).unwrap();
    /// assert_eq!((feedback.exact(), feedback.color()), (1, 1));
    ///
    /// assert!(Feedback::calculate(&[Red], &[Red, Red]).is_err());
    /// ```
    pub fn calculate(guess: &[Color], secret: &[Color]) -> Result<Self, ScoreError> {
        if guess.len() != secret.len() {
            return Err(ScoreError::LengthMismatch {
                guess: guess.len(),
                secret: secret.len(),
            });
        }

        let (exact, color) = count_matches(guess, secret);
        Ok(Self {
            exact,
            color,
            length: guess.len(),
        })
    }

    /// Score a guess against the secret
    ///
    /// Both sides are `Sequence`s, so the lengths always agree.
    #[must_use]
    pub fn score(guess: &Sequence, secret: &Sequence) -> Self {
        let (exact, color) = count_matches(guess.colors(), secret.colors());
        Self {
            exact,
            color,
            length: CODE_LENGTH,
        }
    }

    /// Number of exact matches
    #[inline]
    #[must_use]
    pub const fn exact(self) -> usize {
        self.exact
    }

    /// Number of right-color, wrong-position matches
    #[inline]
    #[must_use]
    pub const fn color(self) -> usize {
        self.color
    }

    /// Length of the sequences that were scored
    #[inline]
    #[must_use]
    pub const fn length(self) -> usize {
        self.length
    }

    /// Check if every position matched exactly
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.exact == self.length
    }

    /// Pegs in display order: exact matches first, then color matches
    pub fn pegs(self) -> impl Iterator<Item = Peg> {
        std::iter::repeat_n(Peg::ExactMatch, self.exact)
            .chain(std::iter::repeat_n(Peg::ColorMatch, self.color))
    }
}

/// Two-pass count of (exact, color) matches over equal-length slices
fn count_matches(guess: &[Color], secret: &[Color]) -> (usize, usize) {
    debug_assert_eq!(guess.len(), secret.len());

    let mut exact = 0;
    let mut unconsumed: FxHashMap<Color, usize> = FxHashMap::default();

    // First pass: exact matches consume their secret position
    for (&g, &s) in guess.iter().zip(secret) {
        if g == s {
            exact += 1;
        } else {
            *unconsumed.entry(s).or_insert(0) += 1;
        }
    }

    // Second pass: wrong-position matches draw from what is left
    let mut color = 0;
    for (&g, &s) in guess.iter().zip(secret) {
        if g != s
            && let Some(count) = unconsumed.get_mut(&g)
            && *count > 0
        {
            *count -= 1;
            color += 1;
        }
    }

    (exact, color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color::{Blue, Green, Purple, Red, White, Yellow};

    fn seq(colors: [Color; CODE_LENGTH]) -> Sequence {
        Sequence::new(colors)
    }

    fn counts(feedback: Feedback) -> (usize, usize) {
        (feedback.exact(), feedback.color())
    }

    fn all_sequences() -> Vec<Sequence> {
        let mut out = Vec::with_capacity(6usize.pow(4));
        for a in Color::ALL {
            for b in Color::ALL {
                for c in Color::ALL {
                    for d in Color::ALL {
                        out.push(seq([a, b, c, d]));
                    }
                }
            }
        }
        out
    }

    #[test]
    fn perfect_constant() {
        assert!(Feedback::PERFECT.is_perfect());
        assert_eq!(counts(Feedback::PERFECT), (4, 0));
    }

    #[test]
    fn duplicate_guess_color_credited_once() {
        let guess = seq([Red, Red, Green, Blue]);
        let secret = seq([Red, Blue, Blue, Blue]);
        assert_eq!(counts(Feedback::score(&guess, &secret)), (1, 1));
    }

    #[test]
    fn duplicate_guess_single_secret_copy_elsewhere() {
        let guess = seq([Green, Green, White, White]);
        let secret = seq([Blue, Blue, Blue, Green]);
        assert_eq!(counts(Feedback::score(&guess, &secret)), (0, 1));
    }

    #[test]
    fn exact_match_takes_priority_over_color_match() {
        // The second Yellow is exact, so the first earns nothing
        let guess = seq([Yellow, Yellow, Red, Red]);
        let secret = seq([Blue, Yellow, Green, Green]);
        assert_eq!(counts(Feedback::score(&guess, &secret)), (1, 0));
    }

    #[test]
    fn all_mispositioned() {
        let guess = seq([Red, Yellow, Green, Purple]);
        let secret = seq([Purple, Green, Yellow, Red]);
        let feedback = Feedback::score(&guess, &secret);
        assert_eq!(counts(feedback), (0, 4));
        assert!(!feedback.is_perfect());
    }

    #[test]
    fn disjoint_colors() {
        let guess = seq([Red, Red, Yellow, Yellow]);
        let secret = seq([Blue, White, Green, Purple]);
        let feedback = Feedback::score(&guess, &secret);
        assert_eq!(counts(feedback), (0, 0));
        assert_eq!(feedback.pegs().count(), 0);
    }

    #[test]
    fn every_sequence_wins_against_itself() {
        for s in all_sequences() {
            assert_eq!(Feedback::score(&s, &s), Feedback::PERFECT, "{s}");
        }
    }

    #[test]
    fn perfect_only_when_identical() {
        let secret = seq([Blue, Green, Blue, White]);
        for guess in all_sequences() {
            let feedback = Feedback::score(&guess, &secret);
            assert_eq!(feedback.is_perfect(), guess == secret, "{guess}");
        }
    }

    #[test]
    fn peg_count_never_exceeds_length() {
        let sequences = all_sequences();
        for guess in &sequences {
            for secret in &sequences {
                let feedback = Feedback::score(guess, secret);
                assert!(feedback.exact() + feedback.color() <= CODE_LENGTH);
            }
        }
    }

    #[test]
    fn scoring_is_deterministic_and_leaves_secret_alone() {
        let guess = seq([Purple, Red, Red, Yellow]);
        let secret = seq([Red, Purple, Yellow, Red]);
        let before = secret;

        let first = Feedback::score(&guess, &secret);
        for _ in 0..10 {
            assert_eq!(Feedback::score(&guess, &secret), first);
        }
        assert_eq!(secret, before);
        assert_eq!(counts(first), (0, 4));
    }

    #[test]
    fn calculate_any_length() {
        let feedback = Feedback::calculate(&[Red], &[Red]).unwrap();
        assert!(feedback.is_perfect());
        assert_eq!(feedback.length(), 1);

        let guess = [Red, Blue, Green, White, Yellow, Purple];
        let secret = [Purple, Blue, Green, Red, Red, Red];
        let feedback = Feedback::calculate(&guess, &secret).unwrap();
        assert_eq!(counts(feedback), (2, 2));
        assert!(!feedback.is_perfect());
    }

    #[test]
    fn calculate_length_mismatch() {
        assert_eq!(
            Feedback::calculate(&[Red, Blue], &[Red, Blue, Green]),
            Err(ScoreError::LengthMismatch {
                guess: 2,
                secret: 3
            })
        );
    }

    #[test]
    fn pegs_exact_first() {
        let guess = seq([Red, Green, Yellow, White]);
        let secret = seq([Red, Yellow, Green, Blue]);
        let pegs: Vec<Peg> = Feedback::score(&guess, &secret).pegs().collect();
        assert_eq!(pegs, vec![Peg::ExactMatch, Peg::ColorMatch, Peg::ColorMatch]);
    }

    #[test]
    fn peg_glyphs_differ() {
        assert_ne!(Peg::ExactMatch.glyph(), Peg::ColorMatch.glyph());
    }
}
