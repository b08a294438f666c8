//! Error types for guesses and scoring

use thiserror::Error;

/// A guess line that could not be turned into a sequence
///
/// Always recoverable: the turn is rejected and the player tries again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("'{0}' is not a color code")]
    UnknownSymbolCode(String),
    #[error("expected {expected} colors, got {found}")]
    LengthMismatch { expected: usize, found: usize },
}

/// Scoring was asked to compare sequences of different lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("guess has {guess} pegs but secret has {secret}")]
    LengthMismatch { guess: usize, secret: usize },
}
