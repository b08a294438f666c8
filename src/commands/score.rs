//! One-shot scoring command
//!
//! Scores a single guess against a known secret without playing a game.

use crate::core::{Feedback, GuessError, Sequence};

/// Result of scoring a guess
pub struct ScoreResult {
    pub guess: Sequence,
    pub secret: Sequence,
    pub feedback: Feedback,
}

/// Parse both sequences and score the guess
///
/// # Errors
///
/// Returns an error if either line is not a valid sequence.
pub fn score_guess(secret: &str, guess: &str) -> Result<ScoreResult, GuessError> {
    let secret = Sequence::parse(secret)?;
    let guess = Sequence::parse(guess)?;
    let feedback = Feedback::score(&guess, &secret);

    Ok(ScoreResult {
        guess,
        secret,
        feedback,
    })
}
