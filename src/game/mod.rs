//! Game state machine
//!
//! A game holds an immutable secret and moves from `InProgress` to `Won` on
//! the first perfect guess. There is no turn limit and no way to lose.

use crate::core::{Feedback, GuessError, Sequence};
use thiserror::Error;
use tracing::debug;

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Won,
}

/// Reasons a guess was not scored
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid guess: {0}")]
    InvalidGuess(#[from] GuessError),
    #[error("the game is already won")]
    AlreadyWon,
}

/// One scored guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub number: usize,
    pub guess: Sequence,
    pub feedback: Feedback,
    pub state: GameState,
}

/// A single game against one secret
#[derive(Debug)]
pub struct Game {
    secret: Sequence,
    state: GameState,
    turns: usize,
}

impl Game {
    #[must_use]
    pub const fn new(secret: Sequence) -> Self {
        Self {
            secret,
            state: GameState::InProgress,
            turns: 0,
        }
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Number of guesses scored so far
    #[must_use]
    pub const fn turns(&self) -> usize {
        self.turns
    }

    /// The secret, for the debug disclosure before play begins
    #[must_use]
    pub const fn secret(&self) -> &Sequence {
        &self.secret
    }

    /// Score a guess and advance the state
    ///
    /// # Errors
    /// Returns `GameError::AlreadyWon` once the game has been won.
    ///
    /// # Examples
    /// ```
    /// use emoji_mastermind::game::{Game, GameState};
    ///
    /// let mut game = Game::new("R G B Y".parse().unwrap());
    /// let turn = game.guess(&"R G Y B".parse().unwrap()).unwrap();
    /// assert_eq!((turn.feedback.exact(), turn.feedback.color()), (2, 2));
    /// assert_eq!(game.state(), GameState::InProgress);
    ///
    /// game.guess(&"R G B Y".parse().unwrap()).unwrap();
    /// assert_eq!(game.state(), GameState::Won);
    /// ```
    pub fn guess(&mut self, guess: &Sequence) -> Result<Turn, GameError> {
        if self.state == GameState::Won {
            return Err(GameError::AlreadyWon);
        }

        let feedback = Feedback::score(guess, &self.secret);
        self.turns += 1;
        if feedback.is_perfect() {
            self.state = GameState::Won;
        }

        debug!(
            turn = self.turns,
            exact = feedback.exact(),
            color = feedback.color(),
            "scored guess"
        );

        Ok(Turn {
            number: self.turns,
            guess: *guess,
            feedback,
            state: self.state,
        })
    }

    /// Parse a guess line and score it
    ///
    /// A line that does not parse is rejected without using up a turn.
    ///
    /// # Errors
    /// - `GameError::InvalidGuess` if the line is not a valid sequence
    /// - `GameError::AlreadyWon` once the game has been won
    pub fn guess_line(&mut self, line: &str) -> Result<Turn, GameError> {
        let guess = Sequence::parse(line)?;
        self.guess(&guess)
    }
}
