//! Core domain types for Mastermind
//!
//! The palette, sequences, scoring and secret generation. Nothing in here
//! performs I/O.

mod color;
mod error;
mod feedback;
mod secret;
mod sequence;

pub use color::Color;
pub use error::{GuessError, ScoreError};
pub use feedback::{Feedback, Peg};
pub use secret::SecretGenerator;
pub use sequence::{CODE_LENGTH, Sequence};
