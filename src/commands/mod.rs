//! Command implementations

pub mod play;
pub mod score;

pub use play::{PlayOutcome, run_play};
pub use score::{ScoreResult, score_guess};
