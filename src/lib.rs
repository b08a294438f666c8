//! Emoji Mastermind
//!
//! Guess the secret sequence of four colors. After every guess the game
//! answers with one 💘 per color in the right position and one 💔 per color
//! that is in the secret but somewhere else.
//!
//! # Quick Start
//!
//! ```rust
//! use emoji_mastermind::core::{Feedback, Sequence};
//!
//! let secret = Sequence::parse("R B B B").unwrap();
//! let guess = Sequence::parse("R R G B").unwrap();
//!
//! let feedback = Feedback::score(&guess, &secret);
//! assert_eq!(feedback.exact(), 1);
//! assert_eq!(feedback.color(), 1);
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod game;

// Command implementations
pub mod commands;

// Run-time configuration
pub mod config;

// Terminal output formatting
pub mod output;
