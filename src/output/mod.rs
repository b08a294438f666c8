//! Terminal output formatting
//!
//! Glyph formatting and the text the game prints.

pub mod display;
pub mod formatters;

pub use display::{
    print_abandoned, print_banner, print_rejected, print_secret, print_turn, print_victory,
};
