//! Formatting utilities for terminal output

use crate::core::{Color, Feedback, Sequence};

/// Format a sequence as glyphs separated by spaces
#[must_use]
pub fn sequence_to_glyphs(sequence: &Sequence) -> String {
    sequence
        .colors()
        .iter()
        .map(|color| color.glyph())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format feedback as one glyph per peg, exact matches first
#[must_use]
pub fn feedback_to_glyphs(feedback: Feedback) -> String {
    feedback
        .pegs()
        .map(|peg| peg.glyph())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Palette codes, e.g. `R  Y  G  P  B  W`
#[must_use]
pub fn palette_codes() -> String {
    Color::ALL
        .iter()
        .map(|color| color.code().to_string())
        .collect::<Vec<_>>()
        .join("  ")
}

/// Palette glyphs in the same order as `palette_codes`
#[must_use]
pub fn palette_glyphs() -> String {
    Color::ALL
        .iter()
        .map(|color| color.glyph())
        .collect::<Vec<_>>()
        .join(" ")
}
