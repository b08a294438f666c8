//! Display functions for the game
//!
//! Everything writes to a caller-supplied `Write` so the game can run on
//! stdout or into a buffer.

use super::formatters::{feedback_to_glyphs, palette_codes, palette_glyphs, sequence_to_glyphs};
use crate::core::{GuessError, Sequence};
use crate::game::Turn;
use colored::Colorize;
use std::io::{self, Write};

/// Print the startup banner with the palette
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn print_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        "😎 Welcome to EMOJI MASTERMIND! 😎".bright_cyan().bold()
    )?;
    writeln!(out)?;
    writeln!(out, "Possible Colors (use first letter):")?;
    writeln!(out, "{}", palette_codes())?;
    writeln!(out, "{}", palette_glyphs())?;
    writeln!(out)?;
    writeln!(out, "Keep guessing till you win:")?;
    writeln!(out)?;
    writeln!(out)
}

/// Reveal the secret's codes (debug mode only)
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn print_secret<W: Write>(out: &mut W, secret: &Sequence) -> io::Result<()> {
    writeln!(out, "{} {}", "Secret:".bright_black(), secret.codes())
}

/// Print a scored guess
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn print_turn<W: Write>(out: &mut W, turn: &Turn) -> io::Result<()> {
    writeln!(out, "GUESS:  {}", sequence_to_glyphs(&turn.guess))?;
    writeln!(out, "RESULT: {}", feedback_to_glyphs(turn.feedback))?;
    writeln!(out)
}

/// Explain why a guess line was rejected
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn print_rejected<W: Write>(out: &mut W, error: &GuessError) -> io::Result<()> {
    writeln!(out, "{} {error}", "❌ Invalid guess:".red())?;
    writeln!(
        out,
        "   Enter four color codes separated by spaces, e.g. {}",
        "R G B Y".bright_white()
    )?;
    writeln!(out)
}

/// Print the victory message
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn print_victory<W: Write>(out: &mut W, turns: usize) -> io::Result<()> {
    writeln!(out, "{}", "WOW: YOU WIN 😎".bright_green().bold())?;
    writeln!(out, "You are a genius and a scholar 🙏")?;
    writeln!(
        out,
        "Solved in {} {}",
        turns.to_string().bright_cyan().bold(),
        if turns == 1 { "guess" } else { "guesses" }
    )?;
    writeln!(out, "Please collect your trophy before you go: 🏆")
}

/// Print the farewell when input ends before a win
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn print_abandoned<W: Write>(out: &mut W, turns: usize) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        format!(
            "No more guesses after {turns} {}. The secret stays secret. 👋",
            if turns == 1 { "turn" } else { "turns" }
        )
        .yellow()
    )
}
