//! Interactive play
//!
//! Reads one guess per line until the secret is found or input runs out.

use crate::config::GameConfig;
use crate::core::SecretGenerator;
use crate::game::{Game, GameError, GameState};
use crate::output::{
    print_abandoned, print_banner, print_rejected, print_secret, print_turn, print_victory,
};
use rand::Rng;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The secret was found after this many scored guesses
    Won { turns: usize },
    /// Input ended first
    Abandoned { turns: usize },
}

/// Play a game against a freshly generated secret
///
/// # Errors
///
/// Returns an error only if reading input or writing output fails.
pub fn run_play<R, I, W>(
    config: &GameConfig,
    generator: &mut SecretGenerator<R>,
    mut input: I,
    out: &mut W,
) -> io::Result<PlayOutcome>
where
    R: Rng,
    I: BufRead,
    W: Write,
{
    let mut game = Game::new(generator.generate());
    info!("secret generated");

    if config.reveal_secret {
        print_secret(out, game.secret())?;
    }
    print_banner(out)?;
    out.flush()?;

    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        // Undecodable bytes become U+FFFD and fail as an unknown color code
        let line = String::from_utf8_lossy(&buf);

        match game.guess_line(&line) {
            Ok(turn) => {
                print_turn(out, &turn)?;
                if turn.state == GameState::Won {
                    print_victory(out, turn.number)?;
                    out.flush()?;
                    info!(turns = turn.number, "game won");
                    return Ok(PlayOutcome::Won { turns: turn.number });
                }
            }
            Err(GameError::InvalidGuess(error)) => {
                debug!(%error, "rejected guess");
                print_rejected(out, &error)?;
            }
            Err(GameError::AlreadyWon) => unreachable!("loop exits on the winning turn"),
        }
        out.flush()?;
    }

    info!(turns = game.turns(), "input ended before a win");
    print_abandoned(out, game.turns())?;
    out.flush()?;
    Ok(PlayOutcome::Abandoned {
        turns: game.turns(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const SEED: u64 = 99;

    fn secret_for_seed() -> String {
        SecretGenerator::seeded(SEED).generate().codes()
    }

    fn play(config: &GameConfig, input: &str) -> (PlayOutcome, String) {
        play_bytes(config, input.as_bytes())
    }

    fn play_bytes(config: &GameConfig, input: &[u8]) -> (PlayOutcome, String) {
        let mut generator = SecretGenerator::seeded(SEED);
        let mut out = Vec::new();
        let outcome = run_play(config, &mut generator, Cursor::new(input), &mut out).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn immediate_win() {
        let secret = secret_for_seed();
        let (outcome, out) = play(&GameConfig::default(), &format!("{secret}\n"));

        assert_eq!(outcome, PlayOutcome::Won { turns: 1 });
        assert!(out.contains("Welcome to EMOJI MASTERMIND"));
        assert!(out.contains("RESULT: 💘 💘 💘 💘"));
        assert!(out.contains("YOU WIN"));
        assert!(!out.contains("Secret:"));
    }

    #[test]
    fn lowercase_guess_wins() {
        let secret = secret_for_seed().to_lowercase();
        let (outcome, _) = play(&GameConfig::default(), &format!("{secret}\n"));
        assert_eq!(outcome, PlayOutcome::Won { turns: 1 });
    }

    #[test]
    fn invalid_lines_do_not_count_as_turns() {
        let secret = secret_for_seed();
        let input = format!("x x x x\nr g\n\n{secret}\n");
        let (outcome, out) = play(&GameConfig::default(), &input);

        assert_eq!(outcome, PlayOutcome::Won { turns: 1 });
        assert_eq!(out.matches("Invalid guess").count(), 3);
        assert!(out.contains("'x' is not a color code"));
        assert!(out.contains("expected 4 colors, got 2"));
        assert!(out.contains("expected 4 colors, got 0"));
    }

    #[test]
    fn non_utf8_line_is_rejected_and_play_continues() {
        let secret = secret_for_seed();
        let mut input = b"r g \xff y\n".to_vec();
        input.extend_from_slice(format!("{secret}\n").as_bytes());
        let (outcome, out) = play_bytes(&GameConfig::default(), &input);

        assert_eq!(outcome, PlayOutcome::Won { turns: 1 });
        assert_eq!(out.matches("Invalid guess").count(), 1);
        assert!(out.contains("is not a color code"));
    }

    #[test]
    fn last_line_without_newline_is_scored() {
        let secret = secret_for_seed();
        let (outcome, _) = play(&GameConfig::default(), &secret);
        assert_eq!(outcome, PlayOutcome::Won { turns: 1 });
    }

    #[test]
    fn lines_after_win_are_ignored() {
        let secret = secret_for_seed();
        let input = format!("{secret}\nnot even a guess\n{secret}\n");
        let (outcome, out) = play(&GameConfig::default(), &input);

        assert_eq!(outcome, PlayOutcome::Won { turns: 1 });
        assert_eq!(out.matches("GUESS:").count(), 1);
        assert!(!out.contains("Invalid guess"));
    }

    #[test]
    fn end_of_input_abandons() {
        let (outcome, out) = play(&GameConfig::default(), "");
        assert_eq!(outcome, PlayOutcome::Abandoned { turns: 0 });
        assert!(out.contains("No more guesses"));
    }

    #[test]
    fn losing_guesses_then_abandon() {
        let secret = secret_for_seed();
        // Two guesses that cannot both be the secret
        let input = if secret == "R R R R" {
            "B B B B\nG G G G\n"
        } else {
            "R R R R\nR R R R\n"
        };
        let (outcome, out) = play(&GameConfig::default(), input);

        assert_eq!(outcome, PlayOutcome::Abandoned { turns: 2 });
        assert_eq!(out.matches("GUESS:  ").count(), 2);
        assert_eq!(out.matches("RESULT:").count(), 2);
        assert!(!out.contains("YOU WIN"));
    }

    #[test]
    fn reveal_secret_before_banner() {
        let secret = secret_for_seed();
        let config = GameConfig {
            reveal_secret: true,
            seed: Some(SEED),
        };
        let (_, out) = play(&config, "");

        let reveal = out.find(&secret).expect("secret shown");
        let banner = out.find("Welcome").expect("banner shown");
        assert!(reveal < banner);
        assert!(out.contains("Secret:"));
    }
}
