//! Emoji Mastermind - CLI
//!
//! Interactive code-breaking game on stdin/stdout, plus a one-shot scorer.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use emoji_mastermind::{
    commands::{PlayOutcome, run_play, score_guess},
    config::GameConfig,
    core::SecretGenerator,
    output::formatters::{feedback_to_glyphs, sequence_to_glyphs},
};
use std::io;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "emoji_mastermind",
    about = "Guess the secret four-color code. Set DEBUG=1 to reveal it.",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game (default)
    Play {
        /// Seed for a reproducible secret
        #[arg(short, long)]
        seed: Option<u64>,

        /// Show the secret before the first guess
        #[arg(long)]
        reveal_secret: bool,
    },

    /// Score one guess against a given secret
    Score {
        /// The secret, e.g. "R G B Y"
        #[arg(short = 'S', long)]
        secret: String,

        /// The guess, e.g. "R R G B"
        guess: String,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        seed: None,
        reveal_secret: false,
    });

    match command {
        Commands::Play {
            seed,
            reveal_secret,
        } => run_play_command(reveal_secret, seed),
        Commands::Score { secret, guess } => run_score_command(&secret, &guess),
    }
}

/// Diagnostics go to stderr so they never mix with the game on stdout
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run_play_command(reveal_secret: bool, seed: Option<u64>) -> Result<()> {
    let config = GameConfig::from_env(reveal_secret, seed).context("invalid configuration")?;
    debug!(?config, "starting game");

    let mut generator = SecretGenerator::with_seed(config.seed);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    let outcome = run_play(&config, &mut generator, stdin.lock(), &mut stdout)
        .context("terminal I/O failed")?;

    match outcome {
        PlayOutcome::Won { turns } => debug!(turns, "finished with a win"),
        PlayOutcome::Abandoned { turns } => debug!(turns, "finished without a win"),
    }
    Ok(())
}

fn run_score_command(secret: &str, guess: &str) -> Result<()> {
    let result = score_guess(secret, guess).context("cannot score")?;

    println!("SECRET: {}", sequence_to_glyphs(&result.secret));
    println!("GUESS:  {}", sequence_to_glyphs(&result.guess));
    println!("RESULT: {}", feedback_to_glyphs(result.feedback));
    println!(
        "{} exact, {} color{}",
        result.feedback.exact().to_string().bright_green().bold(),
        result.feedback.color().to_string().bright_yellow().bold(),
        if result.feedback.is_perfect() {
            " - solved!"
        } else {
            ""
        }
    );
    Ok(())
}
