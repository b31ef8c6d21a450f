//! Hangman - CLI
//!
//! Word-guessing game with a TUI and a plain console mode.

use anyhow::Result;
use clap::{Parser, Subcommand};
use hangman::{
    commands::{list_categories, run_simple, show_stats},
    config::{DEFAULT_MIN_WORDS, GamePaths, SessionConfig},
    interactive::run_tui,
    logging,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Hangman word-guessing game with categories, scoring and round logs",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory holding `words/` and `game_log/`
    #[arg(short, long, global = true, default_value = ".")]
    data_dir: PathBuf,

    /// Pad the aggregated word pool to at least this many words
    #[arg(short, long, global = true, default_value_t = DEFAULT_MIN_WORDS)]
    min_words: usize,

    /// Play every round from this category instead of prompting
    #[arg(short, long, global = true)]
    category: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple console mode (line-based, no TUI)
    Simple,

    /// Show cumulative statistics
    Stats,

    /// List word categories and their sizes
    Categories,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init();

    let config = SessionConfig {
        paths: GamePaths::new(cli.data_dir),
        min_words: cli.min_words,
        category: cli.category,
    };

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_tui(&config),
        Commands::Simple => run_simple(&config),
        Commands::Stats => show_stats(&config),
        Commands::Categories => list_categories(&config),
    }
}
