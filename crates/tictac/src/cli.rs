//! Command-line interface for tictac.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe in the terminal, against a friend or the computer
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Terminal tic-tac-toe with an optional AI opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (ignored if it doesn't exist)
    #[arg(short, long, default_value = "tictac.toml")]
    pub config: PathBuf,

    /// Start in "vs AI" mode
    #[arg(long)]
    pub ai: bool,

    /// Seed for the AI's random choices
    #[arg(long)]
    pub seed: Option<u64>,

    /// Where to write logs (the terminal belongs to the game)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
