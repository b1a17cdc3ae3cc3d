//! tictac - tic-tac-toe in the terminal
//!
//! Play a friend on the same keyboard or switch to the heuristic AI.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use config::Settings;
use tictac_core::Game;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::resolve(&cli)?;

    init_tracing(&settings)?;
    info!(?settings, "Starting tictac");

    let game = match settings.seed() {
        Some(seed) => Game::seeded(*seed),
        None => Game::new(),
    }
    .with_mode(settings.mode());

    tui::run(game).await
}

/// Logs go to a file so they don't interfere with the TUI.
fn init_tracing(settings: &Settings) -> Result<()> {
    let log_file = std::fs::File::create(settings.log_file()).with_context(|| {
        format!("Failed to create log file {}", settings.log_file().display())
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))
}
