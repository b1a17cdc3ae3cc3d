//! Game settings loaded from TOML and overridden from the command line.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tictac_core::GameMode;
use tracing::{debug, info, instrument};

/// Settings for a play session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Start against the computer instead of a friend.
    vs_ai: bool,

    /// Seed for the AI's random choices; entropy when absent.
    seed: Option<u64>,

    /// Log file path.
    log_file: PathBuf,

    /// Filter used when `RUST_LOG` is not set.
    log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            vs_ai: false,
            seed: None,
            log_file: PathBuf::from("tictac.log"),
            log_filter: "info,tictac_core=debug".to_string(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;

        info!(vs_ai = settings.vs_ai, "Settings loaded");
        Ok(settings)
    }

    /// Resolves settings for a run: file values (if the file exists),
    /// then command-line overrides.
    #[instrument(skip(cli), fields(config = %cli.config.display()))]
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let mut settings = if cli.config.exists() {
            Self::from_file(&cli.config)?
        } else {
            Self::default()
        };

        if cli.ai {
            settings.vs_ai = true;
        }
        if let Some(seed) = cli.seed {
            settings.seed = Some(seed);
        }
        if let Some(log_file) = &cli.log_file {
            settings.log_file = log_file.clone();
        }

        Ok(settings)
    }

    /// The mode the first game starts in.
    pub fn mode(&self) -> GameMode {
        GameMode::from_ai_enabled(self.vs_ai)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
