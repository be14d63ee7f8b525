//! Game configuration loaded from TOML.

use crate::games::tictactoe::{DEFAULT_PLAYER_ONE, DEFAULT_PLAYER_TWO};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a game session and its views.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Name of the first player (X).
    #[serde(default = "default_player_one")]
    player_one: String,

    /// Name of the second player (O).
    #[serde(default = "default_player_two")]
    player_two: String,

    /// Delay before the terminal UI offers a reset, in milliseconds.
    #[serde(default = "default_reset_delay_ms")]
    reset_delay_ms: u64,
}

fn default_player_one() -> String {
    DEFAULT_PLAYER_ONE.to_string()
}

fn default_player_two() -> String {
    DEFAULT_PLAYER_TWO.to_string()
}

fn default_reset_delay_ms() -> u64 {
    1000
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_one: default_player_one(),
            player_two: default_player_two(),
            reset_delay_ms: default_reset_delay_ms(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            player_one = %config.player_one,
            player_two = %config.player_two,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces player names with any non-blank overrides.
    #[instrument(skip(self))]
    pub fn with_player_names(mut self, player_one: Option<String>, player_two: Option<String>) -> Self {
        if let Some(name) = player_one.filter(|n| !n.trim().is_empty()) {
            debug!(%name, "Overriding player one");
            self.player_one = name;
        }
        if let Some(name) = player_two.filter(|n| !n.trim().is_empty()) {
            debug!(%name, "Overriding player two");
            self.player_two = name;
        }
        self
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
