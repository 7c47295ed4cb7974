//! Game configuration: turn length and board sizes on offer.

use crate::games::tictactoe::{DEFAULT_TURN_SECONDS, MIN_BOARD_SIZE};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configuration for a game session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seconds a player has before the turn passes.
    #[serde(default = "default_turn_seconds")]
    turn_seconds: u32,

    /// Board sizes the player may pick from.
    #[serde(default = "default_allowed_sizes")]
    allowed_sizes: Vec<usize>,

    /// Countdown value at or below which the display turns urgent.
    #[serde(default = "default_urgent_seconds")]
    urgent_seconds: u32,
}

#[instrument]
fn default_turn_seconds() -> u32 {
    DEFAULT_TURN_SECONDS
}

#[instrument]
fn default_allowed_sizes() -> Vec<usize> {
    vec![3, 4, 5]
}

#[instrument]
fn default_urgent_seconds() -> u32 {
    3
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            turn_seconds: default_turn_seconds(),
            allowed_sizes: default_allowed_sizes(),
            urgent_seconds: default_urgent_seconds(),
        }
    }
}

impl GameConfig {
    /// Creates a validated configuration.
    #[instrument]
    pub fn new(
        turn_seconds: u32,
        allowed_sizes: Vec<usize>,
        urgent_seconds: u32,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            turn_seconds,
            allowed_sizes,
            urgent_seconds,
        };
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file. Missing keys take defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            turn_seconds = config.turn_seconds,
            allowed_sizes = ?config.allowed_sizes,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Replaces the turn length, revalidating.
    #[instrument(skip(self))]
    pub fn with_turn_seconds(mut self, turn_seconds: u32) -> Result<Self, ConfigError> {
        self.turn_seconds = turn_seconds;
        self.validate()?;
        Ok(self)
    }

    /// True if `size` is one of the offered board sizes.
    pub fn allows(&self, size: usize) -> bool {
        self.allowed_sizes.contains(&size)
    }

    #[instrument(skip(self))]
    fn validate(&self) -> Result<(), ConfigError> {
        if self.turn_seconds == 0 {
            return Err(ConfigError::new("turn_seconds must be at least 1"));
        }
        if self.allowed_sizes.is_empty() {
            return Err(ConfigError::new("allowed_sizes must not be empty"));
        }
        if let Some(size) = self
            .allowed_sizes
            .iter()
            .find(|&&size| size < MIN_BOARD_SIZE)
        {
            return Err(ConfigError::new(format!(
                "Board size {} is below the minimum of {}",
                size, MIN_BOARD_SIZE
            )));
        }
        Ok(())
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
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(*config.turn_seconds(), 10);
        assert_eq!(config.allowed_sizes(), &vec![3, 4, 5]);
        assert_eq!(*config.urgent_seconds(), 3);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = GameConfig::from_toml("turn_seconds = 5").unwrap();
        assert_eq!(*config.turn_seconds(), 5);
        assert!(config.allows(4));
        assert!(!config.allows(6));
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(GameConfig::from_toml("turn_seconds = 0").is_err());
        assert!(GameConfig::from_toml("allowed_sizes = []").is_err());
        assert!(GameConfig::from_toml("allowed_sizes = [2, 3]").is_err());
        assert!(GameConfig::from_toml("turn_seconds = \"ten\"").is_err());
    }

    #[test]
    fn test_error_carries_message() {
        let err = GameConfig::default().with_turn_seconds(0).unwrap_err();
        assert!(err.message.contains("turn_seconds"));
        assert!(err.to_string().starts_with("Config error"));
    }
}
