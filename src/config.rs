//! Game configuration for the CLI host.

use crate::games::capitals::{DEFAULT_SUGGESTION_LIMIT, MAX_ATTEMPTS};
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configuration for a game round.
#[derive(Debug, Clone, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct GameConfig {
    /// Base URL of the weather worker serving the oracle.
    #[serde(default = "default_worker_url")]
    worker_url: String,

    /// Number of guesses a round allows.
    #[serde(default = "default_max_attempts")]
    max_attempts: usize,

    /// Maximum number of autocomplete suggestions shown per query.
    #[serde(default = "default_suggestion_limit")]
    suggestion_limit: usize,
}

#[instrument]
fn default_worker_url() -> String {
    "https://weatherleworker.hashimownemail.workers.dev/".to_string()
}

#[instrument]
fn default_max_attempts() -> usize {
    MAX_ATTEMPTS
}

#[instrument]
fn default_suggestion_limit() -> usize {
    DEFAULT_SUGGESTION_LIMIT
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

        info!(worker_url = %config.worker_url, "Config loaded successfully");
        Ok(config)
    }

    /// Applies the `WEATHERLE_WORKER_URL` environment override, if set.
    #[instrument(skip(self))]
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var("WEATHERLE_WORKER_URL") {
            info!(worker_url = %url, "Overriding worker URL from environment");
            self.worker_url = url;
        }
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            worker_url: default_worker_url(),
            max_attempts: default_max_attempts(),
            suggestion_limit: default_suggestion_limit(),
        }
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
