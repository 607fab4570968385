//! Board configuration.
//!
//! Defaults match the shipped screen. Each value can be overridden from the
//! environment, which is mostly useful for scripted sessions of the binary.
//!
//! | Variable | Default |
//! |---|---|
//! | `TASKBOARD_MAX_INPUT_CHARS` | `100` |
//! | `TASKBOARD_ID_STRATEGY` | `random` (`random` or `sequential`) |
//! | `TASKBOARD_LOG` | `taskboard=info,taskboard_runtime=info` |
//! | `TASKBOARD_ACTION_BUFFER` | `16` |

use crate::input::MAX_TASK_CHARS;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Default tracing filter for the binary
pub const DEFAULT_LOG_FILTER: &str = "taskboard=info,taskboard_runtime=info";

/// Configuration error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable was set but could not be parsed
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue {
        /// Variable name
        key: &'static str,
        /// Offending value
        value: String,
    },

    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    Validation(String),
}

/// How new task ids are generated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// Random v4 UUIDs
    Random,
    /// `1`, `2`, `3`, ... as UUIDs; reproducible sessions
    Sequential,
}

impl FromStr for IdStrategy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "random" | "uuid" => Ok(Self::Random),
            "sequential" | "counter" => Ok(Self::Sequential),
            _ => Err(()),
        }
    }
}

/// Board configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Characters the input field accepts
    pub max_input_chars: usize,
    /// Task id source
    pub id_strategy: IdStrategy,
    /// `tracing-subscriber` filter directive
    pub log_filter: String,
    /// Capacity of the accepted-action broadcast
    pub action_buffer: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            max_input_chars: MAX_TASK_CHARS,
            id_strategy: IdStrategy::Random,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            action_buffer: 16,
        }
    }
}

impl BoardConfig {
    /// Set the input character limit
    #[must_use]
    pub const fn with_max_input_chars(mut self, max: usize) -> Self {
        self.max_input_chars = max;
        self
    }

    /// Set the id strategy
    #[must_use]
    pub const fn with_id_strategy(mut self, strategy: IdStrategy) -> Self {
        self.id_strategy = strategy;
        self
    }

    /// Load configuration from process environment variables
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable is malformed or the result is invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from any key lookup, falling back to defaults
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a value is malformed or the result is invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("TASKBOARD_MAX_INPUT_CHARS") {
            config.max_input_chars = parse("TASKBOARD_MAX_INPUT_CHARS", value)?;
        }
        if let Some(value) = lookup("TASKBOARD_ID_STRATEGY") {
            config.id_strategy = parse("TASKBOARD_ID_STRATEGY", value)?;
        }
        if let Some(value) = lookup("TASKBOARD_LOG") {
            config.log_filter = value;
        }
        if let Some(value) = lookup("TASKBOARD_ACTION_BUFFER") {
            config.action_buffer = parse("TASKBOARD_ACTION_BUFFER", value)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if a limit is zero or the log filter is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_input_chars == 0 {
            return Err(ConfigError::Validation(
                "max_input_chars must be > 0".to_string(),
            ));
        }
        if self.action_buffer == 0 {
            return Err(ConfigError::Validation(
                "action_buffer must be > 0".to_string(),
            ));
        }
        if self.log_filter.trim().is_empty() {
            return Err(ConfigError::Validation(
                "log_filter cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse<T: FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue { key, value })
}
