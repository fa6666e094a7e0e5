//! Process configuration read from the environment.
//!
//! # Responsibility
//! - Resolve logging and seeding options once at bootstrap.
//!
//! # Invariants
//! - Unset or blank variables fall back to defaults.
//! - Present but unparsable values are rejected, never silently ignored.

use crate::logging::{default_log_level, normalize_level};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const ENV_LOG_LEVEL: &str = "PHONEBOOK_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "PHONEBOOK_LOG_DIR";
pub const ENV_SEED: &str = "PHONEBOOK_SEED";

/// Invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidBool { key: &'static str, value: String },
    InvalidLogLevel { value: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBool { key, value } => write!(
                f,
                "invalid value `{value}` for {key}; expected true|false|1|0|yes|no"
            ),
            Self::InvalidLogLevel { value } => write!(
                f,
                "invalid value `{value}` for {ENV_LOG_LEVEL}; expected trace|debug|info|warn|error"
            ),
        }
    }
}

impl Error for ConfigError {}

/// Bootstrap options for a directory process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryConfig {
    /// Log level passed to `init_logging`.
    pub log_level: String,
    /// Rolling log directory; `None` disables file logging.
    pub log_dir: Option<PathBuf>,
    /// Whether a fresh store starts with the demo records.
    pub seed_demo_data: bool,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level().to_string(),
            log_dir: None,
            seed_demo_data: true,
        }
    }
}

impl DirectoryConfig {
    /// Reads configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::default();
        if let Some(level) = read(ENV_LOG_LEVEL) {
            config.log_level = normalize_level(&level)
                .map_err(|_| ConfigError::InvalidLogLevel { value: level.clone() })?
                .to_string();
        }
        config.log_dir = read(ENV_LOG_DIR).map(PathBuf::from);
        if let Some(seed) = read(ENV_SEED) {
            config.seed_demo_data = parse_bool(ENV_SEED, &seed)?;
        }
        Ok(config)
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            key,
            value: value.to_string(),
        }),
    }
}
