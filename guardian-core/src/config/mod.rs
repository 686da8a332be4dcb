pub mod input_config;
pub mod logging_config;

pub use input_config::InputConfig;
pub use logging_config::LoggingConfig;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Top-level configuration, read from `guardian.toml` when present.
///
/// Only ingestion and logging are configurable. Categories, patterns, and
/// the output path are fixed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardianConfig {
    pub input: InputConfig,
    pub logging: LoggingConfig,
}

impl GuardianConfig {
    /// Parse a TOML document. Missing sections and keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::ParseError {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file. Errors if the file is missing or invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Unreadable {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            ConfigError::ParseError { message, .. } => ConfigError::ParseError {
                path: path.display().to_string(),
                message,
            },
            other => other,
        })
    }

    /// Load `path` if it exists, otherwise return the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.input.id_column.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "input.id_column".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.input.payload_column.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "input.payload_column".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
