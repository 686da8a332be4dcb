use serde::{Deserialize, Serialize};

use crate::constants;

/// Logging configuration. `GUARDIAN_LOG` takes precedence over `filter`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive string, e.g. `guardian=debug`.
    pub filter: Option<String>,
}

impl LoggingConfig {
    /// Returns the configured filter, defaulting to `guardian=info`.
    pub fn effective_filter(&self) -> &str {
        self.filter.as_deref().unwrap_or(constants::DEFAULT_LOG_FILTER)
    }
}
