use serde::{Deserialize, Serialize};

use crate::constants;

/// Column names of the input CSV.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Column carrying the opaque record identifier.
    pub id_column: String,
    /// Column carrying the embedded JSON payload.
    pub payload_column: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            id_column: constants::DEFAULT_ID_COLUMN.to_string(),
            payload_column: constants::DEFAULT_PAYLOAD_COLUMN.to_string(),
        }
    }
}
