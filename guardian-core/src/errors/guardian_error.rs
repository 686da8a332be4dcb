use super::error_code::{self, GuardianErrorCode};
use super::ConfigError;

/// Fatal errors of a batch run. Payload problems never surface here.
#[derive(Debug, thiserror::Error)]
pub enum GuardianError {
    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },

    #[error("CSV error on {path}: {message}")]
    Csv { path: String, message: String },

    #[error("serialization error for record {record_id}: {message}")]
    Serialization { record_id: String, message: String },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl GuardianError {
    pub fn io(path: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }

    pub fn csv(path: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::Csv {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

impl GuardianErrorCode for GuardianError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => error_code::IO_ERROR,
            Self::Csv { .. } => error_code::CSV_ERROR,
            Self::Serialization { .. } => error_code::SERIALIZATION_ERROR,
            Self::Config(inner) => inner.error_code(),
        }
    }
}
