//! Payload parse errors. Recovered by the fallback chain, never fatal.

use super::error_code::{self, GuardianErrorCode};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PayloadError {
    #[error("malformed payload ({strategy}): {reason}")]
    Malformed {
        strategy: &'static str,
        reason: String,
    },

    #[error("payload is JSON but not an object ({strategy}): found {found}")]
    NotAnObject {
        strategy: &'static str,
        found: &'static str,
    },

    #[error("strategy {strategy} does not apply")]
    NotApplicable { strategy: &'static str },
}

impl GuardianErrorCode for PayloadError {
    fn error_code(&self) -> &'static str {
        error_code::MALFORMED_PAYLOAD
    }
}
