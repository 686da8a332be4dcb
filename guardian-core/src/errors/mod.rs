pub mod config_error;
pub mod error_code;
pub mod guardian_error;
pub mod payload_error;

pub use config_error::ConfigError;
pub use error_code::GuardianErrorCode;
pub use guardian_error::GuardianError;
pub use payload_error::PayloadError;

/// Convenience alias used across the workspace.
pub type GuardianResult<T> = Result<T, GuardianError>;
