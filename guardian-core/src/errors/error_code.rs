//! GuardianErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this so the binary can report a structured
/// code alongside the human message.
pub trait GuardianErrorCode {
    /// Returns the error code string (e.g., "IO_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted report string: `[ERROR_CODE] message`.
    fn report_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const IO_ERROR: &str = "IO_ERROR";
pub const CSV_ERROR: &str = "CSV_ERROR";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const MALFORMED_PAYLOAD: &str = "MALFORMED_PAYLOAD";
