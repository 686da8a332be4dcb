//! # guardian-core
//!
//! Foundation crate for the Guardian PII redactor.
//! Defines the record and category types, the redactor traits, errors,
//! config, tracing setup, and constants. Every other crate in the workspace
//! depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::GuardianConfig;
pub use errors::{GuardianError, GuardianResult};
pub use models::{Category, FieldMap, FieldRedaction, Record, RedactionResult};
