//! # guardian-redact
//!
//! Detection-and-masking engine: one regex matcher and one mask rule per PII
//! category, applied in a fixed order to every string field of a record.

pub mod field_redactor;
pub mod patterns;
pub mod record_redactor;

pub use field_redactor::FieldRedactor;
pub use patterns::{all_matchers, CategoryMatcher, Span};
pub use record_redactor::RecordRedactor;
