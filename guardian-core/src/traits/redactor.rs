use crate::models::{FieldRedaction, Record, RedactionResult};

/// Redaction of a single string value.
///
/// Total over any input: there is no error path.
pub trait IFieldRedactor: Send + Sync {
    fn redact_field(&self, text: &str) -> FieldRedaction;
}

/// Redaction of a whole record. Non-string values pass through unchanged.
pub trait IRecordRedactor: Send + Sync {
    fn redact_record(&self, record: &Record) -> RedactionResult;
}
