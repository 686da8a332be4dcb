use guardian_core::models::{Category, FieldMap, Record, RedactionResult};
use guardian_core::traits::{IFieldRedactor, IRecordRedactor};
use serde_json::Value;

use crate::field_redactor::FieldRedactor;

/// Runs the field redactor over every string-valued field of a record.
///
/// Keys, key order, and non-string values are carried over unchanged.
/// Nested objects and arrays are copied as-is, not descended into.
pub struct RecordRedactor<F = FieldRedactor> {
    field_redactor: F,
}

impl RecordRedactor<FieldRedactor> {
    pub fn new() -> Self {
        Self::with_field_redactor(FieldRedactor::new())
    }
}

impl Default for RecordRedactor<FieldRedactor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: IFieldRedactor> RecordRedactor<F> {
    pub fn with_field_redactor(field_redactor: F) -> Self {
        Self { field_redactor }
    }
}

impl<F: IFieldRedactor> IRecordRedactor for RecordRedactor<F> {
    fn redact_record(&self, record: &Record) -> RedactionResult {
        let mut redacted = FieldMap::with_capacity(record.fields.len());
        let mut is_pii = false;
        let mut categories: Vec<Category> = Vec::new();

        for (key, value) in &record.fields {
            let out = match value {
                Value::String(text) => {
                    let field = self.field_redactor.redact_field(text);
                    is_pii |= field.matched_any;
                    for category in field.hits {
                        if !categories.contains(&category) {
                            categories.push(category);
                        }
                    }
                    Value::String(field.text)
                }
                other => other.clone(),
            };
            redacted.insert(key.clone(), out);
        }
        categories.sort();

        tracing::debug!(
            record_id = %record.record_id,
            fields = record.fields.len(),
            is_pii,
            ?categories,
            "record redacted"
        );

        RedactionResult {
            record_id: record.record_id.clone(),
            redacted,
            is_pii,
            categories,
        }
    }
}
