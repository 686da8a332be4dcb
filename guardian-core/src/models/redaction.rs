use serde::{Deserialize, Serialize};

use super::{Category, FieldMap};

/// Outcome of redacting a single string value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRedaction {
    /// Text after all category passes.
    pub text: String,
    /// True iff `text` differs from the input.
    pub matched_any: bool,
    /// Categories whose pass changed the text, in evaluation order.
    pub hits: Vec<Category>,
}

/// Outcome of redacting one record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedactionResult {
    pub record_id: String,
    /// Same keys and key order as the input; only string values may differ.
    pub redacted: FieldMap,
    pub is_pii: bool,
    /// Distinct categories hit anywhere in the record, in evaluation order.
    pub categories: Vec<Category>,
}
