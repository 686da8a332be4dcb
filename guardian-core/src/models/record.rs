use serde::{Deserialize, Serialize};

/// Ordered field→value mapping. Insertion order is kept (`preserve_order`).
pub type FieldMap = serde_json::Map<String, serde_json::Value>;

/// One input unit: an opaque identifier and its fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub record_id: String,
    pub fields: FieldMap,
}

impl Record {
    pub fn new(record_id: impl Into<String>, fields: FieldMap) -> Self {
        Self {
            record_id: record_id.into(),
            fields,
        }
    }
}
