pub mod category;
pub mod record;
pub mod redaction;

pub use category::Category;
pub use record::{FieldMap, Record};
pub use redaction::{FieldRedaction, RedactionResult};
