pub mod redactor;

pub use redactor::{IFieldRedactor, IRecordRedactor};
