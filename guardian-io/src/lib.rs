//! # guardian-io
//!
//! Thin I/O around the redaction engine: read `record_id`/`data_json` rows
//! from CSV, parse each payload through an ordered fallback chain, and write
//! `record_id,redacted_data_json,is_pii` rows back out.

pub mod batch;
pub mod json_format;
pub mod payload;
pub mod reader;
pub mod writer;

pub use batch::{redact_stream, run_batch, RunSummary};
pub use payload::{ParsedPayload, PayloadParser, PayloadSource, PayloadStrategy};
pub use reader::{RawRow, RecordReader};
pub use writer::ResultWriter;
