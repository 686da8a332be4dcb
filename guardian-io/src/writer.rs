use std::fs::File;
use std::io;
use std::path::Path;

use guardian_core::constants;
use guardian_core::errors::{GuardianError, GuardianResult};
use guardian_core::models::RedactionResult;

use crate::json_format;

/// CSV writer for `record_id,redacted_data_json,is_pii` rows.
///
/// The JSON cell is quoted and escaped by the CSV layer only.
pub struct ResultWriter<W: io::Write> {
    inner: csv::Writer<W>,
    label: String,
    rows: usize,
}

impl ResultWriter<File> {
    pub fn create(path: &Path) -> GuardianResult<Self> {
        let file =
            File::create(path).map_err(|e| GuardianError::io(path.display().to_string(), e))?;
        Self::from_writer(file, path.display().to_string())
    }
}

impl<W: io::Write> ResultWriter<W> {
    /// Wrap `writer` and emit the header row.
    pub fn from_writer(writer: W, label: impl Into<String>) -> GuardianResult<Self> {
        let label = label.into();
        let mut inner = csv::Writer::from_writer(writer);
        inner
            .write_record(constants::OUTPUT_HEADER)
            .map_err(|e| GuardianError::csv(label.clone(), e))?;
        Ok(Self {
            inner,
            label,
            rows: 0,
        })
    }

    pub fn write_result(&mut self, result: &RedactionResult) -> GuardianResult<()> {
        let json = json_format::encode_fields(&result.redacted).map_err(|e| {
            GuardianError::Serialization {
                record_id: result.record_id.clone(),
                message: e.to_string(),
            }
        })?;
        let flag = if result.is_pii { "True" } else { "False" };
        self.inner
            .write_record([result.record_id.as_str(), json.as_str(), flag])
            .map_err(|e| GuardianError::csv(self.label.clone(), e))?;
        self.rows += 1;
        Ok(())
    }

    pub fn rows_written(&self) -> usize {
        self.rows
    }

    /// Flush and hand back the underlying writer.
    pub fn finish(mut self) -> GuardianResult<W> {
        self.inner
            .flush()
            .map_err(|e| GuardianError::io(self.label.clone(), e))?;
        let label = self.label;
        self.inner
            .into_inner()
            .map_err(|e| GuardianError::io(label, e.error()))
    }
}
