use std::fs::File;
use std::io;
use std::path::Path;

use guardian_core::config::InputConfig;
use guardian_core::errors::{GuardianError, GuardianResult};

/// One input row, before payload parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub record_id: String,
    pub payload: String,
    /// 1-based line in the source, when known.
    pub line: Option<u64>,
}

/// Lazy CSV reader yielding [`RawRow`]s.
///
/// Missing columns and short rows yield empty strings rather than errors.
pub struct RecordReader<R: io::Read> {
    inner: csv::Reader<R>,
    label: String,
    id_idx: Option<usize>,
    payload_idx: Option<usize>,
}

impl RecordReader<File> {
    pub fn open(path: &Path, config: &InputConfig) -> GuardianResult<Self> {
        let file = File::open(path).map_err(|e| GuardianError::io(path.display().to_string(), e))?;
        Self::from_reader(file, path.display().to_string(), config)
    }
}

impl<R: io::Read> RecordReader<R> {
    pub fn from_reader(
        reader: R,
        label: impl Into<String>,
        config: &InputConfig,
    ) -> GuardianResult<Self> {
        let label = label.into();
        let mut inner = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
        let headers = inner
            .headers()
            .map_err(|e| GuardianError::csv(label.clone(), e))?
            .clone();

        let id_idx = headers.iter().position(|h| h == config.id_column);
        let payload_idx = headers.iter().position(|h| h == config.payload_column);
        if id_idx.is_none() {
            tracing::debug!(column = %config.id_column, input = %label, "id column missing");
        }
        if payload_idx.is_none() {
            tracing::debug!(column = %config.payload_column, input = %label, "payload column missing");
        }

        Ok(Self {
            inner,
            label,
            id_idx,
            payload_idx,
        })
    }

    /// Consume the reader into a lazy row iterator.
    pub fn into_rows(self) -> impl Iterator<Item = GuardianResult<RawRow>> {
        let Self {
            inner,
            label,
            id_idx,
            payload_idx,
        } = self;

        inner.into_records().map(move |record| {
            let record = record.map_err(|e| GuardianError::csv(label.clone(), e))?;
            let line = record.position().map(|p| p.line());
            let cell = |idx: Option<usize>| {
                idx.and_then(|i| record.get(i)).map(str::to_string).unwrap_or_else(|| {
                    tracing::debug!(?line, "missing cell; using empty value");
                    String::new()
                })
            };
            Ok(RawRow {
                record_id: cell(id_idx),
                payload: cell(payload_idx),
                line,
            })
        })
    }
}
