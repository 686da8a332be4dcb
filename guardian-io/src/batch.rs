use std::io;
use std::path::Path;

use guardian_core::config::GuardianConfig;
use guardian_core::errors::GuardianResult;
use guardian_core::models::Record;
use guardian_core::traits::IRecordRedactor;
use guardian_redact::RecordRedactor;
use serde::Serialize;

use crate::payload::PayloadParser;
use crate::reader::RecordReader;
use crate::writer::ResultWriter;

/// Counters for one batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub records: usize,
    pub pii_records: usize,
    /// Rows whose payload needed quote normalization or the raw fallback.
    pub fallback_records: usize,
}

/// Redact `input` into `output` using the default engine.
///
/// The input is opened first so a missing input never leaves an empty
/// output file behind.
pub fn run_batch(input: &Path, output: &Path, config: &GuardianConfig) -> GuardianResult<RunSummary> {
    let reader = RecordReader::open(input, &config.input)?;
    let writer = ResultWriter::create(output)?;
    tracing::info!(input = %input.display(), output = %output.display(), "batch started");

    let (summary, _) = redact_stream(reader, writer, &RecordRedactor::new(), &PayloadParser::new())?;

    tracing::info!(
        records = summary.records,
        pii_records = summary.pii_records,
        fallback_records = summary.fallback_records,
        "batch finished"
    );
    Ok(summary)
}

/// Process every row of `reader` into `writer`, one record at a time.
pub fn redact_stream<R, W, X>(
    reader: RecordReader<R>,
    mut writer: ResultWriter<W>,
    redactor: &X,
    parser: &PayloadParser,
) -> GuardianResult<(RunSummary, W)>
where
    R: io::Read,
    W: io::Write,
    X: IRecordRedactor + ?Sized,
{
    let mut summary = RunSummary::default();

    for row in reader.into_rows() {
        let row = row?;
        let parsed = parser.parse(&row.payload);
        if parsed.source.is_fallback() {
            summary.fallback_records += 1;
            tracing::debug!(record_id = %row.record_id, source = ?parsed.source, "payload recovered");
        }

        let record = Record::new(row.record_id, parsed.fields);
        let result = redactor.redact_record(&record);
        if result.is_pii {
            summary.pii_records += 1;
        }
        writer.write_result(&result)?;
        summary.records += 1;
    }

    tracing::debug!(rows = writer.rows_written(), "flushing results");
    let inner = writer.finish()?;
    Ok((summary, inner))
}
