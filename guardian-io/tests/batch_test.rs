use std::path::Path;

use guardian_core::config::{GuardianConfig, InputConfig};
use guardian_core::errors::GuardianError;
use guardian_core::traits::IRecordRedactor;
use guardian_io::{redact_stream, run_batch, PayloadParser, RecordReader, ResultWriter, RunSummary};
use guardian_redact::RecordRedactor;
use test_fixtures::{fixture_path, load_fixture_value};

fn read_output(path: &Path) -> Vec<Vec<String>> {
    let mut reader = csv::Reader::from_path(path).unwrap();
    let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
    assert_eq!(headers, vec!["record_id", "redacted_data_json", "is_pii"]);
    reader
        .records()
        .map(|r| r.unwrap().iter().map(String::from).collect())
        .collect()
}

#[test]
fn golden_records_csv() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("redacted_output.csv");
    let summary = run_batch(
        &fixture_path("golden/redaction/records.csv"),
        &output,
        &GuardianConfig::default(),
    )
    .unwrap();

    let expected = load_fixture_value("golden/redaction/records_expected.json");
    let expected_rows = expected["rows"].as_array().unwrap();
    let rows = read_output(&output);
    assert_eq!(rows.len(), expected_rows.len());

    for (row, want) in rows.iter().zip(expected_rows) {
        let id = want["record_id"].as_str().unwrap();
        assert_eq!(row[0], id);
        assert_eq!(
            row[1],
            want["redacted_data_json"].as_str().unwrap(),
            "record {}: json mismatch",
            id
        );
        assert_eq!(row[2], want["is_pii"].as_str().unwrap(), "record {}: flag mismatch", id);
    }

    assert_eq!(
        summary,
        RunSummary {
            records: 10,
            pii_records: 6,
            fallback_records: 3,
        }
    );
}

#[test]
fn empty_payload_row_is_clean_empty_object() {
    let input = "record_id,data_json\nabc,\n";
    let reader = RecordReader::from_reader(input.as_bytes(), "mem", &InputConfig::default()).unwrap();
    let writer = ResultWriter::from_writer(Vec::new(), "mem").unwrap();
    let (summary, out) =
        redact_stream(reader, writer, &RecordRedactor::new(), &PayloadParser::new()).unwrap();

    let mut reader = csv::Reader::from_reader(out.as_slice());
    let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
    assert_eq!(rows.len(), 1);
    assert_eq!(&rows[0][0], "abc");
    assert_eq!(&rows[0][1], "{}");
    assert_eq!(&rows[0][2], "False");
    assert_eq!(summary.pii_records, 0);
}

#[test]
fn custom_columns_are_honoured() {
    let input = "id,payload,extra\n7,\"{\"\"ip\"\": \"\"10.0.0.7\"\"}\",x\n";
    let config = InputConfig {
        id_column: "id".to_string(),
        payload_column: "payload".to_string(),
    };
    let reader = RecordReader::from_reader(input.as_bytes(), "mem", &config).unwrap();
    let writer = ResultWriter::from_writer(Vec::new(), "mem").unwrap();
    let (_, out) =
        redact_stream(reader, writer, &RecordRedactor::new(), &PayloadParser::new()).unwrap();

    let mut reader = csv::Reader::from_reader(out.as_slice());
    let row = reader.records().next().unwrap().unwrap();
    assert_eq!(&row[0], "7");
    assert_eq!(&row[1], r#"{"ip": "10.0.0.x"}"#);
    assert_eq!(&row[2], "True");
}

#[test]
fn missing_columns_yield_empty_values() {
    let input = "something_else\nfoo\n";
    let reader = RecordReader::from_reader(input.as_bytes(), "mem", &InputConfig::default()).unwrap();
    let rows: Vec<_> = reader.into_rows().map(Result::unwrap).collect();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].record_id, "");
    assert_eq!(rows[0].payload, "");
}

#[test]
fn missing_input_is_fatal_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("redacted_output.csv");
    let err = run_batch(
        &dir.path().join("does-not-exist.csv"),
        &output,
        &GuardianConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, GuardianError::Io { .. }));
    assert!(!output.exists());
}

#[test]
fn unwritable_output_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.csv");
    std::fs::write(&input, "record_id,data_json\n1,{}\n").unwrap();
    let err = run_batch(
        &input,
        &dir.path().join("missing-dir").join("out.csv"),
        &GuardianConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, GuardianError::Io { .. }));
}

#[test]
fn header_only_input_writes_header_only() {
    let reader =
        RecordReader::from_reader("record_id,data_json\n".as_bytes(), "mem", &InputConfig::default())
            .unwrap();
    let writer = ResultWriter::from_writer(Vec::new(), "mem").unwrap();
    let (summary, out) =
        redact_stream(reader, writer, &RecordRedactor::new(), &PayloadParser::new()).unwrap();
    assert_eq!(summary, RunSummary::default());
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().collect::<Vec<_>>(), vec!["record_id,redacted_data_json,is_pii"]);
}

#[test]
fn numbers_keep_their_source_text() {
    let input = concat!(
        "record_id,data_json\n",
        "n1,\"{\"\"acct\"\": 123456789012345678901234, \"\"g\"\": 1.5e-07, \"\"phone\"\": \"\"9876543210\"\"}\"\n",
    );
    let reader = RecordReader::from_reader(input.as_bytes(), "mem", &InputConfig::default()).unwrap();
    let writer = ResultWriter::from_writer(Vec::new(), "mem").unwrap();
    let (_, out) =
        redact_stream(reader, writer, &RecordRedactor::new(), &PayloadParser::new()).unwrap();

    let mut reader = csv::Reader::from_reader(out.as_slice());
    let row = reader.records().next().unwrap().unwrap();
    assert_eq!(
        &row[1],
        r#"{"acct": 123456789012345678901234, "g": 1.5e-07, "phone": "98XXXXXX10"}"#
    );
    assert_eq!(&row[2], "True");
}

#[test]
fn writer_counts_rows_written() {
    let mut writer = ResultWriter::from_writer(Vec::new(), "mem").unwrap();
    assert_eq!(writer.rows_written(), 0);
    let result = RecordRedactor::new().redact_record(&guardian_core::Record::new(
        "1",
        guardian_core::FieldMap::new(),
    ));
    writer.write_result(&result).unwrap();
    writer.write_result(&result).unwrap();
    assert_eq!(writer.rows_written(), 2);
    let text = String::from_utf8(writer.finish().unwrap()).unwrap();
    assert_eq!(text.lines().count(), 3);
}
