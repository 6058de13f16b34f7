//! End-to-end tests: CSV in, metric report out.

#![forbid(unsafe_code)]

use std::fs;

use tempfile::tempdir;

use asr_scorecard::batch::{compute_metrics, summarize};
use asr_scorecard::ingest::{ColumnSpec, read_pairs};
use asr_scorecard::model::ReportFormat;
use asr_scorecard::report;

fn write_fixture(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

#[test]
fn csv_file_to_csv_report() {
    let dir = tempdir().expect("tempdir");
    let input = write_fixture(
        &dir,
        "pairs.csv",
        "audio_file,reference,hypothesis\n\
         call-01.wav,the cat sat on the mat,the cat sit on mat\n\
         call-02.wav,hello world,hello world\n",
    );

    let pairs = read_pairs(&input, &ColumnSpec::default()).expect("ingest");
    let records = compute_metrics(&pairs);
    let csv = report::render(&records, ReportFormat::Csv).expect("render");

    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "audio_file,wer,mer,wil,wip,cer,error");
    assert!(lines[1].starts_with("call-01.wav,0.333333,0.333333,0.466667,0.533333,"));
    assert!(lines[2].starts_with("call-02.wav,0.000000,0.000000,0.000000,1.000000,0.000000,"));
}

#[test]
fn spreadsheet_style_column_names_are_supported() {
    let dir = tempdir().expect("tempdir");
    let input = write_fixture(
        &dir,
        "upload.csv",
        "Audio File,Actual Transcript,ASR Transcript\n\
         sample.wav,\"good morning, team\",good morning team\n",
    );
    let columns = ColumnSpec {
        id: "Audio File".to_owned(),
        reference: "Actual Transcript".to_owned(),
        hypothesis: "ASR Transcript".to_owned(),
    };

    let pairs = read_pairs(&input, &columns).expect("ingest");
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].reference, "good morning, team");

    let records = compute_metrics(&pairs);
    let scores = records[0].scores.expect("scored");
    // "morning," vs "morning" is a word substitution but only a one-comma
    // character difference.
    assert!(scores.wer > 0.0);
    assert!(scores.cer > 0.0 && scores.cer < scores.wer);
}

#[test]
fn degenerate_row_is_flagged_in_report_not_dropped() {
    let dir = tempdir().expect("tempdir");
    let input = write_fixture(
        &dir,
        "pairs.csv",
        "audio_file,reference,hypothesis\n\
         ok.wav,all good here,all good here\n\
         empty.wav,,model invented this\n",
    );

    let pairs = read_pairs(&input, &ColumnSpec::default()).expect("ingest");
    let records = compute_metrics(&pairs);
    assert_eq!(records.len(), 2);

    let csv = report::render(&records, ReportFormat::Csv).expect("render");
    assert!(csv.contains("empty.wav,,,,,,empty_reference"), "got: {csv}");

    let summary = summarize(&records);
    assert_eq!(summary.total_pairs, 2);
    assert_eq!(summary.scored_pairs, 1);
    assert_eq!(summary.failed_pairs, 1);
}

#[test]
fn missing_column_fails_ingest_with_named_column() {
    let dir = tempdir().expect("tempdir");
    let input = write_fixture(
        &dir,
        "pairs.csv",
        "audio_file,reference\nonly-two.wav,columns here\n",
    );

    let error = read_pairs(&input, &ColumnSpec::default()).unwrap_err();
    assert_eq!(error.error_code(), "SC-MISSING-COLUMN");
    assert!(error.to_string().contains("hypothesis"));
}

#[test]
fn json_report_round_trips_and_summary_has_means() {
    let dir = tempdir().expect("tempdir");
    let input = write_fixture(
        &dir,
        "pairs.csv",
        "audio_file,reference,hypothesis\n\
         a.wav,one two three four,one two three four\n\
         b.wav,one two three four,one two three off\n",
    );

    let pairs = read_pairs(&input, &ColumnSpec::default()).expect("ingest");
    let records = compute_metrics(&pairs);

    let json = report::render(&records, ReportFormat::Json).expect("render");
    let parsed: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(parsed.as_array().map(Vec::len), Some(2));

    let summary = summarize(&records);
    let mean = summary.mean.expect("scored records present");
    assert!((mean.wer - 0.125).abs() < 1e-9, "mean wer: {}", mean.wer);
    let text = report::render_summary(&summary);
    assert!(text.contains("pairs scored: 2 of 2"));
    assert!(text.contains("mean wer: 0.125000"));
}

#[test]
fn nonexistent_input_file_is_an_io_error() {
    let dir = tempdir().expect("tempdir");
    let missing = dir.path().join("does-not-exist.csv");
    let error = read_pairs(&missing, &ColumnSpec::default()).unwrap_err();
    assert_eq!(error.error_code(), "SC-IO");
}
