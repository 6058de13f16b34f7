//! Rendering of metric records and batch summaries.
//!
//! Four machine- and human-oriented formats: an aligned text table, CSV
//! with the header `audio_file,wer,mer,wil,wip,cer,error`, pretty JSON,
//! and NDJSON (one record per line). Failed pairs always surface their
//! error marker; metric cells for them stay empty.

use crate::error::ScResult;
use crate::model::{BatchSummary, MetricRecord, ReportFormat};

/// CSV/table header for per-pair records.
pub const REPORT_HEADER: [&str; 7] = ["audio_file", "wer", "mer", "wil", "wip", "cer", "error"];

/// Render `records` in the requested format.
pub fn render(records: &[MetricRecord], format: ReportFormat) -> ScResult<String> {
    match format {
        ReportFormat::Table => Ok(render_table(records)),
        ReportFormat::Csv => Ok(render_csv(records)),
        ReportFormat::Json => Ok(format!(
            "{}\n",
            serde_json::to_string_pretty(records)?
        )),
        ReportFormat::Ndjson => {
            let mut out = String::new();
            for record in records {
                out.push_str(&serde_json::to_string(record)?);
                out.push('\n');
            }
            Ok(out)
        }
    }
}

/// Aligned text table, one row per record.
#[must_use]
pub fn render_table(records: &[MetricRecord]) -> String {
    let rows: Vec<[String; 7]> = records.iter().map(record_cells).collect();

    let mut widths: Vec<usize> = REPORT_HEADER.iter().map(|h| h.len()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    let format_row = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(widths.iter().copied())
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_owned()
    };

    let header: Vec<String> = REPORT_HEADER.iter().map(|h| (*h).to_owned()).collect();
    out.push_str(&format_row(&header));
    out.push('\n');
    for row in &rows {
        out.push_str(&format_row(row));
        out.push('\n');
    }
    out
}

/// CSV export with one row per record; empty metric cells for failed pairs.
#[must_use]
pub fn render_csv(records: &[MetricRecord]) -> String {
    let mut out = String::new();
    out.push_str(&REPORT_HEADER.join(","));
    out.push('\n');
    for record in records {
        let cells = record_cells(record);
        let row: Vec<String> = cells.iter().map(|cell| csv_field(cell)).collect();
        out.push_str(&row.join(","));
        out.push('\n');
    }
    out
}

/// Human-readable summary block: counts, per-metric means, and the WER
/// histogram.
#[must_use]
pub fn render_summary(summary: &BatchSummary) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "pairs scored: {} of {} ({} failed)\n",
        summary.scored_pairs, summary.total_pairs, summary.failed_pairs
    ));

    match &summary.mean {
        Some(mean) => {
            out.push_str(&format!("mean wer: {}\n", format_score(mean.wer)));
            out.push_str(&format!("mean mer: {}\n", format_score(mean.mer)));
            out.push_str(&format!("mean wil: {}\n", format_score(mean.wil)));
            out.push_str(&format!("mean wip: {}\n", format_score(mean.wip)));
            out.push_str(&format!("mean cer: {}\n", format_score(mean.cer)));
        }
        None => out.push_str("no scored pairs; means unavailable\n"),
    }

    if !summary.wer_histogram.is_empty() {
        out.push_str("wer distribution:\n");
        for bin in &summary.wer_histogram {
            out.push_str(&format!(
                "  [{:.2}, {:.2})  {}\n",
                bin.lower, bin.upper, bin.count
            ));
        }
    }
    out
}

fn record_cells(record: &MetricRecord) -> [String; 7] {
    match record.scores {
        Some(scores) => [
            record.id.clone(),
            format_score(scores.wer),
            format_score(scores.mer),
            format_score(scores.wil),
            format_score(scores.wip),
            format_score(scores.cer),
            String::new(),
        ],
        None => [
            record.id.clone(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            record
                .error
                .map_or_else(String::new, |f| f.as_str().to_owned()),
        ],
    }
}

fn format_score(value: f64) -> String {
    format!("{value:.6}")
}

/// Quote a CSV field when it contains a delimiter, quote, or newline.
#[must_use]
pub fn csv_field(raw: &str) -> String {
    if raw.contains(',') || raw.contains('"') || raw.contains('\n') || raw.contains('\r') {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_owned()
    }
}
