//! CSV ingestion of transcript pairs.
//!
//! Accepts the RFC 4180 subset that spreadsheet exports actually produce:
//! a header row, comma-separated fields, optional CRLF line endings, and
//! double-quoted fields with `""` escapes that may contain commas and
//! newlines. Column names are matched case-insensitively and can be
//! remapped by the caller.

use std::path::Path;

use crate::error::{ScError, ScResult};
use crate::model::TranscriptPair;

/// Names of the three required columns in the input header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    pub id: String,
    pub reference: String,
    pub hypothesis: String,
}

impl Default for ColumnSpec {
    fn default() -> Self {
        Self {
            id: "audio_file".to_owned(),
            reference: "reference".to_owned(),
            hypothesis: "hypothesis".to_owned(),
        }
    }
}

/// Read and parse a CSV file into transcript pairs.
pub fn read_pairs(path: &Path, columns: &ColumnSpec) -> ScResult<Vec<TranscriptPair>> {
    let raw = std::fs::read_to_string(path)?;
    parse_pairs(&raw, columns)
}

/// Parse CSV text into transcript pairs.
///
/// The first record is the header; each following record must cover the
/// three required columns. Blank lines are skipped.
pub fn parse_pairs(raw: &str, columns: &ColumnSpec) -> ScResult<Vec<TranscriptPair>> {
    let mut records = parse_csv(raw)?.into_iter();

    let (_, header) = records
        .next()
        .ok_or_else(|| ScError::InvalidRequest("input contains no header row".to_owned()))?;

    let column_index = |name: &str| -> ScResult<usize> {
        header
            .iter()
            .position(|field| field.trim().eq_ignore_ascii_case(name))
            .ok_or_else(|| ScError::MissingColumn {
                column: name.to_owned(),
            })
    };
    let id_index = column_index(&columns.id)?;
    let reference_index = column_index(&columns.reference)?;
    let hypothesis_index = column_index(&columns.hypothesis)?;
    let required_width = id_index.max(reference_index).max(hypothesis_index) + 1;

    let mut pairs = Vec::new();
    for (line, fields) in records {
        if fields.len() < required_width {
            return Err(ScError::MalformedPair {
                line,
                detail: format!(
                    "row has {} fields, expected at least {required_width}",
                    fields.len()
                ),
            });
        }
        pairs.push(TranscriptPair::new(
            fields[id_index].clone(),
            fields[reference_index].clone(),
            fields[hypothesis_index].clone(),
        ));
    }

    tracing::debug!(pairs = pairs.len(), "parsed transcript pairs");
    Ok(pairs)
}

/// Parse CSV text into `(1-based starting line, fields)` records.
fn parse_csv(raw: &str) -> ScResult<Vec<(usize, Vec<String>)>> {
    let mut records: Vec<(usize, Vec<String>)> = Vec::new();
    let mut fields: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut line = 1usize;
    let mut record_line = 1usize;
    // Distinguishes an empty line (skipped) from a record whose first
    // field happens to be empty (kept).
    let mut record_has_content = false;

    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' => {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                }
                '\n' => {
                    line += 1;
                    field.push('\n');
                }
                _ => field.push(c),
            }
            continue;
        }

        match c {
            '"' => {
                in_quotes = true;
                record_has_content = true;
            }
            ',' => {
                fields.push(std::mem::take(&mut field));
                record_has_content = true;
            }
            '\r' | '\n' => {
                if c == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                line += 1;
                if record_has_content || !field.is_empty() {
                    fields.push(std::mem::take(&mut field));
                    records.push((record_line, std::mem::take(&mut fields)));
                }
                record_has_content = false;
                record_line = line;
            }
            _ => {
                field.push(c);
                record_has_content = true;
            }
        }
    }

    if in_quotes {
        return Err(ScError::Csv {
            line: record_line,
            detail: "unterminated quoted field".to_owned(),
        });
    }
    if record_has_content || !field.is_empty() {
        fields.push(field);
        records.push((record_line, fields));
    }

    Ok(records)
}
