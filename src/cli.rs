use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::ingest::ColumnSpec;
use crate::model::ReportFormat;

#[derive(Debug, Parser)]
#[command(name = "asr_scorecard")]
#[command(about = "Alignment-based transcription quality metrics for ASR batches")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Score a CSV of transcript pairs and emit a per-pair metric report.
    Score(ScoreArgs),
    /// Align a single reference/hypothesis pair and print counts + metrics.
    Align(AlignArgs),
}

#[derive(Debug, Clone, Args)]
pub struct ScoreArgs {
    /// Path to input CSV holding id, reference and hypothesis columns.
    #[arg(long)]
    pub input: PathBuf,

    /// Report format.
    #[arg(long, value_enum, default_value_t = ReportFormat::Table)]
    pub format: ReportFormat,

    /// Write the report to this file instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Header name of the identifier column.
    #[arg(long, default_value = "audio_file")]
    pub id_column: String,

    /// Header name of the reference-transcript column.
    #[arg(long, default_value = "reference")]
    pub reference_column: String,

    /// Header name of the hypothesis-transcript column.
    #[arg(long, default_value = "hypothesis")]
    pub hypothesis_column: String,

    /// Abort the whole batch on the first degenerate pair instead of
    /// flagging it and continuing.
    #[arg(long)]
    pub fail_fast: bool,

    /// Append per-metric means and a WER histogram to the report.
    #[arg(long)]
    pub summary: bool,
}

impl ScoreArgs {
    #[must_use]
    pub fn column_spec(&self) -> ColumnSpec {
        ColumnSpec {
            id: self.id_column.clone(),
            reference: self.reference_column.clone(),
            hypothesis: self.hypothesis_column.clone(),
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct AlignArgs {
    /// Reference transcript text.
    #[arg(long)]
    pub reference: String,

    /// Hypothesis transcript text.
    #[arg(long)]
    pub hypothesis: String,

    /// Emit machine-readable JSON instead of text.
    #[arg(long)]
    pub json: bool,
}
