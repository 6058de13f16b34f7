use clap::ValueEnum;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// TranscriptPair
// ---------------------------------------------------------------------------

/// One comparison unit: a reference transcript and the ASR hypothesis
/// produced for the same audio sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptPair {
    /// Identifier of the sample (typically the audio file name).
    pub id: String,
    /// Ground-truth transcript.
    pub reference: String,
    /// Machine-generated transcript.
    pub hypothesis: String,
}

impl TranscriptPair {
    #[must_use]
    pub fn new(id: impl Into<String>, reference: impl Into<String>, hypothesis: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            reference: reference.into(),
            hypothesis: hypothesis.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// AlignmentCounts
// ---------------------------------------------------------------------------

/// Summary of a minimum-edit-distance alignment between a reference and a
/// hypothesis token sequence.
///
/// Invariants: `hits + substitutions + deletions` equals the reference
/// length and `hits + substitutions + insertions` equals the hypothesis
/// length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AlignmentCounts {
    pub hits: usize,
    pub substitutions: usize,
    pub deletions: usize,
    pub insertions: usize,
}

impl AlignmentCounts {
    /// Length of the reference token sequence (N).
    #[must_use]
    pub const fn reference_len(self) -> usize {
        self.hits + self.substitutions + self.deletions
    }

    /// Length of the hypothesis token sequence (M).
    #[must_use]
    pub const fn hypothesis_len(self) -> usize {
        self.hits + self.substitutions + self.insertions
    }

    /// Total number of edit operations (S + D + I) along the optimal path.
    #[must_use]
    pub const fn edit_ops(self) -> usize {
        self.substitutions + self.deletions + self.insertions
    }
}

// ---------------------------------------------------------------------------
// MetricScores / MetricFailure / MetricRecord
// ---------------------------------------------------------------------------

/// The five scalar metrics for one transcript pair.
///
/// `wer`, `mer`, `wil` and `cer` live in `[0, +inf)` (WER and CER can exceed
/// 1.0 when insertions dominate); `wip == 1.0 - wil`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricScores {
    pub wer: f64,
    pub mer: f64,
    pub wil: f64,
    pub wip: f64,
    pub cer: f64,
}

/// Why a pair could not be scored.
///
/// A degenerate pair is flagged, never mapped to a sentinel number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricFailure {
    /// The reference tokenized to zero words, leaving every word-level
    /// denominator undefined.
    EmptyReference,
    /// The reference contained words but zero non-whitespace characters,
    /// leaving the CER denominator undefined.
    EmptyReferenceChars,
}

impl MetricFailure {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EmptyReference => "empty_reference",
            Self::EmptyReferenceChars => "empty_reference_chars",
        }
    }

    #[must_use]
    pub const fn detail(self) -> &'static str {
        match self {
            Self::EmptyReference => "reference is empty after word tokenization",
            Self::EmptyReferenceChars => "reference has no non-whitespace characters",
        }
    }
}

impl std::fmt::Display for MetricFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.detail())
    }
}

/// Scoring outcome for one pair. Exactly one of `scores` / `error` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    pub id: String,
    pub scores: Option<MetricScores>,
    pub error: Option<MetricFailure>,
}

impl MetricRecord {
    #[must_use]
    pub fn scored(id: String, scores: MetricScores) -> Self {
        Self {
            id,
            scores: Some(scores),
            error: None,
        }
    }

    #[must_use]
    pub fn failed(id: String, failure: MetricFailure) -> Self {
        Self {
            id,
            scores: None,
            error: Some(failure),
        }
    }

    #[must_use]
    pub const fn is_scored(&self) -> bool {
        self.scores.is_some()
    }
}

// ---------------------------------------------------------------------------
// Batch summary
// ---------------------------------------------------------------------------

/// One bucket of the WER distribution. `lower` is inclusive; `upper` is
/// exclusive except for the last bucket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Aggregate view over a scored batch: per-metric arithmetic means and the
/// WER distribution across all scored pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total_pairs: usize,
    pub scored_pairs: usize,
    pub failed_pairs: usize,
    /// Mean of each metric over the scored pairs; `None` when nothing scored.
    pub mean: Option<MetricScores>,
    pub wer_histogram: Vec<HistogramBin>,
}

// ---------------------------------------------------------------------------
// ReportFormat
// ---------------------------------------------------------------------------

/// Output rendering for the `score` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    Table,
    Csv,
    Json,
    Ndjson,
}
