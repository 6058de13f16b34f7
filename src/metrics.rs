//! Metric derivation from alignment counts.
//!
//! Formulas (word-level counts H/S/D/I over reference length N, plus a
//! character-level alignment for CER):
//!
//! - WER = (S + D + I) / N
//! - MER = (S + D + I) / (S + D + I + H)
//! - WIL = 1 - (H / N) * (H / (H + S + I))
//! - WIP = 1 - WIL
//! - CER = (S_c + D_c + I_c) / N_c
//!
//! An empty reference leaves the denominators undefined; such a pair is
//! reported as failed instead of being mapped to a sentinel number. An
//! empty hypothesis is not degenerate: H is 0, so the WIL hypothesis
//! fraction is taken as 0 and WIL is exactly 1.

use crate::align::align;
use crate::model::{AlignmentCounts, MetricFailure, MetricRecord, MetricScores, TranscriptPair};
use crate::tokenize;

/// Derive the five metrics from one word-level and one character-level
/// alignment of the same pair.
pub fn derive_scores(
    word: AlignmentCounts,
    chars: AlignmentCounts,
) -> Result<MetricScores, MetricFailure> {
    let n = word.reference_len();
    if n == 0 {
        return Err(MetricFailure::EmptyReference);
    }
    let n_chars = chars.reference_len();
    if n_chars == 0 {
        return Err(MetricFailure::EmptyReferenceChars);
    }

    let hits = word.hits as f64;
    let edits = word.edit_ops() as f64;
    let wer = edits / n as f64;
    // MER's denominator is the alignment path length, at least N > 0.
    let mer = edits / (edits + hits);

    let hypothesis_len = word.hypothesis_len();
    let hyp_fraction = if hypothesis_len == 0 {
        0.0
    } else {
        hits / hypothesis_len as f64
    };
    let wip = (hits / n as f64) * hyp_fraction;
    let wil = 1.0 - wip;

    let cer = chars.edit_ops() as f64 / n_chars as f64;

    Ok(MetricScores {
        wer,
        mer,
        wil,
        wip,
        cer,
    })
}

/// Score one reference/hypothesis text pair: tokenize, align at word and
/// character granularity, and derive the metrics.
pub fn score_texts(reference: &str, hypothesis: &str) -> Result<MetricScores, MetricFailure> {
    let word_counts = word_alignment(reference, hypothesis);
    let char_counts = char_alignment(reference, hypothesis);
    derive_scores(word_counts, char_counts)
}

/// Word-level alignment of two raw texts.
#[must_use]
pub fn word_alignment(reference: &str, hypothesis: &str) -> AlignmentCounts {
    align(&tokenize::words(reference), &tokenize::words(hypothesis))
}

/// Character-level alignment of two raw texts (whitespace discarded).
#[must_use]
pub fn char_alignment(reference: &str, hypothesis: &str) -> AlignmentCounts {
    align(&tokenize::chars(reference), &tokenize::chars(hypothesis))
}

/// Score a [`TranscriptPair`] into a [`MetricRecord`], flagging degenerate
/// input on the record rather than failing.
#[must_use]
pub fn score_pair(pair: &TranscriptPair) -> MetricRecord {
    match score_texts(&pair.reference, &pair.hypothesis) {
        Ok(scores) => MetricRecord::scored(pair.id.clone(), scores),
        Err(failure) => {
            tracing::debug!(id = %pair.id, failure = failure.as_str(), "pair not scorable");
            MetricRecord::failed(pair.id.clone(), failure)
        }
    }
}
