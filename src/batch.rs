//! Batch driver: apply the tokenize -> align -> derive pipeline to every
//! pair in input order, and aggregate the results.
//!
//! Each pair is independent, so the driver is a plain order-preserving map;
//! a data-parallel map over the same records would produce identical
//! output.

use crate::error::{ScError, ScResult};
use crate::metrics::score_pair;
use crate::model::{BatchSummary, HistogramBin, MetricRecord, MetricScores, TranscriptPair};

/// Number of buckets in the WER distribution histogram.
pub const WER_HISTOGRAM_BINS: usize = 10;

/// Score every pair, flagging degenerate input on the affected record and
/// continuing with the rest of the batch.
///
/// The output has the same length and order as `pairs`.
#[must_use]
pub fn compute_metrics(pairs: &[TranscriptPair]) -> Vec<MetricRecord> {
    let records: Vec<MetricRecord> = pairs.iter().map(score_pair).collect();
    let failed = records.iter().filter(|r| !r.is_scored()).count();
    tracing::info!(
        pairs = pairs.len(),
        failed,
        "scored transcript batch"
    );
    records
}

/// Score every pair, aborting on the first degenerate one.
///
/// The strict counterpart of [`compute_metrics`] for callers that treat a
/// single bad row as a batch-level failure.
pub fn compute_metrics_strict(pairs: &[TranscriptPair]) -> ScResult<Vec<MetricRecord>> {
    pairs
        .iter()
        .map(|pair| {
            let record = score_pair(pair);
            match record.error {
                Some(failure) => Err(ScError::DegenerateInput {
                    id: pair.id.clone(),
                    detail: failure.detail().to_owned(),
                }),
                None => Ok(record),
            }
        })
        .collect()
}

/// Aggregate a scored batch: per-metric means over the scored records plus
/// a [`WER_HISTOGRAM_BINS`]-bucket histogram of the WER distribution.
///
/// The histogram spans `[0, max(1, max observed WER)]` so typical scores
/// land in tenth-wide buckets; the last bucket is upper-inclusive.
#[must_use]
pub fn summarize(records: &[MetricRecord]) -> BatchSummary {
    let scored: Vec<MetricScores> = records.iter().filter_map(|r| r.scores).collect();
    let failed_pairs = records.len() - scored.len();

    let mean = if scored.is_empty() {
        None
    } else {
        let len = scored.len() as f64;
        Some(MetricScores {
            wer: scored.iter().map(|s| s.wer).sum::<f64>() / len,
            mer: scored.iter().map(|s| s.mer).sum::<f64>() / len,
            wil: scored.iter().map(|s| s.wil).sum::<f64>() / len,
            wip: scored.iter().map(|s| s.wip).sum::<f64>() / len,
            cer: scored.iter().map(|s| s.cer).sum::<f64>() / len,
        })
    };

    BatchSummary {
        total_pairs: records.len(),
        scored_pairs: scored.len(),
        failed_pairs,
        mean,
        wer_histogram: wer_histogram(&scored),
    }
}

fn wer_histogram(scored: &[MetricScores]) -> Vec<HistogramBin> {
    if scored.is_empty() {
        return Vec::new();
    }

    let max_wer = scored.iter().map(|s| s.wer).fold(0.0_f64, f64::max);
    let span = max_wer.max(1.0);
    let bin_width = span / WER_HISTOGRAM_BINS as f64;

    let mut bins: Vec<HistogramBin> = (0..WER_HISTOGRAM_BINS)
        .map(|i| HistogramBin {
            lower: bin_width * i as f64,
            upper: bin_width * (i + 1) as f64,
            count: 0,
        })
        .collect();

    for scores in scored {
        let mut index = (scores.wer / bin_width) as usize;
        if index >= WER_HISTOGRAM_BINS {
            index = WER_HISTOGRAM_BINS - 1;
        }
        bins[index].count += 1;
    }

    bins
}
