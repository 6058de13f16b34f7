#![forbid(unsafe_code)]

pub mod align;
pub mod batch;
pub mod cli;
pub mod error;
pub mod ingest;
pub mod logging;
pub mod metrics;
pub mod model;
pub mod report;
pub mod tokenize;

pub use align::align;
pub use batch::{compute_metrics, compute_metrics_strict, summarize};
pub use error::{ScError, ScResult};
pub use model::{AlignmentCounts, BatchSummary, MetricRecord, MetricScores, TranscriptPair};
