//! Sentiment pipeline for TrendTrackr.
//!
//! Scores batches of short texts (headlines, reviews, vendor names) with a
//! fixed rule-based lexicon, labels each as Positive/Negative/Neutral, and
//! aggregates per-batch statistics for display. Batches come from a
//! [`sources::TextSource`]; saved upstream API payloads can be read through
//! [`sources::PayloadSource`] and optionally memoised with
//! [`sources::CachedSource`].

pub mod aggregate;
pub mod classifier;
pub mod error;
pub mod lexicon;
pub mod pipeline;
pub mod scorer;
pub mod sources;
pub mod timestamp;
pub mod types;

pub use aggregate::{histogram, summarize};
pub use classifier::classify;
pub use error::{FetchError, SentimentError};
pub use lexicon::Lexicon;
pub use pipeline::{run, run_source, run_with};
pub use scorer::{polarity_scores, score, SentimentAnalyzer};
pub use types::{
    BatchSummary, DailyMean, HistogramBin, Label, LabelCounts, PolarityScores, ScoredBatch,
    ScoredItem, TextItem,
};
