//! Sentiment classification pipeline for sentidash.
//!
//! Scores texts with one of three backends (word-weight lexicon, averaged
//! polarity, or a remote pretrained classifier), maps each signed score to
//! a positive/negative/neutral label with fixed thresholds, and aggregates
//! batch results for display. CSV batches must carry a `text` column.

pub mod classifier;
pub mod error;
pub mod ingest;
pub mod lexicon;
pub mod pipeline;
pub mod polarity;
pub mod scorer;
pub mod types;

mod tokens;

pub use classifier::ClassifierClient;
pub use error::SentimentError;
pub use ingest::{read_text_rows, TEXT_COLUMN};
pub use lexicon::{LexiconBreakdown, LexiconScorer};
pub use pipeline::{aggregate_counts, classify_batch, classify_one, Classification};
pub use polarity::PolarityScorer;
pub use scorer::{Scorer, ScorerSet};
pub use types::{BatchReport, RowFailure, ScoredText};
