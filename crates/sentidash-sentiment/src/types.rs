use sentidash_core::SentimentLabel;
use serde::Serialize;

/// One scored batch row: the original text, its signed score, and the label.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredText {
    /// Zero-based index of the row in the uploaded input, counting every
    /// input row (including ones that were later skipped or failed).
    pub row: usize,
    pub text: String,
    pub score: f32,
    pub label: SentimentLabel,
}

/// A batch row the scorer could not handle. The row is surfaced here
/// instead of aborting the whole batch.
#[derive(Debug, Clone, Serialize)]
pub struct RowFailure {
    pub row: usize,
    pub reason: String,
}

/// Result of classifying one batch, order-preserving with the input.
///
/// `rows` holds only successfully scored rows; rows with missing text are
/// counted in `skipped_missing` and rows the scorer rejected land in
/// `failures`. The caller owns the report and may aggregate it further.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub rows: Vec<ScoredText>,
    pub failures: Vec<RowFailure>,
    pub skipped_missing: usize,
}

impl BatchReport {
    /// Total number of input rows this report accounts for.
    #[must_use]
    pub fn input_rows(&self) -> usize {
        self.rows.len() + self.failures.len() + self.skipped_missing
    }
}
