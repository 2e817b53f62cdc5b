use sentidash_core::ScorerKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SentimentError {
    /// Batch input lacks the required `text` column. Carries the column
    /// names that were found so the user can spot the mismatch.
    #[error("CSV input has no 'text' column (found: {})", found.join(", "))]
    MissingColumn { found: Vec<String> },

    #[error("input text is empty or whitespace-only")]
    EmptyInput,

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote classifier returned a bad status, an unexpected shape,
    /// or a label outside the POSITIVE/NEGATIVE contract.
    #[error("classifier error: {0}")]
    Classifier(String),

    #[error("scorer backend '{0}' is not configured")]
    BackendUnavailable(ScorerKind),
}
