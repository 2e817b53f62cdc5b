//! Classification pipeline: score, label, aggregate.

use std::collections::BTreeMap;

use sentidash_core::{label_for_score, SentimentLabel};

use crate::error::SentimentError;
use crate::scorer::Scorer;
use crate::types::{BatchReport, RowFailure, ScoredText};

/// Score and label for one classified text.
#[derive(Debug, Clone, Copy)]
pub struct Classification {
    pub score: f32,
    pub label: SentimentLabel,
}

/// Classify a single text with the given scorer.
///
/// Blank or whitespace-only input is rejected before any scorer runs.
///
/// # Errors
///
/// Returns [`SentimentError::EmptyInput`] for blank input, or any error
/// the scorer backend raises.
pub async fn classify_one(text: &str, scorer: &Scorer) -> Result<Classification, SentimentError> {
    if text.trim().is_empty() {
        return Err(SentimentError::EmptyInput);
    }

    let score = scorer.score_one(text).await?;
    Ok(Classification {
        score,
        label: label_for_score(score),
    })
}

/// Classify a batch of rows, preserving input order among scored rows.
///
/// Rows with missing or blank text are dropped (counted in
/// `skipped_missing`, never padded or scored). A per-row scorer failure
/// lands in `failures` instead of aborting the batch.
pub async fn classify_batch(rows: &[Option<String>], scorer: &Scorer) -> BatchReport {
    let mut present: Vec<(usize, &str)> = Vec::with_capacity(rows.len());
    for (row, cell) in rows.iter().enumerate() {
        match cell {
            Some(text) if !text.trim().is_empty() => present.push((row, text.as_str())),
            _ => {}
        }
    }
    let skipped_missing = rows.len() - present.len();

    let texts: Vec<&str> = present.iter().map(|(_, text)| *text).collect();
    let results = scorer.score_batch(&texts).await;

    let mut scored = Vec::with_capacity(present.len());
    let mut failures = Vec::new();

    for ((row, text), result) in present.into_iter().zip(results) {
        match result {
            Ok(score) => scored.push(ScoredText {
                row,
                text: text.to_string(),
                score,
                label: label_for_score(score),
            }),
            Err(e) => failures.push(RowFailure {
                row,
                reason: e.to_string(),
            }),
        }
    }

    if !failures.is_empty() {
        tracing::warn!(
            backend = %scorer.kind(),
            failed = failures.len(),
            scored = scored.len(),
            "some batch rows could not be scored"
        );
    }

    BatchReport {
        rows: scored,
        failures,
        skipped_missing,
    }
}

/// Tally labels across scored rows for summary display.
///
/// Labels with zero occurrences are absent from the map; zero-filling is
/// a presentation concern.
#[must_use]
pub fn aggregate_counts(rows: &[ScoredText]) -> BTreeMap<SentimentLabel, usize> {
    let mut counts = BTreeMap::new();
    for scored in rows {
        *counts.entry(scored.label).or_insert(0) += 1;
    }
    counts
}
