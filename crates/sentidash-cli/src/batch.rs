//! CSV batch analysis command handler.

use std::fs::File;
use std::path::Path;

use sentidash_core::ScorerKind;
use sentidash_sentiment::{aggregate_counts, classify_batch, read_text_rows, BatchReport, ScorerSet};

/// Number of scored rows echoed back as a preview.
const PREVIEW_ROWS: usize = 5;

/// Classify every row of a CSV file and print a summary.
///
/// # Errors
///
/// Returns an error if the file cannot be opened, the CSV lacks a `text`
/// column, or the selected backend is not configured. Per-row scorer
/// failures are reported in the summary, not raised.
pub(crate) async fn run_batch(
    scorers: &ScorerSet,
    file: &Path,
    model: ScorerKind,
) -> anyhow::Result<()> {
    let scorer = scorers.get(model)?;

    let reader = File::open(file)
        .map_err(|e| anyhow::anyhow!("cannot open {}: {e}", file.display()))?;
    let rows = read_text_rows(reader)?;

    if rows.is_empty() {
        println!("{} has a text column but no data rows", file.display());
        return Ok(());
    }

    let report = classify_batch(&rows, scorer).await;
    print_report(&report, model);

    Ok(())
}

fn print_report(report: &BatchReport, model: ScorerKind) {
    println!(
        "scored {} of {} rows with the {model} backend",
        report.rows.len(),
        report.input_rows()
    );

    if !report.rows.is_empty() {
        println!();
        println!("{:<6}{:<10}{:<11}TEXT", "ROW", "SCORE", "SENTIMENT");
        for scored in report.rows.iter().take(PREVIEW_ROWS) {
            println!(
                "{:<6}{:<+10.4}{:<11}{}",
                scored.row,
                scored.score,
                scored.label.to_string(),
                truncate(&scored.text, 60)
            );
        }
        if report.rows.len() > PREVIEW_ROWS {
            println!("... {} more rows", report.rows.len() - PREVIEW_ROWS);
        }
    }

    println!();
    println!("sentiment counts:");
    for (label, count) in aggregate_counts(&report.rows) {
        println!("  {label}: {count}");
    }

    if report.skipped_missing > 0 {
        println!("skipped {} rows with missing text", report.skipped_missing);
    }
    if !report.failures.is_empty() {
        println!("{} rows failed to score:", report.failures.len());
        for failure in &report.failures {
            println!("  row {}: {}", failure.row, failure.reason);
        }
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let head: String = text.chars().take(max_chars).collect();
    format!("{head}...")
}
