//! CSV batch ingestion.

use std::io;

use crate::error::SentimentError;

/// Required CSV column holding the text to classify.
pub const TEXT_COLUMN: &str = "text";

/// Read batch rows from CSV data.
///
/// The header must contain a column named `text` (matched after trimming
/// surrounding whitespace); other columns are ignored. Each data record
/// yields `Some(text)` or `None` when the cell is absent or blank, so
/// callers see one entry per record and can account for skipped ones.
///
/// Fully blank lines are not CSV records — the parser drops them before
/// they reach us, and they do not count as rows here. A missing cell in
/// a single-column file is an empty quoted field (`""`), not an empty
/// line.
///
/// # Errors
///
/// Returns [`SentimentError::MissingColumn`] (listing the columns that
/// were found) when the `text` column is absent — no partial result is
/// produced — and [`SentimentError::Csv`] on malformed CSV.
pub fn read_text_rows<R: io::Read>(reader: R) -> Result<Vec<Option<String>>, SentimentError> {
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let text_index = headers
        .iter()
        .position(|h| h.trim() == TEXT_COLUMN)
        .ok_or_else(|| SentimentError::MissingColumn {
            found: headers.iter().map(|h| h.trim().to_string()).collect(),
        })?;

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let cell = record
            .get(text_index)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToString::to_string);
        rows.push(cell);
    }

    tracing::debug!(
        rows = rows.len(),
        missing = rows.iter().filter(|r| r.is_none()).count(),
        "parsed CSV batch"
    );

    Ok(rows)
}
