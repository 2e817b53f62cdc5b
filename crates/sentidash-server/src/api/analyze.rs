use std::collections::BTreeMap;

use axum::{
    body::Bytes,
    extract::{Query, State},
    Extension, Json,
};
use sentidash_core::{ScorerKind, SentimentLabel};
use sentidash_sentiment::{
    aggregate_counts, classify_batch, classify_one, read_text_rows, LexiconBreakdown,
    LexiconScorer, RowFailure, ScoredText,
};
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{map_sentiment_error, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct AnalyzeRequest {
    pub text: String,
    #[serde(default = "default_model")]
    pub model: ScorerKind,
}

#[derive(Debug, Serialize)]
pub(super) struct AnalyzeData {
    pub model: ScorerKind,
    pub score: f32,
    pub label: SentimentLabel,
    /// Token-proportion breakdown, present for the lexicon backend only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<LexiconBreakdown>,
}

#[derive(Debug, Deserialize)]
pub(super) struct BatchQuery {
    #[serde(default = "default_model")]
    pub model: ScorerKind,
}

#[derive(Debug, Serialize)]
pub(super) struct BatchData {
    pub model: ScorerKind,
    pub rows: Vec<ScoredText>,
    pub counts: BTreeMap<SentimentLabel, usize>,
    pub skipped_missing: usize,
    pub failures: Vec<RowFailure>,
}

fn default_model() -> ScorerKind {
    ScorerKind::Lexicon
}

pub(super) async fn analyze_text(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<ApiResponse<AnalyzeData>>, ApiError> {
    let scorer = state
        .scorers
        .get(request.model)
        .map_err(|e| map_sentiment_error(req_id.0.clone(), &e))?;

    let result = classify_one(&request.text, scorer)
        .await
        .map_err(|e| map_sentiment_error(req_id.0.clone(), &e))?;

    let breakdown = (request.model == ScorerKind::Lexicon)
        .then(|| LexiconScorer::new().breakdown(&request.text));

    Ok(Json(ApiResponse {
        data: AnalyzeData {
            model: request.model,
            score: result.score,
            label: result.label,
            breakdown,
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}

/// Batch analysis over a raw CSV request body with a `text` column.
pub(super) async fn analyze_batch(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<BatchQuery>,
    body: Bytes,
) -> Result<Json<ApiResponse<BatchData>>, ApiError> {
    let scorer = state
        .scorers
        .get(query.model)
        .map_err(|e| map_sentiment_error(req_id.0.clone(), &e))?;

    let rows = read_text_rows(body.as_ref())
        .map_err(|e| map_sentiment_error(req_id.0.clone(), &e))?;

    let report = classify_batch(&rows, scorer).await;
    let counts = aggregate_counts(&report.rows);

    Ok(Json(ApiResponse {
        data: BatchData {
            model: query.model,
            rows: report.rows,
            counts,
            skipped_missing: report.skipped_missing,
            failures: report.failures,
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}
