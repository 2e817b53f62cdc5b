mod analyze;

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use sentidash_core::ScorerKind;
use sentidash_sentiment::{ScorerSet, SentimentError};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use crate::middleware::{request_id, RequestId};

#[derive(Clone)]
pub struct AppState {
    pub scorers: Arc<ScorerSet>,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
struct HealthData {
    status: &'static str,
    backends: Vec<BackendStatus>,
}

#[derive(Debug, Serialize)]
struct BackendStatus {
    name: ScorerKind,
    available: bool,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "bad_request" | "validation_error" => StatusCode::BAD_REQUEST,
            "backend_unavailable" => StatusCode::SERVICE_UNAVAILABLE,
            "upstream_error" => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

pub(super) fn map_sentiment_error(request_id: String, error: &SentimentError) -> ApiError {
    match error {
        SentimentError::EmptyInput
        | SentimentError::MissingColumn { .. }
        | SentimentError::Csv(_) => {
            ApiError::new(request_id, "validation_error", error.to_string())
        }
        SentimentError::BackendUnavailable(_) => {
            ApiError::new(request_id, "backend_unavailable", error.to_string())
        }
        SentimentError::Classifier(_) | SentimentError::Http(_) => {
            tracing::error!(error = %error, "classifier backend failed");
            ApiError::new(request_id, "upstream_error", "classifier backend failed")
        }
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static("x-request-id"),
        ])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/health", get(health))
        .route("/api/v1/analyze", post(analyze::analyze_text))
        .route("/api/v1/analyze/batch", post(analyze::analyze_batch))
        .layer(
            ServiceBuilder::new()
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    let backends = ScorerKind::ALL
        .into_iter()
        .map(|kind| BackendStatus {
            name: kind,
            available: state.scorers.available(kind),
        })
        .collect();

    Json(ApiResponse {
        data: HealthData {
            status: "ok",
            backends,
        },
        meta: ResponseMeta::new(req_id.0),
    })
}
