//! HTTP client for a remote text-classification inference service.
//!
//! The service exposes `POST /predict` taking `{"inputs": [...]}` and
//! returning one `{"label", "score"}` pair per input, in input order.
//! Labels are `POSITIVE`/`NEGATIVE` with a confidence in `[0, 1]`; the
//! client converts each pair to a signed score so the pipeline can apply
//! the same thresholds as the in-process backends.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::SentimentError;

/// Maximum number of texts per /predict call.
const BATCH_SIZE: usize = 64;

/// Classifier inference HTTP client.
///
/// Use [`ClassifierClient::new`] with the configured endpoint URL; point
/// it at a wiremock server in tests.
pub struct ClassifierClient {
    client: reqwest::Client,
    url: String,
}

#[derive(Serialize)]
struct PredictRequest<'a> {
    inputs: &'a [&'a str],
}

#[derive(Debug, Deserialize)]
struct Prediction {
    label: String,
    score: f32,
}

impl ClassifierClient {
    /// Create a new client for the given base URL.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, SentimentError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            url: format!("{}/predict", base_url.trim_end_matches('/')),
        })
    }

    /// Score a batch of texts, one signed score per input, in input order.
    ///
    /// Texts are batched into groups of [`BATCH_SIZE`] per request. A
    /// failed request marks every text in that chunk as failed instead of
    /// aborting the rest of the batch, so one bad chunk cannot take down
    /// a whole upload.
    pub async fn score_batch(&self, texts: &[&str]) -> Vec<Result<f32, SentimentError>> {
        let mut results = Vec::with_capacity(texts.len());

        for chunk in texts.chunks(BATCH_SIZE) {
            match self.predict_chunk(chunk).await {
                Ok(scores) => results.extend(scores.into_iter().map(Ok)),
                Err(e) => {
                    tracing::warn!(error = %e, chunk_len = chunk.len(), "classifier chunk failed");
                    let reason = e.to_string();
                    results.extend(
                        chunk
                            .iter()
                            .map(|_| Err(SentimentError::Classifier(reason.clone()))),
                    );
                }
            }
        }

        results
    }

    /// Score a single text.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Classifier`] on a non-2xx status, a
    /// response shape mismatch, or an unknown label, and
    /// [`SentimentError::Http`] on network failure.
    pub async fn score_one(&self, text: &str) -> Result<f32, SentimentError> {
        let scores = self.predict_chunk(&[text]).await?;
        scores.into_iter().next().ok_or_else(|| {
            SentimentError::Classifier("classifier returned no prediction".to_string())
        })
    }

    async fn predict_chunk(&self, chunk: &[&str]) -> Result<Vec<f32>, SentimentError> {
        let request = PredictRequest { inputs: chunk };
        let response = self.client.post(&self.url).json(&request).send().await?;

        if !response.status().is_success() {
            return Err(SentimentError::Classifier(format!(
                "classifier returned status {}",
                response.status()
            )));
        }

        let predictions: Vec<Prediction> = response
            .json()
            .await
            .map_err(|e| SentimentError::Classifier(format!("response parse error: {e}")))?;

        if predictions.len() != chunk.len() {
            return Err(SentimentError::Classifier(format!(
                "classifier returned {} predictions for {} inputs",
                predictions.len(),
                chunk.len()
            )));
        }

        predictions.into_iter().map(signed_score).collect()
    }
}

/// Convert a (label, confidence) pair to a signed score: positive
/// confidence for POSITIVE, negated confidence for NEGATIVE.
fn signed_score(prediction: Prediction) -> Result<f32, SentimentError> {
    match prediction.label.to_ascii_uppercase().as_str() {
        "POSITIVE" => Ok(prediction.score),
        "NEGATIVE" => Ok(-prediction.score),
        other => Err(SentimentError::Classifier(format!(
            "unknown classifier label '{other}'"
        ))),
    }
}
