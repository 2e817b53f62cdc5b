//! Integration tests for `ClassifierClient` using wiremock HTTP mocks.

use sentidash_core::SentimentLabel;
use sentidash_sentiment::{
    aggregate_counts, classify_batch, classify_one, ClassifierClient, Scorer, SentimentError,
};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> ClassifierClient {
    ClassifierClient::new(base_url, 30).expect("client construction should not fail")
}

#[tokio::test]
async fn score_one_converts_positive_label() {
    let server = MockServer::start().await;

    let body = serde_json::json!([{ "label": "POSITIVE", "score": 0.97 }]);
    Mock::given(method("POST"))
        .and(path("/predict"))
        .and(body_json(serde_json::json!({ "inputs": ["love it"] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let score = client.score_one("love it").await.expect("should score");
    assert!((score - 0.97).abs() < 1e-6);
}

#[tokio::test]
async fn score_one_negates_negative_label() {
    let server = MockServer::start().await;

    let body = serde_json::json!([{ "label": "NEGATIVE", "score": 0.91 }]);
    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let score = client.score_one("hate it").await.expect("should score");
    assert!((score + 0.91).abs() < 1e-6);
}

#[tokio::test]
async fn score_batch_preserves_input_order() {
    let server = MockServer::start().await;

    let body = serde_json::json!([
        { "label": "POSITIVE", "score": 0.9 },
        { "label": "NEGATIVE", "score": 0.8 },
        { "label": "POSITIVE", "score": 0.6 }
    ]);
    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let results = client.score_batch(&["a", "b", "c"]).await;
    let scores: Vec<f32> = results.into_iter().map(|r| r.unwrap()).collect();
    assert!(scores[0] > 0.0);
    assert!(scores[1] < 0.0);
    assert!(scores[2] > 0.0);
}

#[tokio::test]
async fn server_error_fails_every_text_in_chunk() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let results = client.score_batch(&["a", "b"]).await;
    assert_eq!(results.len(), 2);
    for result in results {
        assert!(matches!(result, Err(SentimentError::Classifier(_))));
    }
}

#[tokio::test]
async fn prediction_count_mismatch_is_an_error() {
    let server = MockServer::start().await;

    let body = serde_json::json!([{ "label": "POSITIVE", "score": 0.9 }]);
    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let results = client.score_batch(&["a", "b"]).await;
    assert!(results
        .iter()
        .all(|r| matches!(r, Err(SentimentError::Classifier(_)))));
}

#[tokio::test]
async fn unknown_label_is_rejected() {
    let server = MockServer::start().await;

    let body = serde_json::json!([{ "label": "MIXED", "score": 0.5 }]);
    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.score_one("hmm").await;
    assert!(matches!(result, Err(SentimentError::Classifier(_))));
}

#[tokio::test]
async fn classify_one_applies_thresholds_to_classifier_score() {
    let server = MockServer::start().await;

    let body = serde_json::json!([{ "label": "NEGATIVE", "score": 0.99 }]);
    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let scorer = Scorer::Classifier(test_client(&server.uri()));
    let result = classify_one("this is dreadful", &scorer).await.unwrap();
    assert_eq!(result.label, SentimentLabel::Negative);
    assert!(result.score < -0.05);
}

#[tokio::test]
async fn batch_with_failing_classifier_marks_rows_instead_of_aborting() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let scorer = Scorer::Classifier(test_client(&server.uri()));
    let rows = vec![Some("one".to_string()), None, Some("two".to_string())];
    let report = classify_batch(&rows, &scorer).await;

    assert!(report.rows.is_empty());
    assert_eq!(report.failures.len(), 2);
    assert_eq!(report.skipped_missing, 1);
    assert_eq!(report.input_rows(), 3);
    assert!(aggregate_counts(&report.rows).is_empty());
}
