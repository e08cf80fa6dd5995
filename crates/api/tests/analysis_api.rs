//! Integration tests for the `/api/v1/analysis` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, hello_world, post_json};
use serde_json::json;
use vidlens_pipeline::FakeTranscriber;

fn app() -> common::TestApp {
    build_test_app(FakeTranscriber::returning(hello_world()))
}

// ---------------------------------------------------------------------------
// Test: Text analysis returns sentiment, counts, and POS distribution
// ---------------------------------------------------------------------------

#[tokio::test]
async fn analyze_text_returns_full_analysis() {
    let response = post_json(
        &app(),
        "/api/v1/analysis/text",
        json!({ "text": "I love this great product. It works." }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["sentiment"]["compound"].as_f64().unwrap() > 0.0);
    assert_eq!(json["sentence_count"], 2);
    assert_eq!(json["word_count"], 7);
    assert!(json["entities"].is_array());
    assert!(json["key_phrases"].is_array());
    assert_eq!(json["pos_distribution"]["PUNCT"], 2);
}

// ---------------------------------------------------------------------------
// Test: Empty text is analysed without error
// ---------------------------------------------------------------------------

#[tokio::test]
async fn analyze_empty_text() {
    let response = post_json(&app(), "/api/v1/analysis/text", json!({ "text": "" })).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["word_count"], 0);
    assert_eq!(json["sentiment"]["compound"], 0.0);
}

// ---------------------------------------------------------------------------
// Test: Segments come back with nlp_analysis and untouched fields
// ---------------------------------------------------------------------------

#[tokio::test]
async fn analyze_segments_attaches_analysis() {
    let response = post_json(
        &app(),
        "/api/v1/analysis/segments",
        json!({
            "segments": [
                { "start": 0.0, "end": 1.5, "text": "This is terrible.", "speaker": "A" },
                { "start": 1.5, "end": 3.0, "text": "Hello there." }
            ]
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let segments = json["segments"].as_array().unwrap();
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0]["speaker"], "A");
    assert_eq!(segments[0]["end"], 1.5);
    assert!(segments[0]["nlp_analysis"]["sentiment"]["compound"].as_f64().unwrap() < 0.0);
    assert_eq!(segments[1]["nlp_analysis"]["word_count"], 2);
}

// ---------------------------------------------------------------------------
// Test: Segment without text is a validation error
// ---------------------------------------------------------------------------

#[tokio::test]
async fn analyze_segments_rejects_malformed_segment() {
    let response = post_json(
        &app(),
        "/api/v1/analysis/segments",
        json!({ "segments": [ { "start": 0.0 }, "not an object" ] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Segment 0 has no 'text' string");
}

// ---------------------------------------------------------------------------
// Test: Missing body field is rejected by the JSON extractor
// ---------------------------------------------------------------------------

#[tokio::test]
async fn analyze_text_without_text_field_is_rejected() {
    let response = post_json(&app(), "/api/v1/analysis/text", json!({ "body": "x" })).await;
    assert!(response.status().is_client_error());
}
