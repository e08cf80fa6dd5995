//! Tests for the mapping from `AppError` to JSON error responses.

use assert_matches::assert_matches;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use vidlens_api::error::AppError;
use vidlens_cloud::StorageError;
use vidlens_core::error::CoreError;
use vidlens_pipeline::PipelineError;

async fn render(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

// ---------------------------------------------------------------------------
// Test: Core errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_maps_to_404() {
    let (status, json) = render(AppError::Core(CoreError::NotFound {
        entity: "Video",
        id: 42,
    }))
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Video with id 42 not found");
}

#[tokio::test]
async fn validation_maps_to_400() {
    let (status, json) = render(AppError::Core(CoreError::Validation("bad".into()))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "bad");
}

#[tokio::test]
async fn internal_messages_are_sanitized() {
    let (status, json) = render(AppError::Core(CoreError::Internal("secret detail".into()))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "An internal error occurred");

    let (_, json) = render(AppError::Database(sqlx::Error::PoolTimedOut)).await;
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn row_not_found_maps_to_404() {
    let (status, _) = render(AppError::Database(sqlx::Error::RowNotFound)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: Pipeline errors
// ---------------------------------------------------------------------------

#[test]
fn pipeline_errors_convert() {
    assert_matches!(
        AppError::from(PipelineError::InvalidContentType("text/plain".into())),
        AppError::BadRequest(msg) if msg == "File uploaded is not a video"
    );
    assert_matches!(
        AppError::from(PipelineError::NotFound(3)),
        AppError::Core(CoreError::NotFound { entity: "Video", id: 3 })
    );
    assert_matches!(
        AppError::from(PipelineError::Processing("boom".into())),
        AppError::ProcessingFailed(msg) if msg == "boom"
    );
    assert_matches!(
        AppError::from(PipelineError::Storage(StorageError::EmptyUrl("k".into()))),
        AppError::Storage(_)
    );
}

#[tokio::test]
async fn processing_failure_includes_message() {
    let (status, json) = render(AppError::ProcessingFailed("Transcription failed: x".into())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "PROCESSING_FAILED");
    assert_eq!(json["error"], "Error processing video: Transcription failed: x");
}

#[tokio::test]
async fn storage_failure_hides_cause() {
    let (status, json) = render(AppError::Storage(StorageError::Upload {
        key: "videos/a.mp4".into(),
        message: "access denied".into(),
    }))
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "STORAGE_ERROR");
    assert_eq!(json["error"], "Failed to upload video to storage");
}
