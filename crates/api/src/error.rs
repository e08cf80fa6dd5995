use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use vidlens_cloud::StorageError;
use vidlens_core::error::CoreError;
use vidlens_pipeline::PipelineError;

/// Error type returned by every handler.
///
/// Renders as `{ "error": <message>, "code": <CODE> }`. Messages for
/// infrastructure failures are fixed strings; the underlying cause is
/// logged, not returned. The one exception is [`AppError::ProcessingFailed`],
/// whose message clients rely on to learn why a transcription failed.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The object store refused the upload.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// The media was stored but its record could not be written.
    #[error("Upload failed: {0}")]
    Upload(String),

    #[error("Processing failed: {0}")]
    ProcessingFailed(String),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

pub type AppResult<T> = Result<T, AppError>;

const SANITIZED: &str = "An internal error occurred";

impl AppError {
    /// HTTP status, machine-readable code, and client-facing message.
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Core(CoreError::NotFound { entity, id }) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("{entity} with id {id} not found"),
            ),
            AppError::Core(CoreError::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::Core(CoreError::Internal(msg)) => {
                tracing::error!(error = %msg, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", SANITIZED.into())
            }
            AppError::Database(sqlx::Error::RowNotFound) => {
                (StatusCode::NOT_FOUND, "NOT_FOUND", "Resource not found".into())
            }
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", SANITIZED.into())
            }
            AppError::Storage(err) => {
                tracing::error!(error = %err, "Object storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORAGE_ERROR",
                    "Failed to upload video to storage".into(),
                )
            }
            AppError::Upload(msg) => {
                tracing::error!(error = %msg, "Upload could not be recorded");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "Error processing video upload".into(),
                )
            }
            AppError::ProcessingFailed(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "PROCESSING_FAILED",
                format!("Error processing video: {msg}"),
            ),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();
        (status, axum::Json(json!({ "error": message, "code": code }))).into_response()
    }
}

impl From<PipelineError> for AppError {
    fn from(err: PipelineError) -> Self {
        match err {
            PipelineError::InvalidContentType(_) => {
                AppError::BadRequest("File uploaded is not a video".into())
            }
            PipelineError::NotFound(id) => AppError::Core(CoreError::NotFound {
                entity: "Video",
                id,
            }),
            PipelineError::Storage(e) => AppError::Storage(e),
            PipelineError::Database(e) => AppError::Database(e),
            PipelineError::Processing(msg) => AppError::ProcessingFailed(msg),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Core(CoreError::Validation(err.to_string()))
    }
}
