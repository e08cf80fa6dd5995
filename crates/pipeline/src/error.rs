use vidlens_cloud::StorageError;
use vidlens_core::types::DbId;

use crate::transcriber::TranscriptionError;

/// Failures surfaced by the orchestrator to its callers.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// The declared content type is not `video/*`. Rejected before any I/O.
    #[error("Invalid content type: {0}")]
    InvalidContentType(String),

    #[error("Video with id {0} not found")]
    NotFound(DbId),

    /// Object storage failed during upload. No record was created.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The transcribe workflow failed after the video entered `processing`.
    /// The video has been marked `failed` with this message.
    #[error("{0}")]
    Processing(String),
}

/// A failed step of the transcribe workflow. Its message is what gets
/// persisted as the video's `error_message`.
#[derive(Debug, thiserror::Error)]
pub enum ProcessingError {
    #[error("Failed to create temporary file: {0}")]
    TempFile(std::io::Error),

    #[error("Failed to download video: {0}")]
    Download(#[from] StorageError),

    #[error("Downloaded file is not a video (content type: {0})")]
    NotAVideo(String),

    #[error("Transcription failed: {0}")]
    Transcription(#[from] TranscriptionError),

    #[error("Failed to encode transcription details: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Failed to save transcription: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Video with id {0} disappeared during processing")]
    Vanished(DbId),
}
