//! Transcription Engine adapter.
//!
//! A [`Transcriber`] turns a local media file into a [`RawTranscript`]
//! with word-level timestamps. The orchestrator normalises the raw output
//! into `TranscriptionDetails` before persisting it.

mod fake;
mod whisper;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use vidlens_core::transcript::RawTranscript;

pub use fake::FakeTranscriber;
pub use whisper::{TranscriberConfig, WhisperHttpTranscriber};

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    /// The media file does not exist. Checked before any network I/O.
    #[error("Media file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Failed to read media file: {0}")]
    Io(#[from] std::io::Error),

    /// The request to the transcription server failed (network, DNS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The transcription server answered with a non-2xx status.
    #[error("Transcription server returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Invalid transcription response: {0}")]
    InvalidResponse(String),

    /// The engine itself reported a failure.
    #[error("{0}")]
    Engine(String),
}

#[async_trait]
pub trait Transcriber: Send + Sync + 'static {
    /// Transcribe the media file at `media`, requesting word timestamps.
    async fn transcribe(&self, media: &Path) -> Result<RawTranscript, TranscriptionError>;
}

#[async_trait]
impl<T: Transcriber + ?Sized> Transcriber for Arc<T> {
    async fn transcribe(&self, media: &Path) -> Result<RawTranscript, TranscriptionError> {
        (**self).transcribe(media).await
    }
}

/// Fail with [`TranscriptionError::FileNotFound`] unless `media` is an
/// existing file.
pub(crate) async fn ensure_media_exists(media: &Path) -> Result<(), TranscriptionError> {
    match tokio::fs::metadata(media).await {
        Ok(meta) if meta.is_file() => Ok(()),
        Ok(_) => Err(TranscriptionError::FileNotFound(media.to_path_buf())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(TranscriptionError::FileNotFound(media.to_path_buf()))
        }
        Err(e) => Err(e.into()),
    }
}
