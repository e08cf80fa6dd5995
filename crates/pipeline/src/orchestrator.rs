//! Upload and transcribe workflows.
//!
//! Transcribe state machine: `uploaded/any -> processing -> completed`, or
//! `-> failed` when any step after entering `processing` fails. The
//! `processing` transition is persisted before the download starts so
//! readers can observe in-flight work.
//!
//! Re-running transcribe on a `completed` or `failed` video runs the whole
//! workflow again and overwrites the earlier results. Concurrent runs for
//! the same id are not serialised; the last writer wins.

use std::path::Path;
use std::sync::Arc;

use serde::Serialize;
use tempfile::NamedTempFile;
use vidlens_cloud::ObjectStore;
use vidlens_core::media::{is_video_content_type, media_extension};
use vidlens_core::transcript::TranscriptionDetails;
use vidlens_core::types::{DbId, Timestamp};
use vidlens_db::models::status::VideoStatus;
use vidlens_db::models::video::{CreateVideo, Video};

use crate::config::PipelineConfig;
use crate::error::{PipelineError, ProcessingError};
use crate::store::VideoStore;
use crate::transcriber::Transcriber;

/// A file received by the upload workflow.
#[derive(Debug, Clone)]
pub struct NewUpload {
    pub bytes: Vec<u8>,
    pub content_type: String,
    pub filename: String,
    pub created_by: Option<String>,
}

/// Result of a successful upload.
#[derive(Debug, Clone, Serialize)]
pub struct UploadedVideo {
    pub id: DbId,
    pub filename: String,
    pub status: VideoStatus,
    pub s3_url: String,
}

/// Result of a successful transcription.
#[derive(Debug, Clone, Serialize)]
pub struct TranscribedVideo {
    pub id: DbId,
    pub status: VideoStatus,
    pub transcription: String,
    pub details: TranscriptionDetails,
    pub processed_time: Option<Timestamp>,
}

/// Sequences object storage, transcription, and persistence.
#[derive(Clone)]
pub struct VideoPipeline {
    objects: Arc<dyn ObjectStore>,
    transcriber: Arc<dyn Transcriber>,
    videos: Arc<dyn VideoStore>,
    config: PipelineConfig,
}

impl VideoPipeline {
    pub fn new(
        objects: Arc<dyn ObjectStore>,
        transcriber: Arc<dyn Transcriber>,
        videos: Arc<dyn VideoStore>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            objects,
            transcriber,
            videos,
            config,
        }
    }

    // ----- upload -----

    /// Validate, store, then record an uploaded video.
    ///
    /// A non-video content type is rejected before any I/O. A storage
    /// failure aborts before a record is created.
    pub async fn upload(&self, upload: NewUpload) -> Result<UploadedVideo, PipelineError> {
        let NewUpload {
            bytes,
            content_type,
            filename,
            created_by,
        } = upload;

        if !is_video_content_type(&content_type) {
            tracing::info!(filename = %filename, content_type = %content_type, "Rejected non-video upload");
            return Err(PipelineError::InvalidContentType(content_type));
        }

        let key = self.objects.key_for(&filename);
        let size = bytes.len();
        let s3_url = self
            .objects
            .store(bytes, &content_type, &key)
            .await
            .inspect_err(|e| tracing::error!(key = %key, error = %e, "Failed to store upload"))?;

        let video = self
            .videos
            .create(&CreateVideo {
                filename: filename.clone(),
                s3_url,
                created_by,
            })
            .await
            .inspect_err(|e| tracing::error!(key = %key, error = %e, "Failed to record upload"))?;

        tracing::info!(video_id = video.id, key = %key, size, "Video uploaded");

        let status = video.status();
        Ok(UploadedVideo {
            id: video.id,
            filename: video.filename,
            status,
            s3_url: video.s3_url,
        })
    }

    // ----- transcribe -----

    /// Download, transcribe, and persist the transcript of a stored video.
    ///
    /// An unknown id is `NotFound` with nothing mutated. Once the video is
    /// `processing`, any failure marks it `failed` with the error message
    /// and returns [`PipelineError::Processing`]. The downloaded file is
    /// removed on every path.
    ///
    /// The workflow runs on its own task, so dropping the returned future
    /// (request timeout, client disconnect) does not interrupt it: the row
    /// still ends `completed` or `failed`.
    pub async fn transcribe(&self, id: DbId) -> Result<TranscribedVideo, PipelineError> {
        let pipeline = self.clone();
        match tokio::spawn(async move { pipeline.run_transcription(id).await }).await {
            Ok(result) => result,
            Err(join_err) => {
                let message = format!("Transcription task aborted: {join_err}");
                tracing::error!(video_id = id, error = %message, "Transcription task did not finish");
                if let Err(db_err) = self.videos.mark_failed(id, &message).await {
                    tracing::error!(video_id = id, error = %db_err, "Failed to mark video as failed");
                }
                Err(PipelineError::Processing(message))
            }
        }
    }

    async fn run_transcription(&self, id: DbId) -> Result<TranscribedVideo, PipelineError> {
        let video = self
            .videos
            .find_by_id(id)
            .await?
            .ok_or(PipelineError::NotFound(id))?;

        if video.status().is_terminal() {
            tracing::warn!(
                video_id = id,
                status = %video.status(),
                "Re-running transcription; earlier results will be overwritten"
            );
        }

        let video = self
            .videos
            .mark_processing(id)
            .await?
            .ok_or(PipelineError::NotFound(id))?;
        tracing::info!(video_id = id, attempt = video.processing_attempts, "Transcription started");

        let outcome = match self.temp_media_file(&video.filename) {
            Ok(temp) => {
                let outcome = self.process(&video, temp.path()).await;
                let path = temp.path().to_path_buf();
                if let Err(e) = temp.close() {
                    tracing::warn!(
                        video_id = id,
                        path = %path.display(),
                        error = %e,
                        "Failed to remove temporary media file"
                    );
                }
                outcome
            }
            Err(e) => Err(ProcessingError::TempFile(e)),
        };

        match outcome {
            Ok((completed, details)) => {
                tracing::info!(video_id = id, segments = details.segments.len(), "Transcription completed");
                Ok(TranscribedVideo {
                    id: completed.id,
                    status: completed.status(),
                    transcription: completed.transcription.unwrap_or_default(),
                    details,
                    processed_time: completed.processed_time,
                })
            }
            Err(e) => {
                let message = e.to_string();
                tracing::error!(video_id = id, error = %message, "Transcription failed");
                if let Err(db_err) = self.videos.mark_failed(id, &message).await {
                    tracing::error!(video_id = id, error = %db_err, "Failed to mark video as failed");
                }
                Err(PipelineError::Processing(message))
            }
        }
    }

    /// Steps between entering `processing` and the completed write.
    async fn process(
        &self,
        video: &Video,
        local: &Path,
    ) -> Result<(Video, TranscriptionDetails), ProcessingError> {
        let fetched = self.objects.fetch(&video.s3_url, local).await?;
        if !is_video_content_type(&fetched.content_type) {
            return Err(ProcessingError::NotAVideo(fetched.content_type));
        }
        tracing::debug!(video_id = video.id, size_bytes = fetched.size_bytes, "Media downloaded");

        let raw = self.transcriber.transcribe(local).await?;
        let details = TranscriptionDetails::from(raw);
        let details_json = serde_json::to_value(&details)?;

        let completed = self
            .videos
            .mark_completed(video.id, &details.text, &details_json)
            .await?
            .ok_or(ProcessingError::Vanished(video.id))?;

        Ok((completed, details))
    }

    fn temp_media_file(&self, filename: &str) -> std::io::Result<NamedTempFile> {
        let suffix = format!(".{}", media_extension(filename));
        let mut builder = tempfile::Builder::new();
        builder.prefix("vidlens-").suffix(&suffix);
        match &self.config.temp_dir {
            Some(dir) => builder.tempfile_in(dir),
            None => builder.tempfile(),
        }
    }

    // ----- reads -----

    pub async fn get(&self, id: DbId) -> Result<Video, PipelineError> {
        self.videos
            .find_by_id(id)
            .await?
            .ok_or(PipelineError::NotFound(id))
    }

    /// Videos newest first.
    pub async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Video>, PipelineError> {
        Ok(self.videos.list(limit, offset).await?)
    }
}
