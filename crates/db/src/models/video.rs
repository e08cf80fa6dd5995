//! Video entity model, the public record view, and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vidlens_core::types::{DbId, Timestamp};

use crate::models::status::{StatusId, VideoStatus};

/// A row from the `videos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Video {
    pub id: DbId,
    pub filename: String,
    pub s3_url: String,
    pub status_id: StatusId,
    pub processing_attempts: i32,
    pub upload_time: Timestamp,
    pub processed_time: Option<Timestamp>,
    pub last_modified: Timestamp,
    pub video_metadata: Option<serde_json::Value>,
    pub transcription: Option<String>,
    pub summary: Option<String>,
    pub analysis_results: Option<serde_json::Value>,
    pub error_message: Option<String>,
    pub created_by: Option<String>,
    pub transcription_details: Option<serde_json::Value>,
}

impl Video {
    /// Decoded lifecycle status. Unknown ids (a lookup row added without a
    /// matching variant) read as `Failed`.
    pub fn status(&self) -> VideoStatus {
        VideoStatus::from_id(self.status_id).unwrap_or(VideoStatus::Failed)
    }
}

/// DTO for creating a video record after its media has been stored.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateVideo {
    pub filename: String,
    pub s3_url: String,
    pub created_by: Option<String>,
}

/// Client-facing view of a video record.
///
/// `error_message` is only exposed while the video is `failed`; a stale
/// message from an earlier attempt is hidden once a later run succeeds.
#[derive(Debug, Clone, Serialize)]
pub struct VideoDetail {
    pub id: DbId,
    pub filename: String,
    pub status: VideoStatus,
    pub upload_time: Timestamp,
    pub processed_time: Option<Timestamp>,
    pub s3_url: String,
    pub video_metadata: Option<serde_json::Value>,
    pub analysis_results: Option<serde_json::Value>,
    pub error_message: Option<String>,
}

impl From<&Video> for VideoDetail {
    fn from(video: &Video) -> Self {
        let status = video.status();
        Self {
            id: video.id,
            filename: video.filename.clone(),
            status,
            upload_time: video.upload_time,
            processed_time: video.processed_time,
            s3_url: video.s3_url.clone(),
            video_metadata: video.video_metadata.clone(),
            analysis_results: video.analysis_results.clone(),
            error_message: if status == VideoStatus::Failed {
                video.error_message.clone()
            } else {
                None
            },
        }
    }
}
