//! Repository for the `videos` table.
//!
//! Every mutating query stamps `last_modified = NOW()`.

use sqlx::PgPool;
use vidlens_core::types::DbId;

use crate::models::status::VideoStatus;
use crate::models::video::{CreateVideo, Video};

const COLUMNS: &str = "id, filename, s3_url, status_id, processing_attempts, upload_time, \
    processed_time, last_modified, video_metadata, transcription, summary, analysis_results, \
    error_message, created_by, transcription_details";

pub struct VideoRepo;

impl VideoRepo {
    /// Insert a new video in the `uploaded` state.
    pub async fn create(pool: &PgPool, input: &CreateVideo) -> Result<Video, sqlx::Error> {
        let query = format!(
            "INSERT INTO videos (filename, s3_url, status_id, created_by)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(&input.filename)
            .bind(&input.s3_url)
            .bind(VideoStatus::Uploaded.id())
            .bind(&input.created_by)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Video>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM videos WHERE id = $1");
        sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List videos, newest upload first.
    pub async fn list(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<Video>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM videos
             ORDER BY upload_time DESC, id DESC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Move a video to `processing` and count the attempt.
    pub async fn mark_processing(pool: &PgPool, id: DbId) -> Result<Option<Video>, sqlx::Error> {
        let query = format!(
            "UPDATE videos SET
                status_id = $2,
                processing_attempts = processing_attempts + 1,
                last_modified = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .bind(VideoStatus::Processing.id())
            .fetch_optional(pool)
            .await
    }

    /// Store the transcript and its structured details, stamp
    /// `processed_time`, and move the video to `completed`, all in one
    /// statement.
    pub async fn mark_completed(
        pool: &PgPool,
        id: DbId,
        transcription: &str,
        details: &serde_json::Value,
    ) -> Result<Option<Video>, sqlx::Error> {
        let query = format!(
            "UPDATE videos SET
                status_id = $2,
                transcription = $3,
                transcription_details = $4,
                processed_time = NOW(),
                last_modified = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .bind(VideoStatus::Completed.id())
            .bind(transcription)
            .bind(details)
            .fetch_optional(pool)
            .await
    }

    /// Move a video to `failed` and record why.
    pub async fn mark_failed(
        pool: &PgPool,
        id: DbId,
        error_message: &str,
    ) -> Result<Option<Video>, sqlx::Error> {
        let query = format!(
            "UPDATE videos SET
                status_id = $2,
                error_message = $3,
                last_modified = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .bind(VideoStatus::Failed.id())
            .bind(error_message)
            .fetch_optional(pool)
            .await
    }
}
