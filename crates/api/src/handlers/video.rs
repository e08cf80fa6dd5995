//! Handlers for the `/videos` resource.

use axum::extract::{Multipart, Path, Query, State};
use axum::Json;
use vidlens_core::object_key::file_basename;
use vidlens_core::types::DbId;
use vidlens_db::models::video::VideoDetail;
use vidlens_pipeline::{NewUpload, PipelineError, TranscribedVideo, UploadedVideo};

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::state::AppState;

/// Content type assumed when a multipart file part declares none.
const UNKNOWN_CONTENT_TYPE: &str = "application/octet-stream";

/// Filename used when a multipart file part declares none, or one with
/// no final path component.
const UNNAMED_UPLOAD: &str = "upload";

/// POST /api/v1/videos/upload
///
/// Accepts a multipart form with a required `file` field and an optional
/// `created_by` field. The file's declared content type must be `video/*`.
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<UploadedVideo>> {
    let mut file: Option<(String, String, Vec<u8>)> = None;
    let mut created_by: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "file" => {
                let filename = field
                    .file_name()
                    .filter(|n| !file_basename(n).trim().is_empty())
                    .unwrap_or(UNNAMED_UPLOAD)
                    .to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or(UNKNOWN_CONTENT_TYPE)
                    .to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                file = Some((filename, content_type, data.to_vec()));
            }
            "created_by" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                created_by = Some(text).filter(|t| !t.trim().is_empty());
            }
            _ => {} // ignore unknown fields
        }
    }

    let (filename, content_type, bytes) =
        file.ok_or_else(|| AppError::BadRequest("Missing required 'file' field".into()))?;

    let uploaded = state
        .pipeline
        .upload(NewUpload {
            bytes,
            content_type,
            filename,
            created_by,
        })
        .await
        .map_err(|e| match e {
            PipelineError::Database(db) => AppError::Upload(db.to_string()),
            other => other.into(),
        })?;

    Ok(Json(uploaded))
}

/// POST /api/v1/videos/{video_id}/transcribe
///
/// Runs download, transcription, and persistence synchronously. On failure
/// the video is left `failed` and the error message is returned.
pub async fn transcribe(
    State(state): State<AppState>,
    Path(video_id): Path<DbId>,
) -> AppResult<Json<TranscribedVideo>> {
    let transcribed = state.pipeline.transcribe(video_id).await?;
    Ok(Json(transcribed))
}

/// GET /api/v1/videos/{video_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(video_id): Path<DbId>,
) -> AppResult<Json<VideoDetail>> {
    let video = state.pipeline.get(video_id).await?;
    Ok(Json(VideoDetail::from(&video)))
}

/// GET /api/v1/videos
///
/// Videos newest first, paginated with `?limit=&offset=`.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<VideoDetail>>> {
    let videos = state
        .pipeline
        .list(params.limit(), params.offset())
        .await?;
    Ok(Json(videos.iter().map(VideoDetail::from).collect()))
}
