//! Integration tests for `VideoRepo` against a real database.
//!
//! These need `DATABASE_URL` pointing at a Postgres instance and are ignored
//! by default; run them with `cargo test -p vidlens-db -- --ignored`.
//!
//! - Create starts in `uploaded` with zero attempts
//! - `mark_processing` counts attempts
//! - `mark_completed` sets transcript, details, and processed_time together
//! - `mark_failed` records the error message
//! - Updates on unknown ids return `None`
//! - `list` returns newest first

use serde_json::json;
use sqlx::PgPool;
use vidlens_db::models::status::VideoStatus;
use vidlens_db::models::video::CreateVideo;
use vidlens_db::repositories::VideoRepo;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_video(filename: &str) -> CreateVideo {
    CreateVideo {
        filename: filename.to_string(),
        s3_url: format!("https://bucket.s3.us-east-1.amazonaws.com/videos/{filename}"),
        created_by: None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[ignore = "requires Postgres"]
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_video(pool: PgPool) {
    let video = VideoRepo::create(&pool, &new_video("a.mp4")).await.unwrap();

    assert!(video.id > 0, "id should be auto-generated");
    assert_eq!(video.filename, "a.mp4");
    assert_eq!(video.status(), VideoStatus::Uploaded);
    assert_eq!(video.processing_attempts, 0);
    assert!(video.processed_time.is_none());
    assert!(video.transcription_details.is_none());

    let found = VideoRepo::find_by_id(&pool, video.id).await.unwrap().unwrap();
    assert_eq!(found.s3_url, video.s3_url);
}

#[ignore = "requires Postgres"]
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_processing_then_completed(pool: PgPool) {
    let video = VideoRepo::create(&pool, &new_video("b.mp4")).await.unwrap();

    let processing = VideoRepo::mark_processing(&pool, video.id).await.unwrap().unwrap();
    assert_eq!(processing.status(), VideoStatus::Processing);
    assert_eq!(processing.processing_attempts, 1);

    let details = json!({"text": "hello world", "segments": []});
    let completed = VideoRepo::mark_completed(&pool, video.id, "hello world", &details)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(completed.status(), VideoStatus::Completed);
    assert_eq!(completed.transcription.as_deref(), Some("hello world"));
    assert_eq!(completed.transcription_details, Some(details));
    assert!(completed.processed_time.is_some());
    assert!(completed.last_modified >= video.last_modified);
}

#[ignore = "requires Postgres"]
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_mark_failed_records_message(pool: PgPool) {
    let video = VideoRepo::create(&pool, &new_video("c.mp4")).await.unwrap();
    VideoRepo::mark_processing(&pool, video.id).await.unwrap();

    let failed = VideoRepo::mark_failed(&pool, video.id, "engine crashed")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(failed.status(), VideoStatus::Failed);
    assert_eq!(failed.error_message.as_deref(), Some("engine crashed"));
    assert!(failed.processed_time.is_none());
}

#[ignore = "requires Postgres"]
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_updates_on_unknown_id_return_none(pool: PgPool) {
    assert!(VideoRepo::find_by_id(&pool, 999_999).await.unwrap().is_none());
    assert!(VideoRepo::mark_processing(&pool, 999_999).await.unwrap().is_none());
    assert!(VideoRepo::mark_failed(&pool, 999_999, "x").await.unwrap().is_none());
}

#[ignore = "requires Postgres"]
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_newest_first(pool: PgPool) {
    let first = VideoRepo::create(&pool, &new_video("first.mp4")).await.unwrap();
    let second = VideoRepo::create(&pool, &new_video("second.mp4")).await.unwrap();

    let videos = VideoRepo::list(&pool, 10, 0).await.unwrap();
    assert_eq!(videos.len(), 2);
    assert_eq!(videos[0].id, second.id);
    assert_eq!(videos[1].id, first.id);

    let page = VideoRepo::list(&pool, 1, 1).await.unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].id, first.id);
}
