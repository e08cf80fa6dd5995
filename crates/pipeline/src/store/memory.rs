use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use vidlens_core::types::DbId;
use vidlens_db::models::status::VideoStatus;
use vidlens_db::models::video::{CreateVideo, Video};

use super::VideoStore;

#[derive(Default)]
struct Inner {
    videos: BTreeMap<DbId, Video>,
    next_id: DbId,
    fail_creates: bool,
    fail_completions: bool,
}

/// In-memory [`VideoStore`] for tests, with the same state transitions as
/// the Postgres repository.
#[derive(Clone, Default)]
pub struct InMemoryVideoStore {
    inner: Arc<Mutex<Inner>>,
}

impl InMemoryVideoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `create` fail as if the database were unreachable.
    pub async fn fake_fail_creates(&self) {
        self.inner.lock().await.fail_creates = true;
    }

    /// Make `mark_completed` fail as if the database were unreachable.
    pub async fn fake_fail_completions(&self) {
        self.inner.lock().await.fail_completions = true;
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.videos.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.videos.is_empty()
    }

    async fn update(
        &self,
        id: DbId,
        apply: impl FnOnce(&mut Video) + Send,
    ) -> Result<Option<Video>, sqlx::Error> {
        let mut inner = self.inner.lock().await;
        Ok(inner.videos.get_mut(&id).map(|video| {
            apply(video);
            video.last_modified = Utc::now();
            video.clone()
        }))
    }
}

#[async_trait]
impl VideoStore for InMemoryVideoStore {
    async fn create(&self, input: &CreateVideo) -> Result<Video, sqlx::Error> {
        let mut inner = self.inner.lock().await;
        if inner.fail_creates {
            return Err(sqlx::Error::PoolTimedOut);
        }

        inner.next_id += 1;
        let now = Utc::now();
        let video = Video {
            id: inner.next_id,
            filename: input.filename.clone(),
            s3_url: input.s3_url.clone(),
            status_id: VideoStatus::Uploaded.id(),
            processing_attempts: 0,
            upload_time: now,
            processed_time: None,
            last_modified: now,
            video_metadata: None,
            transcription: None,
            summary: None,
            analysis_results: None,
            error_message: None,
            created_by: input.created_by.clone(),
            transcription_details: None,
        };
        inner.videos.insert(video.id, video.clone());
        Ok(video)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Video>, sqlx::Error> {
        Ok(self.inner.lock().await.videos.get(&id).cloned())
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Video>, sqlx::Error> {
        let inner = self.inner.lock().await;
        // Ids grow with upload time, so newest first is descending id.
        Ok(inner
            .videos
            .values()
            .rev()
            .skip(usize::try_from(offset).unwrap_or(0))
            .take(usize::try_from(limit).unwrap_or(0))
            .cloned()
            .collect())
    }

    async fn mark_processing(&self, id: DbId) -> Result<Option<Video>, sqlx::Error> {
        self.update(id, |video| {
            video.status_id = VideoStatus::Processing.id();
            video.processing_attempts += 1;
        })
        .await
    }

    async fn mark_completed(
        &self,
        id: DbId,
        transcription: &str,
        details: &serde_json::Value,
    ) -> Result<Option<Video>, sqlx::Error> {
        if self.inner.lock().await.fail_completions {
            return Err(sqlx::Error::PoolTimedOut);
        }
        let transcription = transcription.to_string();
        let details = details.clone();
        self.update(id, move |video| {
            video.status_id = VideoStatus::Completed.id();
            video.transcription = Some(transcription);
            video.transcription_details = Some(details);
            video.processed_time = Some(Utc::now());
        })
        .await
    }

    async fn mark_failed(
        &self,
        id: DbId,
        error_message: &str,
    ) -> Result<Option<Video>, sqlx::Error> {
        let error_message = error_message.to_string();
        self.update(id, move |video| {
            video.status_id = VideoStatus::Failed.id();
            video.error_message = Some(error_message);
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_video(filename: &str) -> CreateVideo {
        CreateVideo {
            filename: filename.to_string(),
            s3_url: format!("https://bucket.s3.us-east-1.amazonaws.com/videos/{filename}"),
            created_by: Some("tester".to_string()),
        }
    }

    #[tokio::test]
    async fn transitions_mirror_repository() {
        let store = InMemoryVideoStore::new();
        let video = store.create(&new_video("a.mp4")).await.unwrap();
        assert_eq!(video.id, 1);
        assert_eq!(video.status(), VideoStatus::Uploaded);

        let processing = store.mark_processing(video.id).await.unwrap().unwrap();
        assert_eq!(processing.status(), VideoStatus::Processing);
        assert_eq!(processing.processing_attempts, 1);

        let details = serde_json::json!({"text": "hi", "segments": []});
        let done = store
            .mark_completed(video.id, "hi", &details)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(done.status(), VideoStatus::Completed);
        assert_eq!(done.transcription.as_deref(), Some("hi"));
        assert!(done.processed_time.is_some());
    }

    #[tokio::test]
    async fn unknown_ids_return_none() {
        let store = InMemoryVideoStore::new();
        assert!(store.mark_processing(5).await.unwrap().is_none());
        assert!(store.mark_failed(5, "x").await.unwrap().is_none());
        assert!(store.find_by_id(5).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_is_newest_first_with_paging() {
        let store = InMemoryVideoStore::new();
        for name in ["a.mp4", "b.mp4", "c.mp4"] {
            store.create(&new_video(name)).await.unwrap();
        }
        let names: Vec<String> = store
            .list(2, 0)
            .await
            .unwrap()
            .into_iter()
            .map(|v| v.filename)
            .collect();
        assert_eq!(names, vec!["c.mp4", "b.mp4"]);

        let rest = store.list(10, 2).await.unwrap();
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0].filename, "a.mp4");
    }

    #[tokio::test]
    async fn injected_create_failure_stores_nothing() {
        let store = InMemoryVideoStore::new();
        store.fake_fail_creates().await;
        assert!(store.create(&new_video("a.mp4")).await.is_err());
        assert!(store.is_empty().await);
    }
}
