use async_trait::async_trait;
use vidlens_core::types::DbId;
use vidlens_db::models::video::{CreateVideo, Video};
use vidlens_db::repositories::VideoRepo;
use vidlens_db::DbPool;

use super::VideoStore;

/// [`VideoStore`] over the Postgres pool. Each call checks out one
/// connection for the duration of its query.
#[derive(Clone)]
pub struct PgVideoStore {
    pool: DbPool,
}

impl PgVideoStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VideoStore for PgVideoStore {
    async fn create(&self, input: &CreateVideo) -> Result<Video, sqlx::Error> {
        VideoRepo::create(&self.pool, input).await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Video>, sqlx::Error> {
        VideoRepo::find_by_id(&self.pool, id).await
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Video>, sqlx::Error> {
        VideoRepo::list(&self.pool, limit, offset).await
    }

    async fn mark_processing(&self, id: DbId) -> Result<Option<Video>, sqlx::Error> {
        VideoRepo::mark_processing(&self.pool, id).await
    }

    async fn mark_completed(
        &self,
        id: DbId,
        transcription: &str,
        details: &serde_json::Value,
    ) -> Result<Option<Video>, sqlx::Error> {
        VideoRepo::mark_completed(&self.pool, id, transcription, details).await
    }

    async fn mark_failed(
        &self,
        id: DbId,
        error_message: &str,
    ) -> Result<Option<Video>, sqlx::Error> {
        VideoRepo::mark_failed(&self.pool, id, error_message).await
    }
}
