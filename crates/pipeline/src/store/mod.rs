//! Video Record Store seam used by the orchestrator.

mod memory;
mod postgres;

use std::sync::Arc;

use async_trait::async_trait;
use vidlens_core::types::DbId;
use vidlens_db::models::video::{CreateVideo, Video};

pub use memory::InMemoryVideoStore;
pub use postgres::PgVideoStore;

/// Persistence operations the pipeline needs. Updates return `None` when
/// no video has the given id.
#[async_trait]
pub trait VideoStore: Send + Sync + 'static {
    async fn create(&self, input: &CreateVideo) -> Result<Video, sqlx::Error>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Video>, sqlx::Error>;

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Video>, sqlx::Error>;

    async fn mark_processing(&self, id: DbId) -> Result<Option<Video>, sqlx::Error>;

    async fn mark_completed(
        &self,
        id: DbId,
        transcription: &str,
        details: &serde_json::Value,
    ) -> Result<Option<Video>, sqlx::Error>;

    async fn mark_failed(&self, id: DbId, error_message: &str)
        -> Result<Option<Video>, sqlx::Error>;
}

#[async_trait]
impl<T: VideoStore + ?Sized> VideoStore for Arc<T> {
    async fn create(&self, input: &CreateVideo) -> Result<Video, sqlx::Error> {
        (**self).create(input).await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Video>, sqlx::Error> {
        (**self).find_by_id(id).await
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Video>, sqlx::Error> {
        (**self).list(limit, offset).await
    }

    async fn mark_processing(&self, id: DbId) -> Result<Option<Video>, sqlx::Error> {
        (**self).mark_processing(id).await
    }

    async fn mark_completed(
        &self,
        id: DbId,
        transcription: &str,
        details: &serde_json::Value,
    ) -> Result<Option<Video>, sqlx::Error> {
        (**self).mark_completed(id, transcription, details).await
    }

    async fn mark_failed(
        &self,
        id: DbId,
        error_message: &str,
    ) -> Result<Option<Video>, sqlx::Error> {
        (**self).mark_failed(id, error_message).await
    }
}
