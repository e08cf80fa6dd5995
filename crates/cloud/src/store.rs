use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::StorageError;

/// Metadata of an object written to local disk by [`ObjectStore::fetch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedObject {
    /// Content type recorded when the object was stored.
    pub content_type: String,
    pub size_bytes: u64,
}

/// Byte storage keyed by path, addressed by public URL.
#[async_trait]
pub trait ObjectStore: Send + Sync + 'static {
    /// Deterministic key for an uploaded file. The same filename always
    /// maps to the same key.
    fn key_for(&self, filename: &str) -> String;

    /// Store `bytes` under `key` and return the object's public URL.
    async fn store(
        &self,
        bytes: Vec<u8>,
        content_type: &str,
        key: &str,
    ) -> Result<String, StorageError>;

    /// Download the object at `url` into `dest`, overwriting it.
    async fn fetch(&self, url: &str, dest: &Path) -> Result<FetchedObject, StorageError>;
}

#[async_trait]
impl<T: ObjectStore + ?Sized> ObjectStore for Arc<T> {
    fn key_for(&self, filename: &str) -> String {
        (**self).key_for(filename)
    }

    async fn store(
        &self,
        bytes: Vec<u8>,
        content_type: &str,
        key: &str,
    ) -> Result<String, StorageError> {
        (**self).store(bytes, content_type, key).await
    }

    async fn fetch(&self, url: &str, dest: &Path) -> Result<FetchedObject, StorageError> {
        (**self).fetch(url, dest).await
    }
}
