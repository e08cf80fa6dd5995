use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use vidlens_core::object_key::{object_key, ObjectUrlTemplate};

use crate::error::StorageError;
use crate::store::{FetchedObject, ObjectStore};

const FAKE_REGION: &str = "us-east-1";

#[derive(Debug, Clone)]
struct StoredObject {
    bytes: Vec<u8>,
    content_type: String,
}

/// In-memory [`ObjectStore`] for tests. URLs follow the AWS shape for the
/// given bucket, and failures can be injected per key or for all uploads.
#[derive(Clone)]
pub struct InMemoryObjectStore {
    urls: ObjectUrlTemplate,
    key_prefix: String,
    objects: Arc<Mutex<HashMap<String, StoredObject>>>,
    fail_fetch: Arc<Mutex<HashSet<String>>>,
    fail_uploads: Arc<Mutex<bool>>,
    empty_urls: Arc<Mutex<bool>>,
}

impl InMemoryObjectStore {
    pub fn new(bucket: &str, key_prefix: &str) -> Self {
        Self {
            urls: ObjectUrlTemplate::new(bucket, FAKE_REGION, None),
            key_prefix: key_prefix.to_string(),
            objects: Arc::new(Mutex::new(HashMap::new())),
            fail_fetch: Arc::new(Mutex::new(HashSet::new())),
            fail_uploads: Arc::new(Mutex::new(false)),
            empty_urls: Arc::new(Mutex::new(false)),
        }
    }

    /// Make every subsequent `store` call fail.
    pub async fn fake_fail_uploads(&self) {
        *self.fail_uploads.lock().await = true;
    }

    /// Make `store` succeed but hand back an empty URL.
    pub async fn fake_empty_urls(&self) {
        *self.empty_urls.lock().await = true;
    }

    /// Make `fetch` fail for `key`.
    pub async fn fake_fail_fetch(&self, key: &str) {
        self.fail_fetch.lock().await.insert(key.to_string());
    }

    /// Seed or overwrite an object directly.
    pub async fn put(&self, key: &str, bytes: Vec<u8>, content_type: &str) {
        self.objects.lock().await.insert(
            key.to_string(),
            StoredObject {
                bytes,
                content_type: content_type.to_string(),
            },
        );
    }

    /// Stored bytes and content type for `key`.
    pub async fn get(&self, key: &str) -> Option<(Vec<u8>, String)> {
        self.objects
            .lock()
            .await
            .get(key)
            .map(|o| (o.bytes.clone(), o.content_type.clone()))
    }

    pub async fn len(&self) -> usize {
        self.objects.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.objects.lock().await.is_empty()
    }

    pub fn url_for_key(&self, key: &str) -> String {
        self.urls.url_for_key(key)
    }
}

#[async_trait]
impl ObjectStore for InMemoryObjectStore {
    fn key_for(&self, filename: &str) -> String {
        object_key(&self.key_prefix, filename)
    }

    async fn store(
        &self,
        bytes: Vec<u8>,
        content_type: &str,
        key: &str,
    ) -> Result<String, StorageError> {
        if *self.fail_uploads.lock().await {
            return Err(StorageError::Upload {
                key: key.to_string(),
                message: "simulated upload failure".to_string(),
            });
        }
        if *self.empty_urls.lock().await {
            return Err(StorageError::EmptyUrl(key.to_string()));
        }

        self.put(key, bytes, content_type).await;
        Ok(self.urls.url_for_key(key))
    }

    async fn fetch(&self, url: &str, dest: &Path) -> Result<FetchedObject, StorageError> {
        let key = self
            .urls
            .key_from_url(url)
            .map_err(|e| StorageError::InvalidUrl(e.to_string()))?;

        if self.fail_fetch.lock().await.contains(&key) {
            return Err(StorageError::Download {
                key,
                message: "simulated download failure".to_string(),
            });
        }

        let object = self
            .objects
            .lock()
            .await
            .get(&key)
            .cloned()
            .ok_or_else(|| StorageError::ObjectNotFound(key.clone()))?;

        tokio::fs::write(dest, &object.bytes).await?;
        Ok(FetchedObject {
            content_type: object.content_type,
            size_bytes: object.bytes.len() as u64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn store() -> InMemoryObjectStore {
        InMemoryObjectStore::new("test-bucket", "videos")
    }

    #[tokio::test]
    async fn store_then_fetch_to_disk() {
        let store = store();
        let key = store.key_for("clips/talk.mp4");
        assert_eq!(key, "videos/talk.mp4");

        let url = store
            .store(b"0123456789".to_vec(), "video/mp4", &key)
            .await
            .unwrap();
        assert_eq!(
            url,
            "https://test-bucket.s3.us-east-1.amazonaws.com/videos/talk.mp4"
        );

        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("talk.mp4");
        let fetched = store.fetch(&url, &dest).await.unwrap();
        assert_eq!(fetched.content_type, "video/mp4");
        assert_eq!(fetched.size_bytes, 10);
        assert_eq!(std::fs::read(&dest).unwrap(), b"0123456789");
    }

    #[tokio::test]
    async fn same_filename_overwrites() {
        let store = store();
        let key = store.key_for("a.mp4");
        store.store(vec![1], "video/mp4", &key).await.unwrap();
        store.store(vec![2, 2], "video/webm", &key).await.unwrap();

        assert_eq!(store.len().await, 1);
        assert_eq!(
            store.get(&key).await,
            Some((vec![2, 2], "video/webm".to_string()))
        );
    }

    #[tokio::test]
    async fn injected_failures() {
        let store = store();
        store.fake_empty_urls().await;
        assert_matches!(
            store.store(vec![1], "video/mp4", "videos/a.mp4").await,
            Err(StorageError::EmptyUrl(_))
        );

        store.fake_fail_uploads().await;
        assert_matches!(
            store.store(vec![1], "video/mp4", "videos/a.mp4").await,
            Err(StorageError::Upload { .. })
        );
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn fetch_errors() {
        let store = store();
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("out.mp4");

        assert_matches!(
            store.fetch("https://elsewhere.example/videos/a.mp4", &dest).await,
            Err(StorageError::InvalidUrl(_))
        );

        let missing = store.url_for_key("videos/missing.mp4");
        assert_matches!(
            store.fetch(&missing, &dest).await,
            Err(StorageError::ObjectNotFound(key)) if key == "videos/missing.mp4"
        );

        store.put("videos/a.mp4", vec![1], "video/mp4").await;
        store.fake_fail_fetch("videos/a.mp4").await;
        let url = store.url_for_key("videos/a.mp4");
        assert_matches!(
            store.fetch(&url, &dest).await,
            Err(StorageError::Download { .. })
        );
    }
}
