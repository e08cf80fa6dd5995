use std::path::Path;

use async_trait::async_trait;
use aws_credential_types::Credentials;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::operation::get_object::GetObjectError;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use tokio::io::AsyncWriteExt;
use vidlens_core::media::DEFAULT_VIDEO_CONTENT_TYPE;
use vidlens_core::object_key::{object_key, ObjectUrlTemplate};

use crate::config::S3Config;
use crate::error::StorageError;
use crate::store::{FetchedObject, ObjectStore};

/// [`ObjectStore`] backed by an S3 bucket.
#[derive(Clone)]
pub struct S3ObjectStore {
    client: Client,
    urls: ObjectUrlTemplate,
    key_prefix: String,
}

impl S3ObjectStore {
    pub async fn new(config: &S3Config) -> Self {
        let loader = aws_config::from_env().region(Region::new(config.region.clone()));

        let aws_config = if let (Some(access_key), Some(secret_key)) =
            (&config.access_key_id, &config.secret_access_key)
        {
            let credentials = Credentials::new(
                access_key,
                secret_key,
                None,
                None,
                "StaticCredentialsProvider",
            );
            loader.credentials_provider(credentials).load().await
        } else {
            loader.load().await
        };

        let mut builder = aws_sdk_s3::config::Builder::from(&aws_config);
        if let Some(endpoint) = &config.endpoint {
            // S3-compatible stores are addressed as `{endpoint}/{bucket}/{key}`.
            builder = builder.endpoint_url(endpoint).force_path_style(true);
        }
        let client = Client::from_conf(builder.build());

        tracing::info!(
            bucket = %config.bucket,
            region = %config.region,
            endpoint = ?config.endpoint,
            "S3 object store configured"
        );

        Self {
            client,
            urls: ObjectUrlTemplate::new(&config.bucket, &config.region, config.endpoint.clone()),
            key_prefix: config.key_prefix.clone(),
        }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    fn key_for(&self, filename: &str) -> String {
        object_key(&self.key_prefix, filename)
    }

    async fn store(
        &self,
        bytes: Vec<u8>,
        content_type: &str,
        key: &str,
    ) -> Result<String, StorageError> {
        let size = bytes.len();
        self.client
            .put_object()
            .bucket(self.urls.bucket())
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(|e| StorageError::Upload {
                key: key.to_string(),
                message: DisplayErrorContext(&e).to_string(),
            })?;

        let url = self.urls.url_for_key(key);
        if url.is_empty() {
            return Err(StorageError::EmptyUrl(key.to_string()));
        }

        tracing::debug!(key, size, "Stored object in S3");
        Ok(url)
    }

    async fn fetch(&self, url: &str, dest: &Path) -> Result<FetchedObject, StorageError> {
        let key = self
            .urls
            .key_from_url(url)
            .map_err(|e| StorageError::InvalidUrl(e.to_string()))?;

        let response = self
            .client
            .get_object()
            .bucket(self.urls.bucket())
            .key(&key)
            .send()
            .await
            .map_err(|e| {
                if e.as_service_error().is_some_and(GetObjectError::is_no_such_key) {
                    StorageError::ObjectNotFound(key.clone())
                } else {
                    StorageError::Download {
                        key: key.clone(),
                        message: DisplayErrorContext(&e).to_string(),
                    }
                }
            })?;

        let content_type = response
            .content_type()
            .filter(|ct| !ct.is_empty())
            .unwrap_or(DEFAULT_VIDEO_CONTENT_TYPE)
            .to_string();

        let mut body = response.body;
        let mut file = tokio::fs::File::create(dest).await?;
        let mut size_bytes = 0u64;
        while let Some(chunk) = body.try_next().await.map_err(|e| StorageError::Download {
            key: key.clone(),
            message: e.to_string(),
        })? {
            file.write_all(&chunk).await?;
            size_bytes += chunk.len() as u64;
        }
        file.flush().await?;

        tracing::debug!(key = %key, size_bytes, content_type = %content_type, "Fetched object from S3");
        Ok(FetchedObject {
            content_type,
            size_bytes,
        })
    }
}
