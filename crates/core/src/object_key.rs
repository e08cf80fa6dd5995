//! Object-store key and public URL contract.
//!
//! The URL returned by an upload is persisted as `videos.s3_url` and later
//! parsed back into a key by the transcribe workflow. Both directions are
//! produced here from the same [`ObjectUrlTemplate`] so they cannot drift.
//!
//! Expected URL shapes:
//!
//! ```text
//! AWS:        https://{bucket}.s3.{region}.amazonaws.com/{key}
//! Endpoint:   {endpoint}/{bucket}/{key}       (S3-compatible stores)
//! ```
//!
//! A URL that does not start with the exact prefix for the configured
//! bucket is rejected rather than guessed at.

use crate::error::CoreError;

/// Build the deterministic object key for an uploaded file.
///
/// Only the final path component of `filename` is kept. Re-uploading the
/// same filename yields the same key and overwrites the stored object.
///
/// ```
/// use vidlens_core::object_key::object_key;
///
/// assert_eq!(object_key("videos", "talk.mp4"), "videos/talk.mp4");
/// assert_eq!(object_key("/videos/", "C:\\clips\\talk.mp4"), "videos/talk.mp4");
/// assert_eq!(object_key("", "talk.mp4"), "talk.mp4");
/// ```
pub fn object_key(prefix: &str, filename: &str) -> String {
    let base = file_basename(filename);
    let prefix = prefix.trim_matches('/');
    if prefix.is_empty() {
        base.to_string()
    } else {
        format!("{prefix}/{base}")
    }
}

/// Final path component of `filename`, splitting on `/` and `\`.
///
/// Empty when `filename` is empty or ends in a separator.
pub fn file_basename(filename: &str) -> &str {
    filename
        .rsplit(&['/', '\\'][..])
        .next()
        .unwrap_or(filename)
}

/// Renders and parses public object URLs for one bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectUrlTemplate {
    bucket: String,
    region: String,
    endpoint: Option<String>,
}

impl ObjectUrlTemplate {
    pub fn new(
        bucket: impl Into<String>,
        region: impl Into<String>,
        endpoint: Option<String>,
    ) -> Self {
        Self {
            bucket: bucket.into(),
            region: region.into(),
            endpoint: endpoint.map(|e| e.trim_end_matches('/').to_string()),
        }
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Everything in a URL that precedes the key, including the trailing `/`.
    fn prefix(&self) -> String {
        match &self.endpoint {
            Some(endpoint) => format!("{endpoint}/{}/", self.bucket),
            None => format!("https://{}.s3.{}.amazonaws.com/", self.bucket, self.region),
        }
    }

    /// Public URL for `key`.
    pub fn url_for_key(&self, key: &str) -> String {
        format!("{}{key}", self.prefix())
    }

    /// Recover the object key from a URL produced by [`Self::url_for_key`].
    pub fn key_from_url(&self, url: &str) -> Result<String, CoreError> {
        let prefix = self.prefix();
        match url.strip_prefix(prefix.as_str()) {
            Some(key) if !key.is_empty() => Ok(key.to_string()),
            _ => Err(CoreError::Validation(format!(
                "URL '{url}' does not match the expected object URL prefix '{prefix}'"
            ))),
        }
    }
}
