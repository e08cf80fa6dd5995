use thiserror::Error;

/// Errors that can occur when storing or fetching media objects.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The store accepted the upload but produced no usable URL.
    #[error("Storage returned an empty URL for key {0}")]
    EmptyUrl(String),

    #[error("Failed to upload object {key}: {message}")]
    Upload { key: String, message: String },

    #[error("Object with key {0} not found")]
    ObjectNotFound(String),

    #[error("Failed to download object {key}: {message}")]
    Download { key: String, message: String },

    /// The URL does not match the configured bucket's URL shape.
    #[error("Invalid object URL: {0}")]
    InvalidUrl(String),

    #[error("Local file error: {0}")]
    Io(#[from] std::io::Error),
}
