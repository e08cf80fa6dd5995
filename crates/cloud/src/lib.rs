//! Object Store Client: stores uploaded media and fetches it back to local
//! disk for transcription.

pub mod config;
pub mod error;
pub mod memory;
pub mod s3;
pub mod store;

pub use config::S3Config;
pub use error::StorageError;
pub use memory::InMemoryObjectStore;
pub use s3::S3ObjectStore;
pub use store::{FetchedObject, ObjectStore};
