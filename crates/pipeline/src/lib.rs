//! Pipeline Orchestrator and its collaborators.
//!
//! [`VideoPipeline`] sequences the upload workflow (validate, store, record)
//! and the transcribe workflow (download, transcribe, persist), translating
//! failures into persisted status transitions.

pub mod config;
pub mod error;
pub mod orchestrator;
pub mod store;
pub mod transcriber;

pub use config::PipelineConfig;
pub use error::{PipelineError, ProcessingError};
pub use orchestrator::{NewUpload, TranscribedVideo, UploadedVideo, VideoPipeline};
pub use store::{InMemoryVideoStore, PgVideoStore, VideoStore};
pub use transcriber::{
    FakeTranscriber, Transcriber, TranscriberConfig, TranscriptionError, WhisperHttpTranscriber,
};
