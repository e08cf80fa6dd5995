use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;
use vidlens_core::transcript::RawTranscript;

use super::{ensure_media_exists, Transcriber, TranscriptionError};

#[derive(Debug, Clone)]
enum Outcome {
    Transcript(RawTranscript),
    Failure(String),
}

/// Scripted [`Transcriber`] for tests: returns a fixed transcript or fails
/// with a fixed message, and records how often it ran. An optional delay
/// stands in for a long-running engine.
#[derive(Clone)]
pub struct FakeTranscriber {
    outcome: Arc<Mutex<Outcome>>,
    calls: Arc<Mutex<usize>>,
    delay: Option<Duration>,
}

impl FakeTranscriber {
    pub fn returning(transcript: RawTranscript) -> Self {
        Self {
            outcome: Arc::new(Mutex::new(Outcome::Transcript(transcript))),
            calls: Arc::new(Mutex::new(0)),
            delay: None,
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            outcome: Arc::new(Mutex::new(Outcome::Failure(message.to_string()))),
            calls: Arc::new(Mutex::new(0)),
            delay: None,
        }
    }

    /// Sleep for `delay` before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Switch to returning `transcript` from now on.
    pub async fn set_transcript(&self, transcript: RawTranscript) {
        *self.outcome.lock().await = Outcome::Transcript(transcript);
    }

    pub async fn calls(&self) -> usize {
        *self.calls.lock().await
    }
}

#[async_trait]
impl Transcriber for FakeTranscriber {
    async fn transcribe(&self, media: &Path) -> Result<RawTranscript, TranscriptionError> {
        ensure_media_exists(media).await?;
        *self.calls.lock().await += 1;
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match &*self.outcome.lock().await {
            Outcome::Transcript(transcript) => Ok(transcript.clone()),
            Outcome::Failure(message) => Err(TranscriptionError::Engine(message.clone())),
        }
    }
}
