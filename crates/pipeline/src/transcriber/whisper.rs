use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use vidlens_core::media::DEFAULT_VIDEO_CONTENT_TYPE;
use vidlens_core::transcript::RawTranscript;

use super::{ensure_media_exists, Transcriber, TranscriptionError};

const TRANSCRIPTIONS_PATH: &str = "/v1/audio/transcriptions";

/// Settings for a Whisper-compatible transcription server.
#[derive(Debug, Clone)]
pub struct TranscriberConfig {
    /// Base URL, e.g. `http://localhost:8000`.
    pub api_url: String,
    pub model: String,
    /// Sent as a bearer token when set.
    pub api_key: Option<String>,
    /// Request timeout. `None` waits indefinitely.
    pub timeout_secs: Option<u64>,
}

impl TranscriberConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var                      | Default      |
    /// |------------------------------|--------------|
    /// | `WHISPER_API_URL`            | **required** |
    /// | `WHISPER_MODEL`              | `base`       |
    /// | `WHISPER_API_KEY`            | (none)       |
    /// | `TRANSCRIPTION_TIMEOUT_SECS` | (none)       |
    pub fn from_env() -> Self {
        let api_url = std::env::var("WHISPER_API_URL").expect("WHISPER_API_URL must be set");

        let timeout_secs = std::env::var("TRANSCRIPTION_TIMEOUT_SECS").ok().map(|v| {
            v.parse::<u64>()
                .expect("TRANSCRIPTION_TIMEOUT_SECS must be a valid u64")
        });

        Self {
            api_url,
            model: std::env::var("WHISPER_MODEL").unwrap_or_else(|_| "base".into()),
            api_key: std::env::var("WHISPER_API_KEY")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            timeout_secs,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}{TRANSCRIPTIONS_PATH}", self.api_url.trim_end_matches('/'))
    }
}

/// [`Transcriber`] that posts media to a Whisper-compatible HTTP server
/// (`/v1/audio/transcriptions`, verbose JSON with word timestamps).
pub struct WhisperHttpTranscriber {
    client: reqwest::Client,
    config: TranscriberConfig,
}

impl WhisperHttpTranscriber {
    pub fn new(config: TranscriberConfig) -> Self {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self { client, config }
    }

    fn form(&self, media: &Path, bytes: Vec<u8>) -> Result<Form, TranscriptionError> {
        let file_name = media
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "media.mp4".to_string());
        let part = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(DEFAULT_VIDEO_CONTENT_TYPE)?;

        Ok(Form::new()
            .part("file", part)
            .text("model", self.config.model.clone())
            .text("response_format", "verbose_json")
            .text("timestamp_granularities[]", "word")
            .text("timestamp_granularities[]", "segment"))
    }
}

#[async_trait]
impl Transcriber for WhisperHttpTranscriber {
    async fn transcribe(&self, media: &Path) -> Result<RawTranscript, TranscriptionError> {
        ensure_media_exists(media).await?;
        let bytes = tokio::fs::read(media).await?;
        let size = bytes.len();

        tracing::debug!(
            media = %media.display(),
            size,
            model = %self.config.model,
            "Sending media to transcription server"
        );

        let mut request = self
            .client
            .post(self.config.endpoint())
            .multipart(self.form(media, bytes)?);
        if let Some(key) = &self.config.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(TranscriptionError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str::<RawTranscript>(&body)
            .map_err(|e| TranscriptionError::InvalidResponse(e.to_string()))
    }
}
