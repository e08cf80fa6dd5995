use std::fmt::Debug;
use std::str::FromStr;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Allowed CORS origins. A single `*` allows any origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds. Transcription runs inside the
    /// request, so this bounds the longest video that can be processed.
    pub request_timeout_secs: u64,
    /// Largest accepted request body, in bytes.
    pub max_upload_bytes: usize,
    pub project_name: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                   |
    /// |------------------------|---------------------------|
    /// | `HOST`                 | `0.0.0.0`                 |
    /// | `PORT`                 | `3000`                    |
    /// | `CORS_ORIGINS`         | `*` (comma separated)     |
    /// | `REQUEST_TIMEOUT_SECS` | `900`                     |
    /// | `MAX_UPLOAD_BYTES`     | `1073741824` (1 GiB)      |
    /// | `PROJECT_NAME`         | `Video Analysis Platform` |
    ///
    /// Panics on values that do not parse.
    pub fn from_env() -> Self {
        Self {
            host: env_or("HOST", "0.0.0.0"),
            port: parse_env("PORT", 3000),
            cors_origins: parse_origins(&env_or("CORS_ORIGINS", "*")),
            request_timeout_secs: parse_env("REQUEST_TIMEOUT_SECS", 900),
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", 1024 * 1024 * 1024),
            project_name: env_or("PROJECT_NAME", "Video Analysis Platform"),
        }
    }

    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|o| o == "*")
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T>(key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: Debug,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .unwrap_or_else(|e| panic!("{key} must be a valid number, got '{raw}': {e:?}")),
        Err(_) => default,
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
