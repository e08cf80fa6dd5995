/// S3 connection settings loaded from environment variables.
#[derive(Debug, Clone)]
pub struct S3Config {
    /// Static access key. When either key is missing the default AWS
    /// credential chain is used.
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    pub bucket: String,
    pub region: String,
    /// Custom endpoint for S3-compatible stores (MinIO, LocalStack).
    pub endpoint: Option<String>,
    /// Namespace prefix for uploaded media keys.
    pub key_prefix: String,
}

impl S3Config {
    /// Load configuration from environment variables.
    ///
    /// | Env Var                 | Default        |
    /// |-------------------------|----------------|
    /// | `AWS_ACCESS_KEY_ID`     | (credential chain) |
    /// | `AWS_SECRET_ACCESS_KEY` | (credential chain) |
    /// | `AWS_BUCKET_NAME`       | **required**   |
    /// | `AWS_REGION`            | `us-east-1`    |
    /// | `S3_ENDPOINT_URL`       | (AWS)          |
    /// | `S3_KEY_PREFIX`         | `videos`       |
    pub fn from_env() -> Self {
        let bucket = std::env::var("AWS_BUCKET_NAME").expect("AWS_BUCKET_NAME must be set");

        Self {
            access_key_id: non_empty_var("AWS_ACCESS_KEY_ID"),
            secret_access_key: non_empty_var("AWS_SECRET_ACCESS_KEY"),
            bucket,
            region: std::env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".into()),
            endpoint: non_empty_var("S3_ENDPOINT_URL"),
            key_prefix: std::env::var("S3_KEY_PREFIX").unwrap_or_else(|_| "videos".into()),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
