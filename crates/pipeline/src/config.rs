use std::path::PathBuf;

/// Orchestrator settings loaded from environment variables.
#[derive(Debug, Clone, Default)]
pub struct PipelineConfig {
    /// Directory for downloaded media. `None` uses the OS temp dir.
    pub temp_dir: Option<PathBuf>,
}

impl PipelineConfig {
    /// | Env Var    | Default         |
    /// |------------|-----------------|
    /// | `TEMP_DIR` | OS temp dir     |
    pub fn from_env() -> Self {
        Self {
            temp_dir: std::env::var("TEMP_DIR")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        }
    }
}
