use std::sync::Arc;

use vidlens_core::analysis::TextAnalyzer;
use vidlens_pipeline::VideoPipeline;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything inside is behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Upload and transcribe workflows.
    pub pipeline: Arc<VideoPipeline>,
    /// Text Analysis Engine.
    pub analyzer: Arc<dyn TextAnalyzer>,
    pub config: Arc<ServerConfig>,
}
