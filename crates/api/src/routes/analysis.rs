use axum::routing::post;
use axum::Router;

use crate::handlers::analysis;
use crate::state::AppState;

/// Routes mounted at `/analysis`.
///
/// ```text
/// POST   /text                      analyze_text
/// POST   /segments                  analyze_segments
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/text", post(analysis::analyze_text))
        .route("/segments", post(analysis::analyze_segments))
}
