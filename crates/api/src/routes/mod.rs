pub mod analysis;
pub mod health;
pub mod video;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /videos                                          list
/// /videos/upload                                   upload (multipart)
/// /videos/{video_id}                               get
/// /videos/{video_id}/transcribe                    transcribe
///
/// /analysis/text                                   analyze text
/// /analysis/segments                               analyze transcript segments
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/videos", video::router())
        .nest("/analysis", analysis::router())
}
