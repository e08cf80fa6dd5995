use axum::routing::{get, post};
use axum::Router;

use crate::handlers::video;
use crate::state::AppState;

/// Routes mounted at `/videos`.
///
/// ```text
/// GET    /                          list (?limit, offset)
/// POST   /upload                    upload (multipart)
/// GET    /{video_id}                get_by_id
/// POST   /{video_id}/transcribe     transcribe
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(video::list))
        .route("/upload", post(video::upload))
        .route("/{video_id}", get(video::get_by_id))
        .route("/{video_id}/transcribe", post(video::transcribe))
}
