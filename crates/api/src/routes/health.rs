use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Root liveness payload.
#[derive(Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
}

/// GET / -- identifies the service.
async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Video Analysis API",
    })
}

/// GET /health -- static liveness check; does not touch dependencies.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Mount liveness routes (root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
}
