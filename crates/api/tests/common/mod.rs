#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;
use vidlens_api::config::ServerConfig;
use vidlens_api::router::build_app_router;
use vidlens_api::state::AppState;
use vidlens_cloud::InMemoryObjectStore;
use vidlens_core::analysis::LexiconAnalyzer;
use vidlens_core::transcript::RawTranscript;
use vidlens_pipeline::{FakeTranscriber, InMemoryVideoStore, PipelineConfig, VideoPipeline};

pub const BOUNDARY: &str = "vidlens-test-boundary";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        max_upload_bytes: 1024 * 1024,
        project_name: "Video Analysis Platform".to_string(),
    }
}

/// The application wired to in-memory collaborators, with handles to
/// those collaborators for arranging failures and inspecting state.
pub struct TestApp {
    pub router: Router,
    pub objects: InMemoryObjectStore,
    pub transcriber: FakeTranscriber,
    pub videos: InMemoryVideoStore,
}

/// The transcript used by the end-to-end scenario.
pub fn hello_world() -> RawTranscript {
    serde_json::from_value(serde_json::json!({
        "text": "hello world",
        "segments": [
            {"start": 0.0, "end": 1.0, "text": "hello world", "confidence": 0.9, "words": []}
        ]
    }))
    .unwrap()
}

/// Build the full application router (same middleware stack as `main.rs`)
/// around in-memory fakes.
pub fn build_test_app(transcriber: FakeTranscriber) -> TestApp {
    build_test_app_with_config(transcriber, test_config())
}

/// Like [`build_test_app`] with a caller-supplied server configuration.
pub fn build_test_app_with_config(transcriber: FakeTranscriber, config: ServerConfig) -> TestApp {
    let objects = InMemoryObjectStore::new("test-bucket", "videos");
    let videos = InMemoryVideoStore::new();

    let pipeline = VideoPipeline::new(
        Arc::new(objects.clone()),
        Arc::new(transcriber.clone()),
        Arc::new(videos.clone()),
        PipelineConfig::default(),
    );

    let state = AppState {
        pipeline: Arc::new(pipeline),
        analyzer: Arc::new(LexiconAnalyzer::new()),
        config: Arc::new(config.clone()),
    };

    TestApp {
        router: build_app_router(state, &config),
        objects,
        transcriber,
        videos,
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: &TestApp, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.router.clone().oneshot(request).await.unwrap()
}

pub async fn post_empty(app: &TestApp, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.router.clone().oneshot(request).await.unwrap()
}

pub async fn post_json(app: &TestApp, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.router.clone().oneshot(request).await.unwrap()
}

/// A multipart body holding one `file` part.
pub fn multipart_file(filename: &str, content_type: &str, bytes: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n\
             Content-Type: {content_type}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub async fn post_multipart(app: &TestApp, uri: &str, body: Vec<u8>) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap();
    app.router.clone().oneshot(request).await.unwrap()
}

/// Upload `bytes` as `filename` with the given content type.
pub async fn upload(app: &TestApp, filename: &str, content_type: &str, bytes: &[u8]) -> Response {
    post_multipart(
        app,
        "/api/v1/videos/upload",
        multipart_file(filename, content_type, bytes),
    )
    .await
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
