use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use vidlens_api::config::ServerConfig;
use vidlens_api::router::build_app_router;
use vidlens_api::state::AppState;
use vidlens_cloud::{S3Config, S3ObjectStore};
use vidlens_core::analysis::LexiconAnalyzer;
use vidlens_db::DbPool;
use vidlens_pipeline::{
    PgVideoStore, PipelineConfig, TranscriberConfig, VideoPipeline, WhisperHttpTranscriber,
};

const DEFAULT_LOG_FILTER: &str = "vidlens_api=debug,vidlens_pipeline=debug,tower_http=debug";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ServerConfig::from_env();
    tracing::info!(
        project = %config.project_name,
        max_upload_bytes = config.max_upload_bytes,
        request_timeout_secs = config.request_timeout_secs,
        "Loaded server configuration"
    );

    let pool = connect_database().await;
    let pipeline = build_pipeline(pool).await;

    let state = AppState {
        pipeline: Arc::new(pipeline),
        analyzer: Arc::new(LexiconAnalyzer::new()),
        config: Arc::new(config.clone()),
    };
    let app = build_app_router(state, &config);

    let addr = SocketAddr::new(
        config.host.parse().expect("HOST must be an IP address"),
        config.port,
    );
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    tracing::info!(%addr, "Video analysis API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Server stopped");
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Connect, verify, and migrate. Any failure aborts startup.
async fn connect_database() -> DbPool {
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = vidlens_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    vidlens_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    vidlens_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database ready");
    pool
}

/// Wire the production collaborators: S3, the Whisper server, Postgres.
async fn build_pipeline(pool: DbPool) -> VideoPipeline {
    let s3_config = S3Config::from_env();
    tracing::info!(
        bucket = %s3_config.bucket,
        region = %s3_config.region,
        key_prefix = %s3_config.key_prefix,
        "Object storage configured"
    );
    let objects = S3ObjectStore::new(&s3_config).await;

    let transcriber_config = TranscriberConfig::from_env();
    tracing::info!(
        api_url = %transcriber_config.api_url,
        model = %transcriber_config.model,
        "Transcription server configured"
    );

    VideoPipeline::new(
        Arc::new(objects),
        Arc::new(WhisperHttpTranscriber::new(transcriber_config)),
        Arc::new(PgVideoStore::new(pool)),
        PipelineConfig::from_env(),
    )
}

/// Resolve on SIGINT or SIGTERM. Requests already in flight, including
/// long transcriptions, finish before the server exits.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received SIGINT, shutting down"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
