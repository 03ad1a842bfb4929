mod archive;
mod config;
mod db;
mod decode;
mod errors;
mod extraction;
mod models;
mod resumes;
mod routes;
mod state;
mod storage;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::archive::DocumentArchive;
use crate::config::Config;
use crate::db::create_pool;
use crate::extraction::catalog::SKILL_CATALOG;
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::postgres::PgResumeStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;
    let store = Arc::new(PgResumeStore::new(db));

    // Initialize S3 / MinIO archive, if configured
    let archive = match &config.archive {
        Some(archive_config) => {
            let archive = DocumentArchive::connect(archive_config).await;
            info!("S3 archive enabled (bucket: {})", archive_config.s3_bucket);
            Some(archive)
        }
        None => {
            info!("S3_BUCKET not set, uploaded documents will not be archived");
            None
        }
    };

    info!("Skill catalog loaded ({} phrases)", SKILL_CATALOG.len());

    let state = AppState {
        store,
        archive,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
