pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::resumes::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/resumes/extract", post(handlers::handle_extract))
        .route("/api/v1/resumes/parse", post(handlers::handle_parse))
        .route(
            "/api/v1/resumes/history",
            get(handlers::handle_history).delete(handlers::handle_clear_history),
        )
        .route("/api/v1/resumes/:id/export", get(handlers::handle_export))
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}
