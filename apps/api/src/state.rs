use std::sync::Arc;

use crate::archive::DocumentArchive;
use crate::config::Config;
use crate::storage::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable persistence. Postgres in production, in-memory in tests.
    pub store: Arc<dyn ResumeStore>,
    /// Source document archive; `None` when S3 is not configured.
    pub archive: Option<DocumentArchive>,
    pub config: Config,
}
