//! Persistence of parsed resumes, keyed by user.
//!
//! `AppState` holds an `Arc<dyn ResumeStore>` so handlers never touch a concrete backend.

#[cfg(test)]
pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::decode::DocumentKind;
use crate::errors::AppError;
use crate::extraction::ParsedResume;
use crate::models::resume::ParsedResumeRow;

/// Everything recorded for one successful parse.
pub struct NewParse<'a> {
    pub id: Uuid,
    pub user_id: Uuid,
    pub resume: &'a ParsedResume,
    pub raw_text: &'a str,
    pub source_kind: DocumentKind,
    pub archive_key: Option<&'a str>,
}

#[async_trait]
pub trait ResumeStore: Send + Sync {
    /// Stores a parse and stamps it with the current time.
    async fn save(&self, parse: NewParse<'_>) -> Result<ParsedResumeRow, AppError>;

    /// All parses for a user, most recent first.
    async fn history(&self, user_id: Uuid) -> Result<Vec<ParsedResumeRow>, AppError>;

    async fn get(&self, user_id: Uuid, id: Uuid) -> Result<Option<ParsedResumeRow>, AppError>;

    /// Removes every parse for a user and returns how many were removed.
    async fn clear(&self, user_id: Uuid) -> Result<u64, AppError>;
}
