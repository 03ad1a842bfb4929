use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::archive::DocumentArchive;
use crate::decode::{decode, DocumentKind};
use crate::errors::AppError;
use crate::extraction::skills::display_skills;
use crate::extraction::{extract_fields, ParsedResume};
use crate::models::resume::ParsedResumeRow;
use crate::storage::{NewParse, ResumeStore};

/// An uploaded file as received from the multipart body.
pub struct UploadedDocument {
    pub bytes: Bytes,
    pub content_type: Option<String>,
    pub file_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    #[serde(flatten)]
    pub resume: ParsedResume,
    pub skills_list: Vec<String>,
}

impl From<ParsedResume> for ExtractResponse {
    fn from(resume: ParsedResume) -> Self {
        let skills_list = display_skills(&resume.skills);
        Self {
            resume,
            skills_list,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub parsed_on: DateTime<Utc>,
    pub source_kind: String,
    #[serde(flatten)]
    pub resume: ParsedResume,
    pub skills_list: Vec<String>,
}

impl From<&ParsedResumeRow> for HistoryEntry {
    fn from(row: &ParsedResumeRow) -> Self {
        Self {
            id: row.id,
            parsed_on: row.parsed_on,
            source_kind: row.source_kind.clone(),
            resume: row.resume(),
            skills_list: display_skills(&row.skills),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ParseResponse {
    #[serde(flatten)]
    pub entry: HistoryEntry,
    pub raw_text: String,
}

/// Decodes an upload, extracts its fields, optionally archives the source file
/// and records the result for `user_id`.
///
/// The document type is checked before anything is decoded, so unsupported
/// uploads never reach extraction or storage.
pub async fn ingest_document(
    store: &dyn ResumeStore,
    archive: Option<&DocumentArchive>,
    user_id: Uuid,
    document: UploadedDocument,
) -> Result<ParseResponse, AppError> {
    let kind = DocumentKind::detect(
        document.content_type.as_deref(),
        document.file_name.as_deref(),
    )
    .inspect_err(|e| warn!("Rejected upload from user {user_id}: {e}"))?;

    let bytes = document.bytes.clone();
    let raw_text = tokio::task::spawn_blocking(move || decode(&bytes, kind))
        .await
        .map_err(|e| anyhow::anyhow!("Decode task failed: {e}"))?
        .inspect_err(|e| {
            warn!(
                "Failed to decode {} upload from user {user_id}: {e}",
                kind.as_str()
            )
        })?;

    let resume = extract_fields(&raw_text);

    let id = Uuid::new_v4();
    let archive_key = match archive {
        Some(archive) => Some(
            archive
                .put_document(user_id, id, kind, document.bytes)
                .await?,
        ),
        None => None,
    };

    let row = store
        .save(NewParse {
            id,
            user_id,
            resume: &resume,
            raw_text: &raw_text,
            source_kind: kind,
            archive_key: archive_key.as_deref(),
        })
        .await?;

    info!(
        "Parsed {} resume {} for user {user_id} ({} chars)",
        kind.as_str(),
        row.id,
        raw_text.len()
    );

    Ok(ParseResponse {
        entry: HistoryEntry::from(&row),
        raw_text: row.raw_text,
    })
}
