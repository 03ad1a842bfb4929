use axum::{
    extract::{multipart::MultipartError, Multipart, Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extraction::extract_fields;
use crate::resumes::export::{export_resume, ExportFormat};
use crate::resumes::ingest::{
    ingest_document, ExtractRequest, ExtractResponse, HistoryEntry, ParseResponse,
    UploadedDocument,
};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Deserialize)]
pub struct ExportQuery {
    pub user_id: Uuid,
    #[serde(default)]
    pub format: ExportFormat,
}

#[derive(Serialize)]
pub struct ClearHistoryResponse {
    pub deleted: u64,
}

/// POST /api/v1/resumes/extract
pub async fn handle_extract(Json(req): Json<ExtractRequest>) -> Json<ExtractResponse> {
    Json(extract_fields(&req.text).into())
}

/// POST /api/v1/resumes/parse
/// Multipart body with a `user_id` text field and a `file` field.
pub async fn handle_parse(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ParseResponse>, AppError> {
    let mut user_id: Option<Uuid> = None;
    let mut document: Option<UploadedDocument> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error("Invalid multipart body", e))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "user_id" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| multipart_error("Invalid user_id field", e))?;
                let parsed = Uuid::parse_str(value.trim())
                    .map_err(|_| AppError::Validation(format!("Invalid user_id '{value}'")))?;
                user_id = Some(parsed);
            }
            "file" => {
                let content_type = field.content_type().map(String::from);
                let file_name = field.file_name().map(String::from);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| multipart_error("Invalid file field", e))?;
                document = Some(UploadedDocument {
                    bytes,
                    content_type,
                    file_name,
                });
            }
            _ => {}
        }
    }

    let user_id = user_id.ok_or_else(|| AppError::Validation("Missing user_id field".to_string()))?;
    let document = document.ok_or_else(|| AppError::Validation("Missing file field".to_string()))?;
    if document.bytes.is_empty() {
        return Err(AppError::Validation("Uploaded file is empty".to_string()));
    }

    let response = ingest_document(
        state.store.as_ref(),
        state.archive.as_ref(),
        user_id,
        document,
    )
    .await?;
    Ok(Json(response))
}

/// Oversized uploads surface as multipart read errors; keep their 413.
fn multipart_error(context: &str, e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(e.body_text())
    } else {
        AppError::Validation(format!("{context}: {e}"))
    }
}

/// GET /api/v1/resumes/history
pub async fn handle_history(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<HistoryEntry>>, AppError> {
    let rows = state.store.history(params.user_id).await?;
    Ok(Json(rows.iter().map(HistoryEntry::from).collect()))
}

/// DELETE /api/v1/resumes/history
pub async fn handle_clear_history(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<ClearHistoryResponse>, AppError> {
    let deleted = state.store.clear(params.user_id).await?;
    info!("User {} cleared {deleted} history entries", params.user_id);
    Ok(Json(ClearHistoryResponse { deleted }))
}

/// GET /api/v1/resumes/:id/export
pub async fn handle_export(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<ExportQuery>,
) -> Result<Response, AppError> {
    let row = state
        .store
        .get(params.user_id, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Parsed resume {id} not found")))?;

    let file = export_resume(&row.resume(), params.format)?;
    Ok((
        [
            (header::CONTENT_TYPE, file.content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file.file_name),
            ),
        ],
        file.body,
    )
        .into_response())
}
