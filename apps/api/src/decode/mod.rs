//! Decoding of uploaded resume documents into plain text.
//!
//! The declared document type decides which decoder runs. Anything that is not a
//! PDF or a word-processing document is rejected before any bytes are read.

pub mod docx;
pub mod pdf;

use thiserror::Error;

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
/// Generic binary uploads are treated as DOCX.
pub const BINARY_MIME: &str = "application/octet-stream";

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    #[error("PDF text extraction failed: {0}")]
    Pdf(String),

    #[error("DOCX text extraction failed: {0}")]
    Docx(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Resolves a declared MIME type. Parameters such as `; charset=...` are ignored.
    pub fn from_mime(mime: &str) -> Result<Self, DecodeError> {
        let essence = mime
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        match essence.as_str() {
            PDF_MIME => Ok(DocumentKind::Pdf),
            DOCX_MIME | BINARY_MIME => Ok(DocumentKind::Docx),
            _ => Err(DecodeError::UnsupportedFormat(mime.to_string())),
        }
    }

    /// Uses the declared content type when present, otherwise the file extension.
    pub fn detect(content_type: Option<&str>, file_name: Option<&str>) -> Result<Self, DecodeError> {
        if let Some(ct) = content_type.filter(|ct| !ct.trim().is_empty()) {
            return Self::from_mime(ct);
        }
        let name = file_name.unwrap_or_default().to_ascii_lowercase();
        if name.ends_with(".pdf") {
            Ok(DocumentKind::Pdf)
        } else if name.ends_with(".docx") {
            Ok(DocumentKind::Docx)
        } else {
            Err(DecodeError::UnsupportedFormat(if name.is_empty() {
                "unknown".to_string()
            } else {
                name
            }))
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => "pdf",
            DocumentKind::Docx => "docx",
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => PDF_MIME,
            DocumentKind::Docx => DOCX_MIME,
        }
    }
}

/// Decodes a document whose type was resolved with [`DocumentKind::detect`].
/// Decoded text never contains NUL; Postgres TEXT columns reject it.
pub fn decode(bytes: &[u8], kind: DocumentKind) -> Result<String, DecodeError> {
    let text = match kind {
        DocumentKind::Pdf => pdf::extract_text(bytes)?,
        DocumentKind::Docx => docx::extract_text(bytes)?,
    };
    Ok(text.replace('\0', ""))
}
