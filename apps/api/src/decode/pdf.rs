use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::decode::DecodeError;

/// Extracts page-ordered text from an in-memory PDF.
///
/// `pdf-extract` panics on some malformed documents, so a panic is reported as
/// an ordinary decode failure.
pub fn extract_text(bytes: &[u8]) -> Result<String, DecodeError> {
    match catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem(bytes))) {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(DecodeError::Pdf(e.to_string())),
        Err(_) => Err(DecodeError::Pdf("PDF parser aborted on malformed input".to_string())),
    }
}
