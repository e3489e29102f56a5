//! PDF text extraction for uploaded resumes.

use crate::errors::AppError;

/// Extracts the concatenated page text of an uploaded PDF, pages in order.
/// A corrupt or unreadable file is a typed error, never silently empty
/// text. A valid PDF with no text layer (scanned images) extracts to an
/// empty string and is the caller's degraded-input case.
pub fn extract_text(data: &[u8]) -> Result<String, AppError> {
    pdf_extract::extract_text_from_mem(data)
        .map_err(|e| AppError::Extraction(format!("could not read PDF: {e}")))
}
