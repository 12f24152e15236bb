//! PDF text extraction.

use super::ExtractError;

/// Extract the text layer from a PDF document.
///
/// Returns the whole-document text; scanned or image-only PDFs yield an empty
/// string, which the dispatcher turns into a no-text diagnostic.
pub(super) fn extract(bytes: &[u8]) -> Result<String, ExtractError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractError::Corrupt {
        format: "PDF",
        message: e.to_string(),
    })
}
