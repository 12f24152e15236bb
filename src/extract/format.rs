//! File format classification.

use std::path::Path;

/// Supported document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Pdf,
    Spreadsheet,
    Word,
    PlainText,
}

impl FileFormat {
    /// Human-readable format name for diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            FileFormat::Pdf => "PDF",
            FileFormat::Spreadsheet => "spreadsheet",
            FileFormat::Word => "Word document",
            FileFormat::PlainText => "text file",
        }
    }

    /// Message returned when a valid document yields no text.
    pub fn no_text_message(&self) -> &'static str {
        match self {
            FileFormat::Pdf => {
                "No readable text found in PDF (it may be scanned or image-based)."
            }
            FileFormat::Spreadsheet => "No readable text found in spreadsheet.",
            FileFormat::Word => "No readable text found in Word document.",
            FileFormat::PlainText => "No readable text found in text file.",
        }
    }
}

/// Classify a path into a supported format, or `None` if unrecognized.
///
/// Checks are ordered and the first match wins: the literal path suffix is
/// consulted before the extension-table MIME guess, and the MIME fallback is a
/// substring match on the guessed type. Callers must not reorder these checks;
/// ambiguous files (e.g. `.ods` spreadsheets, legacy `.doc`) are classified by
/// whichever substring their guessed MIME type happens to contain. No file
/// content is ever inspected.
pub fn classify(path: &Path) -> Option<FileFormat> {
    let name = path.to_string_lossy();

    if name.ends_with(".pdf") {
        return Some(FileFormat::Pdf);
    }

    let mime = mime_guess::from_path(path)
        .first_raw()
        .unwrap_or_default();

    if name.ends_with(".xlsx") || mime.contains("spreadsheet") {
        Some(FileFormat::Spreadsheet)
    } else if name.ends_with(".docx") || mime.contains("word") {
        Some(FileFormat::Word)
    } else if name.ends_with(".txt") || mime.contains("text") {
        Some(FileFormat::PlainText)
    } else {
        None
    }
}
