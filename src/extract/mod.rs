//! Multi-format document extraction.
//!
//! Given a filesystem path, classify the file by extension (with a guessed-MIME
//! fallback) and return its textual content. The typed API ([`extract`]) keeps
//! success, empty-document, and failure cases distinct; the tool-boundary API
//! ([`extract_to_string`]) flattens everything to a single string so an agent
//! tool call always "succeeds" with a textual payload.
//!
//! Extraction is synchronous and stateless: each call reads exactly one file,
//! holds no handles after returning, and touches no shared state. Async
//! callers should offload it with `spawn_blocking`.

mod format;
mod pdf;
mod sheet;
mod text;
mod word;

pub use format::{classify, FileFormat};

use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Outcome of a successful parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// Extracted textual content. May be empty for plain text files.
    Text(String),
    /// The document parsed cleanly but contained no extractable text.
    Empty(FileFormat),
}

/// Failure taxonomy for extraction.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The path matched no supported format. No extraction was attempted.
    #[error("Unsupported file format: {0}")]
    Unsupported(String),

    /// The file could not be opened (missing, permission denied, ...).
    #[error("could not open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file opened but its structure could not be parsed.
    #[error("malformed {format} file: {message}")]
    Corrupt {
        format: &'static str,
        message: String,
    },

    /// The file is not valid UTF-8 text.
    #[error("could not decode {path} as UTF-8: {message}")]
    Decode { path: String, message: String },
}

/// Extract the textual content of the file at `path`.
///
/// Classification is extension-first with a MIME-substring fallback (see
/// [`classify`]); the first matching handler wins. Every format except plain
/// text maps a whitespace-only result to [`Extraction::Empty`] so callers can
/// tell "no text layer" apart from "parse failed".
pub fn extract(path: &Path) -> Result<Extraction, ExtractError> {
    let Some(format) = classify(path) else {
        return Err(ExtractError::Unsupported(path.display().to_string()));
    };

    debug!("extracting {} as {}", path.display(), format.label());

    let bytes = std::fs::read(path).map_err(|source| ExtractError::Open {
        path: path.display().to_string(),
        source,
    })?;

    let content = match format {
        FileFormat::Pdf => pdf::extract(&bytes)?,
        FileFormat::Spreadsheet => sheet::extract(&bytes)?,
        FileFormat::Word => word::extract(&bytes)?,
        // Plain text keeps its own contract: empty in, empty string out.
        FileFormat::PlainText => return text::extract(path, bytes),
    };

    if content.trim().is_empty() {
        Ok(Extraction::Empty(format))
    } else {
        Ok(Extraction::Text(content))
    }
}

/// Tool-boundary wrapper: always returns a string, never an error.
///
/// Failures become human-readable diagnostics so the calling agent loop gets
/// a textual payload on every input, including missing or corrupt files.
pub fn extract_to_string(path: &str) -> String {
    match extract(Path::new(path)) {
        Ok(Extraction::Text(content)) => content,
        Ok(Extraction::Empty(format)) => format.no_text_message().to_string(),
        Err(err @ ExtractError::Unsupported(_)) => err.to_string(),
        Err(err) => format!("An error occurred while reading the file: {}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_file(suffix: &str, content: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(suffix)
            .tempfile()
            .unwrap();
        file.write_all(content).unwrap();
        file.flush().unwrap();
        file
    }

    /// Build a minimal DOCX archive with the given paragraphs.
    fn docx_bytes(paragraphs: &[&str]) -> Vec<u8> {
        let body = paragraphs
            .iter()
            .map(|p| format!("<w:p><w:r><w:t>{}</w:t></w:r></w:p>", p))
            .collect::<String>();
        let xml = format!("<w:document><w:body>{}</w:body></w:document>", body);

        let mut cursor = std::io::Cursor::new(Vec::new());
        let mut writer = zip::ZipWriter::new(&mut cursor);
        let options = zip::write::SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Stored);
        writer.start_file("word/document.xml", options).unwrap();
        writer.write_all(xml.as_bytes()).unwrap();
        writer.finish().unwrap();
        cursor.into_inner()
    }

    #[test]
    fn test_plain_text_verbatim() {
        let file = temp_file(".txt", b"hello\nworld");
        let path = file.path().to_str().unwrap();
        assert_eq!(extract_to_string(path), "hello\nworld");
    }

    #[test]
    fn test_empty_plain_text_returns_empty_string() {
        // Unlike every other format, an empty text file is not a diagnostic.
        let file = temp_file(".txt", b"");
        let path = file.path().to_str().unwrap();
        assert_eq!(extract_to_string(path), "");
    }

    #[test]
    fn test_plain_text_invalid_utf8_is_diagnostic() {
        let file = temp_file(".txt", &[0xff, 0xfe, 0x00, 0x01]);
        let path = file.path().to_str().unwrap();
        let result = extract_to_string(path);
        assert!(result.to_lowercase().contains("error"), "got: {}", result);
    }

    #[test]
    fn test_unsupported_format_names_the_path() {
        let result = extract_to_string("/some/dir/archive.xyz");
        assert!(result.to_lowercase().contains("unsupported"), "got: {}", result);
        assert!(result.contains("/some/dir/archive.xyz"));
    }

    #[test]
    fn test_nonexistent_file_is_diagnostic_not_panic() {
        let result = extract_to_string("/definitely/not/here.txt");
        assert!(result.to_lowercase().contains("error"), "got: {}", result);
    }

    #[test]
    fn test_nonexistent_typed_error_is_open() {
        let err = extract(Path::new("/definitely/not/here.pdf")).unwrap_err();
        assert!(matches!(err, ExtractError::Open { .. }));
    }

    #[test]
    fn test_word_paragraphs_joined_with_newlines() {
        let file = temp_file(".docx", &docx_bytes(&["Title", "Body text"]));
        let path = file.path().to_str().unwrap();
        assert_eq!(extract_to_string(path), "Title\nBody text");
    }

    #[test]
    fn test_word_without_text_is_no_text_diagnostic() {
        let file = temp_file(".docx", &docx_bytes(&[]));
        let path = file.path().to_str().unwrap();
        assert_eq!(
            extract(file.path()).unwrap(),
            Extraction::Empty(FileFormat::Word)
        );
        assert_eq!(extract_to_string(path), FileFormat::Word.no_text_message());
    }

    #[test]
    fn test_corrupt_word_document_is_diagnostic() {
        let file = temp_file(".docx", b"not a zip archive at all");
        let path = file.path().to_str().unwrap();
        let result = extract_to_string(path);
        assert!(result.to_lowercase().contains("error"), "got: {}", result);
    }

    #[test]
    fn test_corrupt_pdf_is_diagnostic() {
        let file = temp_file(".pdf", b"%NOT-A-PDF");
        let path = file.path().to_str().unwrap();
        let result = extract_to_string(path);
        assert!(result.to_lowercase().contains("error"), "got: {}", result);
    }

    #[test]
    fn test_no_text_messages_are_distinct_from_unsupported() {
        // A scanned PDF reports missing text, not an unsupported format.
        let pdf_msg = FileFormat::Pdf.no_text_message();
        assert!(pdf_msg.contains("scanned"));
        assert!(!pdf_msg.to_lowercase().contains("unsupported"));
    }

    #[test]
    fn test_extract_is_idempotent() {
        let file = temp_file(".txt", b"same every time");
        let path = file.path().to_str().unwrap();
        assert_eq!(extract_to_string(path), extract_to_string(path));
    }

    #[test]
    fn test_extension_check_runs_before_mime_guess() {
        // A .txt suffix on a file holding binary-ish but valid UTF-8 content
        // still routes to the plain text handler.
        let file = temp_file(".txt", b"PK\x03\x04 pretend zip header");
        let path = file.path().to_str().unwrap();
        assert_eq!(extract_to_string(path), "PK\x03\x04 pretend zip header");
    }
}
