//! Plain text extraction.

use super::{ExtractError, Extraction};
use std::path::Path;

/// Return the file content verbatim as UTF-8.
///
/// An empty file yields an empty string rather than a no-text diagnostic;
/// this branch intentionally skips the emptiness check the other formats get.
pub(super) fn extract(path: &Path, bytes: Vec<u8>) -> Result<Extraction, ExtractError> {
    match String::from_utf8(bytes) {
        Ok(content) => Ok(Extraction::Text(content)),
        Err(e) => Err(ExtractError::Decode {
            path: path.display().to_string(),
            message: e.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_verbatim() {
        let result = extract(Path::new("a.txt"), b"hello\nworld".to_vec()).unwrap();
        assert_eq!(result, Extraction::Text("hello\nworld".to_string()));
    }

    #[test]
    fn test_extract_invalid_utf8() {
        let err = extract(Path::new("a.txt"), vec![0xff, 0xfe, 0x00]).unwrap_err();
        assert!(matches!(err, ExtractError::Decode { .. }));
    }
}
