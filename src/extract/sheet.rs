//! Spreadsheet (XLSX) text extraction.

use super::ExtractError;
use calamine::{Data, Range, Reader, Xlsx};
use std::io::Cursor;

/// Extract all worksheets as tab-separated rows.
///
/// Cells are joined with tabs (missing cells render as empty strings, not a
/// placeholder), rows with newlines, and sheets with newlines, preserving
/// workbook order throughout.
pub(super) fn extract(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes)).map_err(corrupt)?;

    let names = workbook.sheet_names().to_owned();
    let mut sheets = Vec::with_capacity(names.len());
    for name in names {
        let range = workbook.worksheet_range(&name).map_err(corrupt)?;
        sheets.push(render_range(&range));
    }

    Ok(sheets.join("\n"))
}

/// Render a worksheet range as tab-separated rows joined by newlines.
pub(crate) fn render_range(range: &Range<Data>) -> String {
    range
        .rows()
        .map(|row| {
            row.iter()
                .map(cell_text)
                .collect::<Vec<_>>()
                .join("\t")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

fn corrupt(e: impl std::fmt::Display) -> ExtractError {
    ExtractError::Corrupt {
        format: "spreadsheet",
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_range_missing_cell() {
        let mut range: Range<Data> = Range::new((0, 0), (1, 1));
        range.set_value((0, 0), Data::String("a".to_string()));
        range.set_value((0, 1), Data::String("b".to_string()));
        range.set_value((1, 0), Data::String("c".to_string()));
        // (1, 1) stays empty and must render as an empty string after the tab.
        assert_eq!(render_range(&range), "a\tb\nc\t");
    }

    #[test]
    fn test_render_range_numeric_cells() {
        let mut range: Range<Data> = Range::new((0, 0), (0, 1));
        range.set_value((0, 0), Data::Float(1.5));
        range.set_value((0, 1), Data::Int(7));
        assert_eq!(render_range(&range), "1.5\t7");
    }

    #[test]
    fn test_extract_rejects_garbage() {
        let err = extract(b"definitely not a zip archive").unwrap_err();
        assert!(matches!(err, ExtractError::Corrupt { format: "spreadsheet", .. }));
    }
}
