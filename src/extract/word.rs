//! Word document (DOCX) text extraction.
//!
//! A DOCX file is a zip archive; the body text lives in `word/document.xml`
//! as `<w:t>` runs grouped into `<w:p>` paragraphs. Paragraph text is
//! concatenated with newlines in document order.

use super::ExtractError;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};
use zip::ZipArchive;

pub(super) fn extract(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).map_err(corrupt)?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(corrupt)?
        .read_to_string(&mut xml)
        .map_err(corrupt)?;

    Ok(paragraphs(&xml)?.join("\n"))
}

/// Collect paragraph text from the document XML.
fn paragraphs(xml: &str) -> Result<Vec<String>, ExtractError> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut in_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == b"w:t" => in_text = true,
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_text = false,
                b"w:p" => paragraphs.push(std::mem::take(&mut current)),
                _ => {}
            },
            Ok(Event::Text(t)) if in_text => {
                current.push_str(&t.unescape().map_err(corrupt)?);
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(corrupt(e)),
        }
    }

    Ok(paragraphs)
}

fn corrupt(e: impl std::fmt::Display) -> ExtractError {
    ExtractError::Corrupt {
        format: "Word document",
        message: e.to_string(),
    }
}
