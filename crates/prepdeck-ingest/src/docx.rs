//! DOCX text extraction.
//!
//! DOCX files are ZIP archives; the body lives in `word/document.xml`.

use std::io::{Cursor, Read, Seek};

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::{ExtractError, Result};

const DOCUMENT_XML: &str = "word/document.xml";

/// Extract paragraph text, one paragraph per line.
pub fn extract_text(bytes: &[u8]) -> Result<String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
    let xml = read_document_xml(&mut archive)?;

    let mut text = String::new();
    for paragraph in parse_paragraphs(&xml)? {
        text.push_str(&paragraph);
        text.push('\n');
    }
    Ok(text)
}

fn read_document_xml<R: Read + Seek>(archive: &mut zip::ZipArchive<R>) -> Result<String> {
    let mut document = match archive.by_name(DOCUMENT_XML) {
        Ok(file) => file,
        Err(zip::result::ZipError::FileNotFound) => return Err(ExtractError::MissingDocumentXml),
        Err(e) => return Err(e.into()),
    };

    let mut xml = String::new();
    document.read_to_string(&mut xml)?;
    Ok(xml)
}

/// Paragraph texts in document order, including empty paragraphs.
///
/// Text runs (`w:t`) are concatenated; `w:tab` becomes a tab and `w:br` a
/// line break, as a word processor would show them. Paragraphs nested inside
/// another paragraph (text boxes) belong to their host and contribute no
/// text of their own.
pub fn parse_paragraphs(xml: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(xml);

    let mut paragraphs = Vec::new();
    let mut current = String::new();
    // Number of open `w:p` elements; text is collected only at depth 1.
    let mut depth = 0usize;
    let mut in_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"w:p" => {
                    depth += 1;
                    if depth == 1 {
                        current.clear();
                    }
                }
                b"w:t" => in_text = true,
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"w:p" if depth == 0 => paragraphs.push(String::new()),
                b"w:tab" if depth == 1 => current.push('\t'),
                b"w:br" | b"w:cr" if depth == 1 => current.push('\n'),
                _ => {}
            },
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_text = false,
                b"w:p" => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        paragraphs.push(std::mem::take(&mut current));
                    }
                }
                _ => {}
            },
            Ok(Event::Text(e)) if in_text && depth == 1 => {
                let text = e
                    .unescape()
                    .map_err(|e| ExtractError::Xml(e.to_string()))?;
                current.push_str(&text);
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(ExtractError::Xml(format!(
                    "error at position {}: {e}",
                    reader.buffer_position()
                )))
            }
            _ => {}
        }
    }

    Ok(paragraphs)
}
