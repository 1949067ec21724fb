//! PDF text extraction.

use lopdf::Document;

use crate::error::{ExtractError, Result};

/// Extract text from every page in page order.
///
/// Each page that yields text contributes that text followed by a newline;
/// pages without text contribute nothing.
pub fn extract_text(bytes: &[u8]) -> Result<String> {
    let doc = Document::load_mem(bytes).map_err(|e| ExtractError::Pdf(e.to_string()))?;

    let mut text = String::new();
    for (page_num, _page_id) in doc.get_pages() {
        let content = doc
            .extract_text(&[page_num])
            .map_err(|e| ExtractError::PdfPage {
                page: page_num,
                message: e.to_string(),
            })?;

        let content = content.trim_end();
        if content.trim().is_empty() {
            continue;
        }
        text.push_str(content);
        text.push('\n');
    }

    Ok(text)
}
