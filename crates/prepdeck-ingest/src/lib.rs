//! prepdeck-ingest: resume text extraction.
//!
//! Turns an uploaded resume into plain text. The format is chosen from the
//! file name's extension alone: `.pdf` and `.docx` are parsed, anything else
//! yields a warning string instead of an error.

pub mod docx;
pub mod error;
pub mod pdf;

#[cfg(test)]
mod fixtures;

use std::path::Path;

use tracing::{debug, warn};

pub use error::{ExtractError, Result};

/// Text returned in place of extracted content for unsupported files.
pub const UNSUPPORTED_FORMAT_WARNING: &str =
    "⚠️ Unsupported file format. Please upload PDF or DOCX.";

/// Number of characters shown when previewing extracted text.
pub const PREVIEW_CHARS: usize = 1000;

/// An uploaded file: its name (carrying the extension) and raw bytes.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// Read a file from disk, keeping its file name.
    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|source| ExtractError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self { name, bytes })
    }

    pub fn kind(&self) -> DocumentKind {
        DocumentKind::from_name(&self.name)
    }
}

/// Supported resume formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
    Unsupported,
}

impl DocumentKind {
    /// Sniff the format from a file name's extension (case-insensitive).
    pub fn from_name(name: &str) -> Self {
        let extension = Path::new(name)
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase());
        match extension.as_deref() {
            Some("pdf") => DocumentKind::Pdf,
            Some("docx") => DocumentKind::Docx,
            _ => DocumentKind::Unsupported,
        }
    }
}

/// Extract the plain text of a resume, trimmed.
///
/// Unsupported extensions return [`UNSUPPORTED_FORMAT_WARNING`]. Malformed
/// PDF or DOCX content is an error.
pub fn extract_resume_text(file: &UploadedFile) -> Result<String> {
    let text = match file.kind() {
        DocumentKind::Pdf => pdf::extract_text(&file.bytes)?,
        DocumentKind::Docx => docx::extract_text(&file.bytes)?,
        DocumentKind::Unsupported => {
            warn!(name = %file.name, "unsupported resume format");
            return Ok(UNSUPPORTED_FORMAT_WARNING.to_string());
        }
    };

    let text = text.trim().to_string();
    debug!(name = %file.name, chars = text.chars().count(), "extracted resume text");
    Ok(text)
}

/// The first `max_chars` characters of `text`.
pub fn preview(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
