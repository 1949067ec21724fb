//! The transient export artifact.
//!
//! An `ExportArtifact` owns a temp file holding the rendered PDF. The file
//! is removed when the artifact is dropped, so it never outlives the request
//! that produced it, including when reading it back fails.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempPath;
use tracing::info;

use crate::guide::write_pdf;

pub const PDF_MIME_TYPE: &str = "application/pdf";

/// File name offered for download: `{role}_interview_prep.pdf`.
///
/// Path separators in the role are replaced so the name stays a single
/// path component.
pub fn download_file_name(role: &str) -> String {
    let role: String = role
        .chars()
        .map(|c| if c == '/' || c == '\\' { '_' } else { c })
        .collect();
    format!("{role}_interview_prep.pdf")
}

#[derive(Debug)]
pub struct ExportArtifact {
    path: TempPath,
    file_name: String,
    page_count: usize,
}

impl ExportArtifact {
    /// Where the rendered PDF currently lives.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn mime_type(&self) -> &'static str {
        PDF_MIME_TYPE
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Read the PDF back and delete the temp file.
    pub fn into_bytes(self) -> Result<Vec<u8>> {
        let bytes = std::fs::read(&self.path)
            .with_context(|| format!("failed to read export: {}", self.path.display()))?;
        self.path
            .close()
            .context("failed to delete export artifact")?;
        Ok(bytes)
    }

    /// Write the PDF into `dir` under its download name and delete the temp
    /// file. Returns the delivered path.
    pub fn deliver_to(self, dir: &Path) -> Result<PathBuf> {
        let target = dir.join(&self.file_name);
        let page_count = self.page_count;
        let bytes = self.into_bytes()?;

        std::fs::write(&target, &bytes)
            .with_context(|| format!("failed to write {}", target.display()))?;
        info!(path = %target.display(), bytes = bytes.len(), pages = page_count, "delivered interview guide");
        Ok(target)
    }
}

/// Render the guide into a fresh temp file with a `.pdf` suffix.
pub fn export(questions: &[String], role: &str, skills_text: &str) -> Result<ExportArtifact> {
    let path = tempfile::Builder::new()
        .prefix("prepdeck-")
        .suffix(".pdf")
        .tempfile()
        .context("failed to create export file")?
        .into_temp_path();

    let page_count = write_pdf(questions, role, skills_text, &path)?;

    Ok(ExportArtifact {
        path,
        file_name: download_file_name(role),
        page_count,
    })
}
