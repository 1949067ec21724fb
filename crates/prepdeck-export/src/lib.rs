//! prepdeck-export: interview-prep guide export.
//!
//! Renders the role, a short skills/resume summary, and the numbered
//! questions into a US-letter PDF, and wraps the result in a transient
//! artifact that is deleted once it has been handed over.

pub mod artifact;
pub mod canvas;
pub mod guide;

pub use artifact::{export, ExportArtifact, PDF_MIME_TYPE};
pub use guide::write_pdf;
