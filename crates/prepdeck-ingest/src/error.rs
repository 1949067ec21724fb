//! Extraction error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to load PDF: {0}")]
    Pdf(String),

    #[error("failed to extract text from PDF page {page}: {message}")]
    PdfPage { page: u32, message: String },

    #[error("failed to open DOCX archive: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("DOCX archive has no word/document.xml")]
    MissingDocumentXml,

    #[error("failed to read word/document.xml: {0}")]
    DocumentXmlRead(#[from] std::io::Error),

    #[error("XML parsing error: {0}")]
    Xml(String),
}

pub type Result<T> = std::result::Result<T, ExtractError>;
