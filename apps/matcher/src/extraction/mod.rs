//! Text Extractor — turns an uploaded PDF, DOCX or plain-text document into
//! lower-cased text.
//!
//! Every extractor is a pure transform over bytes already held in memory. The
//! upload stream has been fully read and released before anything here runs.

use thiserror::Error;
use tracing::debug;

use crate::models::{Document, DocumentFormat, NormalizedText};

pub mod docx;
pub mod pdf;
pub mod plain;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    #[error("Document is not valid UTF-8 text: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    #[error("Could not read PDF: {0}")]
    Pdf(String),

    #[error("Could not read DOCX: {0}")]
    Docx(String),
}

/// Wraps uploaded bytes in a `Document`, resolving the declared format from
/// the file name and content type.
pub fn document_from_upload(
    file_name: Option<&str>,
    content_type: Option<&str>,
    bytes: impl Into<bytes::Bytes>,
) -> Result<Document, ExtractError> {
    let format = DocumentFormat::detect(file_name, content_type).ok_or_else(|| {
        ExtractError::UnsupportedFormat(
            file_name
                .or(content_type)
                .unwrap_or("unnamed upload")
                .to_string(),
        )
    })?;
    Ok(Document::new(format, bytes))
}

/// Extracts the text of `document` and lower-cases it.
pub fn extract_text(document: &Document) -> Result<NormalizedText, ExtractError> {
    let raw = match document.format {
        DocumentFormat::Pdf => pdf::extract(&document.bytes)?,
        DocumentFormat::Docx => docx::extract(&document.bytes)?,
        DocumentFormat::PlainText => plain::extract(&document.bytes)?,
    };

    let text = NormalizedText::new(&raw);
    debug!(
        format = %document.format,
        bytes = document.bytes.len(),
        chars = text.char_count(),
        "Extracted document text"
    );
    Ok(text)
}
