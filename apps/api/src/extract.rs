//! PDF text extraction behind a trait seam so handlers can be tested
//! without real PDF fixtures.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Could not extract text from PDF: {0}")]
    Unreadable(String),
}

/// Capability interface for turning uploaded resume bytes into plain text.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractionError>;
}

/// Production extractor backed by the `pdf-extract` crate.
/// Page texts are concatenated into a single string.
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
        pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| ExtractionError::Unreadable(e.to_string()))
    }
}
