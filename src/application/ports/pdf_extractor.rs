use async_trait::async_trait;

#[async_trait]
pub trait PdfTextExtractor: Send + Sync {
    async fn extract_text(&self, data: &[u8]) -> Result<String, PdfExtractError>;
}

#[derive(Debug, thiserror::Error)]
pub enum PdfExtractError {
    #[error("invalid or corrupted PDF: {0}")]
    InvalidDocument(String),
    #[error("no text could be extracted")]
    NoTextFound,
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
}
