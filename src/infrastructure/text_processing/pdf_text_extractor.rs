use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{PdfExtractError, PdfTextExtractor};

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

/// PDF text extraction running in-process. Parsing is synchronous, so it
/// runs on a blocking task under a timeout.
#[derive(Default)]
pub struct LocalPdfExtractor;

impl LocalPdfExtractor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PdfTextExtractor for LocalPdfExtractor {
    #[tracing::instrument(skip(self, data), fields(bytes = data.len()))]
    async fn extract_text(&self, data: &[u8]) -> Result<String, PdfExtractError> {
        let bytes = data.to_vec();

        let text = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes)),
        )
        .await
        .map_err(|_| PdfExtractError::ExtractionFailed("PDF extraction timed out".to_string()))?
        .map_err(|e| PdfExtractError::ExtractionFailed(format!("task join error: {e}")))?
        .map_err(|e| PdfExtractError::InvalidDocument(e.to_string()))?;

        if text.trim().is_empty() {
            return Err(PdfExtractError::NoTextFound);
        }

        tracing::info!(chars = text.len(), "PDF text extraction complete");

        Ok(text)
    }
}
