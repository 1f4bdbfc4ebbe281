use async_trait::async_trait;

use crate::domain::GenerationParams;

/// Capability that condenses text by generating new phrasing.
#[async_trait]
pub trait AbstractiveSummarizer: Send + Sync {
    async fn summarize(
        &self,
        text: &str,
        max_length: usize,
        params: &GenerationParams,
    ) -> Result<String, SummarizerError>;
}

/// Capability that condenses text by selecting representative spans.
#[async_trait]
pub trait ExtractiveSummarizer: Send + Sync {
    async fn summarize(
        &self,
        text: &str,
        max_length: usize,
        min_length: usize,
    ) -> Result<String, SummarizerError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SummarizerError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("inference timed out")]
    Timeout,
}
