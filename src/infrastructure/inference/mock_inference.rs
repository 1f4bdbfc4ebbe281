use async_trait::async_trait;

use crate::application::ports::{AbstractiveSummarizer, ExtractiveSummarizer, SummarizerError};
use crate::domain::GenerationParams;

fn truncate_words(text: &str, max_words: usize) -> String {
    text.split_whitespace()
        .take(max_words)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Deterministic stand-in for the abstractive capability: truncates the
/// input to the requested length.
pub struct MockAbstractiveSummarizer;

#[async_trait]
impl AbstractiveSummarizer for MockAbstractiveSummarizer {
    async fn summarize(
        &self,
        text: &str,
        max_length: usize,
        _params: &GenerationParams,
    ) -> Result<String, SummarizerError> {
        Ok(truncate_words(text, max_length))
    }
}

/// Deterministic stand-in for the extractive capability.
pub struct MockExtractiveSummarizer;

#[async_trait]
impl ExtractiveSummarizer for MockExtractiveSummarizer {
    async fn summarize(
        &self,
        text: &str,
        max_length: usize,
        _min_length: usize,
    ) -> Result<String, SummarizerError> {
        Ok(truncate_words(text, max_length))
    }
}
