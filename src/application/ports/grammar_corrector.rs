use async_trait::async_trait;

#[async_trait]
pub trait GrammarCorrector: Send + Sync {
    async fn correct(&self, text: &str) -> Result<String, GrammarError>;
}

#[derive(Debug, thiserror::Error)]
pub enum GrammarError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
