use async_trait::async_trait;

#[async_trait]
pub trait OcrEngine: Send + Sync {
    async fn recognize(&self, image_url: &str) -> Result<String, OcrError>;
}

#[derive(Debug, thiserror::Error)]
pub enum OcrError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("unreadable image: {0}")]
    UnreadableImage(String),
}
