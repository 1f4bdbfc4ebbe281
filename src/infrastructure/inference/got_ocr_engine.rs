use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::application::ports::{OcrEngine, OcrError};

/// Optical character recognition against a hosted GOT-OCR endpoint.
/// The image is fetched server-side from the submitted URL.
pub struct GotOcrEngine {
    client: Client,
    endpoint: String,
    api_key: String,
}

const OCR_TIMEOUT: Duration = Duration::from_secs(300);

impl GotOcrEngine {
    pub fn new(base_url: &str, model: &str, api_key: &str) -> Self {
        let client = Client::builder()
            .timeout(OCR_TIMEOUT)
            .build()
            .expect("reqwest client build never fails with valid TLS config");
        Self {
            client,
            endpoint: format!("{}/models/{}", base_url.trim_end_matches('/'), model),
            api_key: api_key.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct OcrResponse {
    generated_text: String,
}

#[async_trait]
impl OcrEngine for GotOcrEngine {
    async fn recognize(&self, image_url: &str) -> Result<String, OcrError> {
        let body = serde_json::json!({
            "inputs": image_url,
            "parameters": { "ocr_type": "ocr" }
        });

        tracing::debug!(endpoint = %self.endpoint, "Sending image URL for OCR");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| OcrError::ApiRequestFailed(format!("request: {e}")))?;

        let status = response.status();
        if status == reqwest::StatusCode::UNPROCESSABLE_ENTITY {
            let body = response.text().await.unwrap_or_default();
            return Err(OcrError::UnreadableImage(body));
        }
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(OcrError::ApiRequestFailed(format!("status {status}: {body}")));
        }

        let result: OcrResponse = response
            .json()
            .await
            .map_err(|e| OcrError::InvalidResponse(format!("parse response: {e}")))?;

        tracing::info!(chars = result.generated_text.len(), "OCR completed");

        Ok(result.generated_text)
    }
}
