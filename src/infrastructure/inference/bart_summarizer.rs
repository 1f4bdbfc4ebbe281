use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::application::ports::{ExtractiveSummarizer, SummarizerError};

/// Extractive-style summarization against a hosted BART summarization
/// endpoint. Sampling stays off; the model quotes source spans.
pub struct BartSummarizer {
    client: Client,
    endpoint: String,
    api_key: String,
}

const INFERENCE_TIMEOUT: Duration = Duration::from_secs(120);

impl BartSummarizer {
    pub fn new(base_url: &str, model: &str, api_key: &str) -> Self {
        let client = Client::builder()
            .timeout(INFERENCE_TIMEOUT)
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
struct SummaryText {
    summary_text: String,
}

#[async_trait]
impl ExtractiveSummarizer for BartSummarizer {
    async fn summarize(
        &self,
        text: &str,
        max_length: usize,
        min_length: usize,
    ) -> Result<String, SummarizerError> {
        let body = serde_json::json!({
            "inputs": text,
            "parameters": {
                "max_length": max_length,
                "min_length": min_length,
                "do_sample": false,
            }
        });

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SummarizerError::Timeout
                } else {
                    SummarizerError::ApiRequestFailed(format!("request: {e}"))
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(SummarizerError::ApiRequestFailed(format!(
                "status {status}: {body}"
            )));
        }

        let outputs: Vec<SummaryText> = response
            .json()
            .await
            .map_err(|e| SummarizerError::InvalidResponse(format!("parse response: {e}")))?;

        outputs
            .into_iter()
            .next()
            .map(|o| o.summary_text)
            .ok_or_else(|| SummarizerError::InvalidResponse("empty summary list".to_string()))
    }
}
