use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::application::ports::{AbstractiveSummarizer, SummarizerError};
use crate::domain::GenerationParams;

/// Abstractive summarization against a hosted FLAN-T5 text2text endpoint.
///
/// The model expects the task to be named in the prompt, hence the
/// `summarize: ` prefix on every input.
pub struct FlanT5Summarizer {
    client: Client,
    endpoint: String,
    api_key: String,
}

const INFERENCE_TIMEOUT: Duration = Duration::from_secs(120);

impl FlanT5Summarizer {
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
struct GeneratedText {
    generated_text: String,
}

#[async_trait]
impl AbstractiveSummarizer for FlanT5Summarizer {
    async fn summarize(
        &self,
        text: &str,
        max_length: usize,
        params: &GenerationParams,
    ) -> Result<String, SummarizerError> {
        let body = serde_json::json!({
            "inputs": format!("summarize: {text}"),
            "parameters": {
                "max_length": max_length,
                "num_beams": params.num_beams,
                "early_stopping": params.early_stopping,
                "temperature": params.temperature,
                "do_sample": params.do_sample,
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

        let outputs: Vec<GeneratedText> = response
            .json()
            .await
            .map_err(|e| SummarizerError::InvalidResponse(format!("parse response: {e}")))?;

        outputs
            .into_iter()
            .next()
            .map(|o| o.generated_text)
            .ok_or_else(|| SummarizerError::InvalidResponse("empty generation list".to_string()))
    }
}
