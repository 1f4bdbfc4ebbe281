use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::application::ports::{GrammarCorrector, GrammarError};

/// Spelling and grammar correction against a hosted T5 text2text endpoint.
pub struct T5GrammarClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

const INFERENCE_TIMEOUT: Duration = Duration::from_secs(120);

impl T5GrammarClient {
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
impl GrammarCorrector for T5GrammarClient {
    async fn correct(&self, text: &str) -> Result<String, GrammarError> {
        let body = serde_json::json!({
            "inputs": format!("grammar: {text}"),
        });

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GrammarError::ApiRequestFailed(format!("request: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(GrammarError::ApiRequestFailed(format!(
                "status {status}: {body}"
            )));
        }

        let outputs: Vec<GeneratedText> = response
            .json()
            .await
            .map_err(|e| GrammarError::InvalidResponse(format!("parse response: {e}")))?;

        outputs
            .into_iter()
            .next()
            .map(|o| o.generated_text)
            .ok_or_else(|| GrammarError::InvalidResponse("empty generation list".to_string()))
    }
}
