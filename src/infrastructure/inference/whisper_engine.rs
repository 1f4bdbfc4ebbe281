use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart;
use serde::Deserialize;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};

/// Speech-to-text against a hosted Whisper transcription endpoint.
pub struct WhisperEngine {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
}

const TRANSCRIPTION_TIMEOUT: Duration = Duration::from_secs(300);

impl WhisperEngine {
    pub fn new(base_url: &str, model: &str, api_key: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(TRANSCRIPTION_TIMEOUT)
            .build()
            .expect("reqwest client build never fails with valid TLS config");
        Self {
            client,
            endpoint: format!("{}/audio/transcriptions", base_url.trim_end_matches('/')),
            api_key: api_key.to_string(),
            model: model.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct TranscriptionResponse {
    text: String,
}

#[async_trait]
impl TranscriptionEngine for WhisperEngine {
    async fn transcribe(&self, audio_data: &[u8]) -> Result<String, TranscriptionError> {
        let file_part = multipart::Part::bytes(audio_data.to_vec())
            .file_name("audio.wav")
            .mime_str("audio/wav")
            .map_err(|e| TranscriptionError::UnsupportedFormat(format!("mime: {e}")))?;

        let form = multipart::Form::new()
            .part("file", file_part)
            .text("model", self.model.clone());

        tracing::debug!(endpoint = %self.endpoint, bytes = audio_data.len(), "Sending audio for transcription");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("request: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TranscriptionError::TranscriptionFailed(format!(
                "status {status}: {body}"
            )));
        }

        let result: TranscriptionResponse = response
            .json()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("parse response: {e}")))?;

        tracing::info!(chars = result.text.len(), "Transcription completed");

        Ok(result.text.trim().to_string())
    }
}
