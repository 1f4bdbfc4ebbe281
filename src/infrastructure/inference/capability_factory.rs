use std::sync::Arc;

use crate::application::ports::{GrammarCorrector, OcrEngine, TranscriptionEngine};

use super::bart_summarizer::BartSummarizer;
use super::flan_t5_summarizer::FlanT5Summarizer;
use super::got_ocr_engine::GotOcrEngine;
use super::grammar_client::T5GrammarClient;
use super::whisper_engine::WhisperEngine;

/// Connection settings for the hosted inference backend. A capability
/// with no model configured stays disabled.
#[derive(Debug, Clone)]
pub struct InferenceConfig {
    pub base_url: String,
    pub api_key: String,
    pub abstractive_model: Option<String>,
    pub extractive_model: Option<String>,
    pub ocr_model: Option<String>,
    pub transcription_model: Option<String>,
    pub grammar_model: Option<String>,
}

/// The process-wide set of model capability handles, built once at
/// startup. Each handle is optional: a capability that cannot be
/// constructed is logged and left absent, and only requests needing it
/// fail.
pub struct Capabilities {
    pub abstractive: Option<Arc<FlanT5Summarizer>>,
    pub extractive: Option<Arc<BartSummarizer>>,
    pub ocr: Option<Arc<dyn OcrEngine>>,
    pub transcription: Option<Arc<dyn TranscriptionEngine>>,
    pub grammar: Option<Arc<dyn GrammarCorrector>>,
}

impl Capabilities {
    pub fn build(config: &InferenceConfig) -> Self {
        let abstractive = config.abstractive_model.as_deref().map(|model| {
            tracing::info!(model, "Abstractive summarizer configured");
            Arc::new(FlanT5Summarizer::new(
                &config.base_url,
                model,
                &config.api_key,
            ))
        });
        if abstractive.is_none() {
            tracing::warn!("Abstractive summarizer not configured, capability disabled");
        }

        let extractive = config.extractive_model.as_deref().map(|model| {
            tracing::info!(model, "Extractive summarizer configured");
            Arc::new(BartSummarizer::new(
                &config.base_url,
                model,
                &config.api_key,
            ))
        });
        if extractive.is_none() {
            tracing::warn!("Extractive summarizer not configured, capability disabled");
        }

        let ocr: Option<Arc<dyn OcrEngine>> = config.ocr_model.as_deref().map(|model| {
            tracing::info!(model, "OCR engine configured");
            Arc::new(GotOcrEngine::new(&config.base_url, model, &config.api_key))
                as Arc<dyn OcrEngine>
        });

        let transcription: Option<Arc<dyn TranscriptionEngine>> =
            config.transcription_model.as_deref().map(|model| {
                tracing::info!(model, "Transcription engine configured");
                Arc::new(WhisperEngine::new(&config.base_url, model, &config.api_key))
                    as Arc<dyn TranscriptionEngine>
            });

        let grammar: Option<Arc<dyn GrammarCorrector>> =
            config.grammar_model.as_deref().map(|model| {
                tracing::info!(model, "Grammar corrector configured");
                Arc::new(T5GrammarClient::new(
                    &config.base_url,
                    model,
                    &config.api_key,
                )) as Arc<dyn GrammarCorrector>
            });

        Self {
            abstractive,
            extractive,
            ocr,
            transcription,
            grammar,
        }
    }
}
