mod bart_summarizer;
mod capability_factory;
mod flan_t5_summarizer;
mod got_ocr_engine;
mod grammar_client;
mod mock_inference;
mod whisper_engine;

pub use bart_summarizer::BartSummarizer;
pub use capability_factory::{Capabilities, InferenceConfig};
pub use flan_t5_summarizer::FlanT5Summarizer;
pub use got_ocr_engine::GotOcrEngine;
pub use grammar_client::T5GrammarClient;
pub use mock_inference::{MockAbstractiveSummarizer, MockExtractiveSummarizer};
pub use whisper_engine::WhisperEngine;
