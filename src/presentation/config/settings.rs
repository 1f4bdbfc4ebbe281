use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub inference: InferenceSettings,
    pub summarization: SummarizationSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

/// Hosted inference backend. A model name set to the empty string
/// disables that capability.
#[derive(Debug, Clone, Deserialize)]
pub struct InferenceSettings {
    pub base_url: String,
    pub api_key: String,
    pub abstractive_model: Option<String>,
    pub extractive_model: Option<String>,
    pub ocr_model: Option<String>,
    pub transcription_model: Option<String>,
    pub grammar_model: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SummarizationSettings {
    /// Maximum chunk size, measured in `chunk_unit`.
    pub chunk_size: usize,
    pub chunk_unit: ChunkUnit,
    /// Inputs at or below this word count are summarized in one call.
    pub direct_word_limit: usize,
    /// Abstractive mode skips chunks at or below this many characters.
    pub min_chunk_chars: usize,
    pub min_budget_words: usize,
    pub max_budget_words: usize,
    pub extractive_max_length: usize,
    pub extractive_min_length: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkUnit {
    Tokens,
    Words,
}

impl Settings {
    /// Assemble settings from environment variables, with defaults for
    /// everything except the inference API key.
    pub fn from_env() -> Self {
        Self {
            server: ServerSettings {
                host: env_or("SERVER_HOST", "0.0.0.0"),
                port: env_parse("SERVER_PORT", 8000),
            },
            inference: InferenceSettings {
                base_url: env_or("INFERENCE_BASE_URL", "http://localhost:8080"),
                api_key: env_or("INFERENCE_API_KEY", ""),
                abstractive_model: optional_model(
                    "ABSTRACTIVE_MODEL",
                    "spacemanidol/flan-t5-large-website-summarizer",
                ),
                extractive_model: optional_model("EXTRACTIVE_MODEL", "facebook/bart-large-cnn"),
                ocr_model: optional_model("OCR_MODEL", "ucaslcl/GOT-OCR2_0"),
                transcription_model: optional_model("TRANSCRIPTION_MODEL", "whisper-1"),
                grammar_model: optional_model(
                    "GRAMMAR_MODEL",
                    "vennify/t5-base-grammar-correction",
                ),
            },
            summarization: SummarizationSettings {
                chunk_size: env_parse("CHUNK_SIZE", 1000),
                chunk_unit: match env_or("CHUNK_UNIT", "tokens").to_lowercase().as_str() {
                    "words" => ChunkUnit::Words,
                    _ => ChunkUnit::Tokens,
                },
                direct_word_limit: env_parse("DIRECT_WORD_LIMIT", 1000),
                min_chunk_chars: env_parse("MIN_CHUNK_CHARS", 50),
                min_budget_words: env_parse("MIN_BUDGET_WORDS", 50),
                max_budget_words: env_parse("MAX_BUDGET_WORDS", 300),
                extractive_max_length: env_parse("EXTRACTIVE_MAX_LENGTH", 150),
                extractive_min_length: env_parse("EXTRACTIVE_MIN_LENGTH", 50),
            },
        }
    }
}

fn env_or(var: &str, default: &str) -> String {
    std::env::var(var).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T: std::str::FromStr + Copy>(var: &str, default: T) -> T {
    std::env::var(var)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn optional_model(var: &str, default: &str) -> Option<String> {
    let value = env_or(var, default);
    if value.is_empty() { None } else { Some(value) }
}
