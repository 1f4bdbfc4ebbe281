use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use precis::application::ports::TextSizer;
use precis::application::services::{SummarizationConfig, SummarizationService, WordChunker};
use precis::infrastructure::inference::{Capabilities, InferenceConfig};
use precis::infrastructure::observability::{TracingConfig, init_tracing};
use precis::infrastructure::text_processing::{LocalPdfExtractor, TokenSizer, WordSizer};
use precis::presentation::config::ChunkUnit;
use precis::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();

    let environment = Environment::try_from(
        std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
    )
    .unwrap_or(Environment::Development);

    init_tracing(
        TracingConfig {
            environment: environment.to_string(),
            ..TracingConfig::from_env()
        },
        settings.server.port,
    );

    let sizer: Arc<dyn TextSizer> = match settings.summarization.chunk_unit {
        ChunkUnit::Tokens => Arc::new(TokenSizer),
        ChunkUnit::Words => Arc::new(WordSizer),
    };
    let chunker = WordChunker::new(settings.summarization.chunk_size, sizer);

    let capabilities = Capabilities::build(&InferenceConfig {
        base_url: settings.inference.base_url.clone(),
        api_key: settings.inference.api_key.clone(),
        abstractive_model: settings.inference.abstractive_model.clone(),
        extractive_model: settings.inference.extractive_model.clone(),
        ocr_model: settings.inference.ocr_model.clone(),
        transcription_model: settings.inference.transcription_model.clone(),
        grammar_model: settings.inference.grammar_model.clone(),
    });

    let summarization_service = Arc::new(SummarizationService::new(
        capabilities.abstractive,
        capabilities.extractive,
        chunker,
        SummarizationConfig {
            min_budget_words: settings.summarization.min_budget_words,
            max_budget_words: settings.summarization.max_budget_words,
            direct_word_limit: settings.summarization.direct_word_limit,
            min_chunk_chars: settings.summarization.min_chunk_chars,
            extractive_max_length: settings.summarization.extractive_max_length,
            extractive_min_length: settings.summarization.extractive_min_length,
        },
    ));

    let state = AppState {
        summarization_service,
        pdf_extractor: Arc::new(LocalPdfExtractor::new()),
        ocr_engine: capabilities.ocr,
        transcription_engine: capabilities.transcription,
        grammar_corrector: capabilities.grammar,
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
