use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{AbstractiveSummarizer, ExtractiveSummarizer};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub abstractive_loaded: bool,
    pub extractive_loaded: bool,
    pub ocr_loaded: bool,
    pub transcription_loaded: bool,
    pub grammar_loaded: bool,
}

pub async fn health_handler<A, E>(State(state): State<AppState<A, E>>) -> impl IntoResponse
where
    A: AbstractiveSummarizer + 'static,
    E: ExtractiveSummarizer + 'static,
{
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            abstractive_loaded: state.summarization_service.abstractive_available(),
            extractive_loaded: state.summarization_service.extractive_available(),
            ocr_loaded: state.ocr_engine.is_some(),
            transcription_loaded: state.transcription_engine.is_some(),
            grammar_loaded: state.grammar_corrector.is_some(),
        }),
    )
}
