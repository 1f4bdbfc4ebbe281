use std::time::Instant;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::{AbstractiveSummarizer, ExtractiveSummarizer};
use crate::application::services::SummarizationError;
use crate::domain::SummaryMode;
use crate::infrastructure::observability::preview_text;
use crate::presentation::state::AppState;

use super::ErrorResponse;

#[derive(Deserialize)]
pub struct SummarizeRequest {
    pub text: String,
    #[serde(default = "default_max_length")]
    pub max_length: usize,
    pub summary_type: SummaryMode,
}

fn default_max_length() -> usize {
    150
}

#[derive(Serialize)]
pub struct SummarizeResponse {
    pub summary: String,
    pub processing_time: f64,
}

#[tracing::instrument(skip(state, request), fields(summary_type = %request.summary_type))]
pub async fn summarize_handler<A, E>(
    State(state): State<AppState<A, E>>,
    Json(request): Json<SummarizeRequest>,
) -> impl IntoResponse
where
    A: AbstractiveSummarizer + 'static,
    E: ExtractiveSummarizer + 'static,
{
    tracing::info!(chars = request.text.len(), "Received summarization request");
    tracing::debug!(text = %preview_text(&request.text), "Summarization input");

    let start = Instant::now();

    match state
        .summarization_service
        .summarize(&request.text, request.max_length, request.summary_type)
        .await
    {
        Ok(summary) => {
            let processing_time = start.elapsed().as_secs_f64();
            tracing::info!(processing_time, "Summarization completed");
            (
                StatusCode::OK,
                Json(SummarizeResponse {
                    summary,
                    processing_time,
                }),
            )
                .into_response()
        }
        Err(e) => {
            let status = match &e {
                SummarizationError::EmptyInput => StatusCode::BAD_REQUEST,
                SummarizationError::CapabilityUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
                SummarizationError::SummarizationFailed => StatusCode::INTERNAL_SERVER_ERROR,
            };
            tracing::warn!(error = %e, kind = e.kind(), "Summarization request failed");
            (status, Json(ErrorResponse::new(e.to_string(), e.kind()))).into_response()
        }
    }
}
