use std::time::Instant;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::{AbstractiveSummarizer, ExtractiveSummarizer};
use crate::infrastructure::observability::preview_text;
use crate::presentation::state::AppState;

use super::ErrorResponse;

#[derive(Deserialize)]
pub struct CorrectRequest {
    pub text: String,
}

#[derive(Serialize)]
pub struct CorrectResponse {
    pub corrected_text: String,
    pub processing_time: f64,
}

#[tracing::instrument(skip(state, request))]
pub async fn correct_handler<A, E>(
    State(state): State<AppState<A, E>>,
    Json(request): Json<CorrectRequest>,
) -> impl IntoResponse
where
    A: AbstractiveSummarizer + 'static,
    E: ExtractiveSummarizer + 'static,
{
    let Some(corrector) = &state.grammar_corrector else {
        tracing::warn!("Correction request with no model configured");
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponse::new(
                "Grammar correction model is not available",
                "capability_unavailable",
            )),
        )
            .into_response();
    };

    if request.text.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Empty text", "empty_input")),
        )
            .into_response();
    }

    tracing::debug!(text = %preview_text(&request.text), "Correction input");

    let start = Instant::now();

    match corrector.correct(&request.text).await {
        Ok(corrected_text) => {
            let processing_time = start.elapsed().as_secs_f64();
            tracing::info!(processing_time, "Correction request completed");
            (
                StatusCode::OK,
                Json(CorrectResponse {
                    corrected_text,
                    processing_time,
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Correction request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(e.to_string(), "correction_failed")),
            )
                .into_response()
        }
    }
}
