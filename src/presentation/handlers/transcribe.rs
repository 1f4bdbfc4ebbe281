use std::time::Instant;

use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{AbstractiveSummarizer, ExtractiveSummarizer};
use crate::presentation::state::AppState;

use super::ErrorResponse;

#[derive(Serialize)]
pub struct TranscribeResponse {
    pub text: String,
    pub processing_time: f64,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn transcribe_handler<A, E>(
    State(state): State<AppState<A, E>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    A: AbstractiveSummarizer + 'static,
    E: ExtractiveSummarizer + 'static,
{
    let Some(engine) = &state.transcription_engine else {
        tracing::warn!("Transcription request with no engine configured");
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponse::new(
                "Transcription model is not available",
                "capability_unavailable",
            )),
        )
            .into_response();
    };

    let field = match multipart.next_field().await {
        Ok(Some(f)) => f,
        Ok(None) => {
            tracing::warn!("Transcription request with no file");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("No file uploaded", "invalid_request")),
            )
                .into_response();
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to read multipart");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(
                    format!("Failed to read multipart: {}", e),
                    "invalid_request",
                )),
            )
                .into_response();
        }
    };

    let data = match field.bytes().await {
        Ok(d) => d,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read audio bytes");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(
                    format!("Failed to read file: {}", e),
                    "invalid_request",
                )),
            )
                .into_response();
        }
    };

    let start = Instant::now();

    match engine.transcribe(&data).await {
        Ok(text) => {
            let processing_time = start.elapsed().as_secs_f64();
            tracing::info!(processing_time, "Transcription request completed");
            (
                StatusCode::OK,
                Json(TranscribeResponse {
                    text,
                    processing_time,
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Transcription request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(e.to_string(), "transcription_failed")),
            )
                .into_response()
        }
    }
}
