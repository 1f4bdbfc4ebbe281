use std::time::Instant;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::{AbstractiveSummarizer, ExtractiveSummarizer, OcrError};
use crate::presentation::state::AppState;

use super::ErrorResponse;

#[derive(Deserialize)]
pub struct OcrRequest {
    pub image_url: String,
}

#[derive(Serialize)]
pub struct OcrResponse {
    pub generated_text: String,
    pub processing_time: f64,
}

#[tracing::instrument(skip(state, request), fields(image_url = %request.image_url))]
pub async fn ocr_handler<A, E>(
    State(state): State<AppState<A, E>>,
    Json(request): Json<OcrRequest>,
) -> impl IntoResponse
where
    A: AbstractiveSummarizer + 'static,
    E: ExtractiveSummarizer + 'static,
{
    let Some(engine) = &state.ocr_engine else {
        tracing::warn!("OCR request with no engine configured");
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponse::new(
                "OCR model is not available",
                "capability_unavailable",
            )),
        )
            .into_response();
    };

    let start = Instant::now();

    match engine.recognize(&request.image_url).await {
        Ok(generated_text) => {
            let processing_time = start.elapsed().as_secs_f64();
            tracing::info!(processing_time, "OCR request completed");
            (
                StatusCode::OK,
                Json(OcrResponse {
                    generated_text,
                    processing_time,
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "OCR request failed");
            let status = match &e {
                OcrError::UnreadableImage(_) => StatusCode::BAD_REQUEST,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            (status, Json(ErrorResponse::new(e.to_string(), "ocr_failed"))).into_response()
        }
    }
}
