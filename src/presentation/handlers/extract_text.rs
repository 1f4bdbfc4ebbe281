use std::time::Instant;

use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{AbstractiveSummarizer, ExtractiveSummarizer, PdfExtractError};
use crate::domain::NormalizedText;
use crate::presentation::state::AppState;

use super::ErrorResponse;

#[derive(Serialize)]
pub struct ExtractTextResponse {
    pub text: String,
    pub processing_time: f64,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn extract_text_handler<A, E>(
    State(state): State<AppState<A, E>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    A: AbstractiveSummarizer + 'static,
    E: ExtractiveSummarizer + 'static,
{
    let start = Instant::now();

    let field = match multipart.next_field().await {
        Ok(Some(f)) => f,
        Ok(None) => {
            tracing::warn!("Extract request with no file");
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

    let filename = field.file_name().unwrap_or("unknown").to_string();

    if !filename.to_lowercase().ends_with(".pdf") {
        tracing::warn!(filename = %filename, "Unsupported upload");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(
                "Only PDF files are supported",
                "invalid_request",
            )),
        )
            .into_response();
    }

    let data = match field.bytes().await {
        Ok(d) => d,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read file bytes");
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

    tracing::debug!(filename = %filename, bytes = data.len(), "Extracting PDF text");

    let raw = match state.pdf_extractor.extract_text(&data).await {
        Ok(text) => text,
        Err(e) => {
            tracing::error!(error = %e, filename = %filename, "PDF extraction failed");
            let (status, kind) = match &e {
                PdfExtractError::InvalidDocument(_) => (StatusCode::BAD_REQUEST, "invalid_request"),
                PdfExtractError::NoTextFound => (StatusCode::BAD_REQUEST, "empty_input"),
                PdfExtractError::ExtractionFailed(_) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "extraction_failed")
                }
            };
            return (status, Json(ErrorResponse::new(e.to_string(), kind))).into_response();
        }
    };

    let normalized = NormalizedText::from_raw(&raw);
    if normalized.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(
                "No text could be extracted from the PDF",
                "empty_input",
            )),
        )
            .into_response();
    }

    let processing_time = start.elapsed().as_secs_f64();
    tracing::info!(processing_time, "PDF text extraction completed");

    (
        StatusCode::OK,
        Json(ExtractTextResponse {
            text: normalized.into_inner(),
            processing_time,
        }),
    )
        .into_response()
}
