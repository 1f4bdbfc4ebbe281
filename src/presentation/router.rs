use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{AbstractiveSummarizer, ExtractiveSummarizer};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    correct_handler, extract_text_handler, health_handler, ocr_handler, summarize_handler,
    transcribe_handler,
};
use crate::presentation::state::AppState;

const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

pub fn create_router<A, E>(state: AppState<A, E>) -> Router
where
    A: AbstractiveSummarizer + 'static,
    E: ExtractiveSummarizer + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler::<A, E>))
        .route("/summarize", post(summarize_handler::<A, E>))
        .route("/ocr", post(ocr_handler::<A, E>))
        .route("/extract_text", post(extract_text_handler::<A, E>))
        .route("/transcribe", post(transcribe_handler::<A, E>))
        .route("/correct", post(correct_handler::<A, E>))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
