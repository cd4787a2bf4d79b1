use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    health_handler, root_handler, summarization_status_handler, summarize_batch_handler,
    summarize_handler, transcribe_handler, transcription_status_handler,
};
use crate::presentation::state::AppState;

/// Room for multipart boundaries and headers on top of the audio limit.
pub const MULTIPART_OVERHEAD_BYTES: usize = 1024 * 1024;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let body_limit = state
        .transcription_service
        .max_audio_bytes()
        .saturating_add(MULTIPART_OVERHEAD_BYTES);

    let api = Router::new()
        .route("/transcribe", post(transcribe_handler))
        .route("/transcribe/status", get(transcription_status_handler))
        .route("/summarize", post(summarize_handler))
        .route("/summarize/batch", post(summarize_batch_handler))
        .route("/summarize/status", get(summarization_status_handler));

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .merge(api.clone())
        .nest("/api/v1", api)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
