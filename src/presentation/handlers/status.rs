use axum::Json;
use axum::extract::State;

use crate::presentation::state::AppState;

use super::api_types::StatusResponse;

pub async fn transcription_status_handler(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(state.transcription_service.backend().into())
}

pub async fn summarization_status_handler(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(state.summarization_service.backend().into())
}
