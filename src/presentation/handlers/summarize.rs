use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use crate::domain::SummaryInput;
use crate::presentation::state::AppState;

use super::api_types::{SummarizeRequest, SummarizeResponse};
use super::error::ApiError;

#[tracing::instrument(skip(state, payload))]
pub async fn summarize_handler(
    State(state): State<AppState>,
    payload: Result<Json<SummarizeRequest>, JsonRejection>,
) -> Result<Json<SummarizeResponse>, ApiError> {
    let Json(request) = payload.map_err(ApiError::invalid_body)?;
    let input = SummaryInput::from(request);

    let result = state.summarization_service.summarize(&input).await?;

    Ok(Json(result.into()))
}

#[tracing::instrument(skip(state, payload))]
pub async fn summarize_batch_handler(
    State(state): State<AppState>,
    payload: Result<Json<Vec<SummarizeRequest>>, JsonRejection>,
) -> Result<Json<Vec<SummarizeResponse>>, ApiError> {
    let Json(requests) = payload.map_err(ApiError::invalid_body)?;
    let inputs: Vec<SummaryInput> = requests.into_iter().map(SummaryInput::from).collect();

    let items = state.summarization_service.summarize_batch(&inputs).await?;

    Ok(Json(items.into_iter().map(SummarizeResponse::from).collect()))
}
