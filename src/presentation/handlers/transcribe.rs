use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};

use crate::application::services::ValidationError;
use crate::domain::AudioUpload;
use crate::presentation::state::AppState;

use super::api_types::TranscriptionResponse;
use super::error::ApiError;

const AUDIO_FIELD: &str = "file";

#[tracing::instrument(skip(state, multipart))]
pub async fn transcribe_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<TranscriptionResponse>, ApiError> {
    let mut multipart = multipart.map_err(ApiError::invalid_multipart)?;
    let upload = read_audio_field(&mut multipart).await?;

    let result = state.transcription_service.transcribe(upload).await?;

    Ok(Json(result.into()))
}

/// Takes the `file` field, or failing that the first field that carries a filename.
async fn read_audio_field(multipart: &mut Multipart) -> Result<AudioUpload, ApiError> {
    while let Some(field) = multipart.next_field().await.map_err(ApiError::multipart)? {
        let is_audio = field.name() == Some(AUDIO_FIELD) || field.file_name().is_some();
        if !is_audio {
            tracing::debug!(field = ?field.name(), "Skipping non-audio multipart field");
            continue;
        }

        let filename = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);

        tracing::debug!(filename = ?filename, content_type = ?content_type, "Reading audio upload");

        let data = field.bytes().await.map_err(ApiError::multipart)?;

        return Ok(AudioUpload {
            filename,
            content_type,
            data,
        });
    }

    tracing::warn!("Transcription request without an audio file");
    Err(ValidationError::MissingAudio.into())
}
