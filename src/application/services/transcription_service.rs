use std::sync::Arc;

use crate::application::ports::{BackendInfo, Transcript, TranscriptionEngine, TranscriptionError};
use crate::domain::{AudioUpload, TranscriptionResult};

use super::input_validator::{InputValidator, ValidationError};

pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_CONFIDENCE: f32 = 0.8;

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("transcription failed: {0}")]
    Failed(#[source] TranscriptionError),
}

pub struct TranscriptionService {
    engine: Arc<dyn TranscriptionEngine>,
    validator: InputValidator,
}

impl TranscriptionService {
    pub fn new(engine: Arc<dyn TranscriptionEngine>, validator: InputValidator) -> Self {
        Self { engine, validator }
    }

    pub fn backend(&self) -> BackendInfo {
        self.engine.info()
    }

    pub fn max_audio_bytes(&self) -> usize {
        self.validator.limits().max_audio_bytes
    }

    pub async fn transcribe(
        &self,
        upload: AudioUpload,
    ) -> Result<TranscriptionResult, TranscriptionServiceError> {
        let request = self.validator.validate_audio(upload)?;

        tracing::info!(
            filename = %request.filename,
            format = %request.format,
            bytes = request.size_bytes(),
            "Transcribing audio"
        );

        let transcript = self
            .engine
            .transcribe(&request)
            .await
            .map_err(TranscriptionServiceError::Failed)?;

        let result = normalize(transcript);

        tracing::info!(
            chars = result.transcript.len(),
            language = %result.language,
            confidence = result.confidence,
            duration_secs = result.duration_secs,
            "Transcription completed"
        );

        Ok(result)
    }
}

fn normalize(transcript: Transcript) -> TranscriptionResult {
    let language = transcript
        .language
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

    TranscriptionResult::new(
        transcript.text.trim().to_string(),
        transcript.confidence.unwrap_or(DEFAULT_CONFIDENCE),
        language,
        transcript.duration_secs.unwrap_or(0.0),
    )
}
