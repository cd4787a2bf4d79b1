use async_trait::async_trait;
use reqwest::multipart;

use crate::application::ports::{
    BackendInfo, Transcript, TranscriptionEngine, TranscriptionError,
};
use crate::domain::TranscriptionRequest;

use super::verbose_transcription::{audio_part, read_verbose_response};

pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

pub struct OpenAiWhisperEngine {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiWhisperEngine {
    pub fn new(api_key: String, base_url: Option<String>, model: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or_else(|| OPENAI_BASE_URL.to_string()),
            model: model.unwrap_or_else(|| "whisper-1".to_string()),
        }
    }
}

#[async_trait]
impl TranscriptionEngine for OpenAiWhisperEngine {
    async fn transcribe(
        &self,
        request: &TranscriptionRequest,
    ) -> Result<Transcript, TranscriptionError> {
        let url = format!("{}/audio/transcriptions", self.base_url);

        let form = multipart::Form::new()
            .text("model", self.model.clone())
            .text("response_format", "verbose_json")
            .part("file", audio_part(request)?);

        tracing::debug!(
            model = %self.model,
            bytes = request.size_bytes(),
            "Sending audio to OpenAI Whisper API"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("request: {}", e)))?;

        let transcript = read_verbose_response(response).await?;

        tracing::info!(
            chars = transcript.text.len(),
            "OpenAI Whisper transcription completed"
        );

        Ok(transcript)
    }

    fn info(&self) -> BackendInfo {
        BackendInfo::new("openai", &self.model)
    }
}
