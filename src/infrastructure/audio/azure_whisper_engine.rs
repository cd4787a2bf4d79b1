use async_trait::async_trait;
use reqwest::multipart;

use crate::application::ports::{
    BackendInfo, Transcript, TranscriptionEngine, TranscriptionError,
};
use crate::domain::TranscriptionRequest;

use super::verbose_transcription::{audio_part, read_verbose_response};

pub struct AzureWhisperEngine {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    deployment: String,
}

impl AzureWhisperEngine {
    pub fn new(base_url: &str, deployment: &str, api_key: &str, api_version: &str) -> Self {
        let endpoint = format!(
            "{}/openai/deployments/{}/audio/transcriptions?api-version={}",
            base_url.trim_end_matches('/'),
            deployment,
            api_version,
        );
        Self {
            client: reqwest::Client::new(),
            endpoint,
            api_key: api_key.to_string(),
            deployment: deployment.to_string(),
        }
    }
}

#[async_trait]
impl TranscriptionEngine for AzureWhisperEngine {
    async fn transcribe(
        &self,
        request: &TranscriptionRequest,
    ) -> Result<Transcript, TranscriptionError> {
        let form = multipart::Form::new()
            .text("response_format", "verbose_json")
            .part("file", audio_part(request)?);

        tracing::debug!(endpoint = %self.endpoint, "Sending audio to Azure OpenAI Whisper");

        let response = self
            .client
            .post(&self.endpoint)
            .header("api-key", &self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("request: {}", e)))?;

        let transcript = read_verbose_response(response).await?;

        tracing::info!(
            chars = transcript.text.len(),
            "Azure OpenAI Whisper transcription completed"
        );

        Ok(transcript)
    }

    fn info(&self) -> BackendInfo {
        BackendInfo::new("azure", &self.deployment)
    }
}
