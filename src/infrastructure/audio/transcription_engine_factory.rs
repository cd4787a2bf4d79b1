use std::sync::Arc;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::presentation::config::{TranscriptionProviderSetting, TranscriptionSettings};

use super::azure_whisper_engine::AzureWhisperEngine;
use super::candle_whisper_engine::CandleWhisperEngine;
use super::openai_whisper_engine::OpenAiWhisperEngine;

pub struct TranscriptionEngineFactory;

impl TranscriptionEngineFactory {
    pub fn create(
        settings: &TranscriptionSettings,
    ) -> Result<Arc<dyn TranscriptionEngine>, TranscriptionError> {
        match settings.provider {
            TranscriptionProviderSetting::Local => {
                tracing::info!(
                    model = %settings.local_model,
                    "Selecting local Whisper transcription"
                );
                let engine = CandleWhisperEngine::new(&settings.local_model)?;
                Ok(Arc::new(engine))
            }
            TranscriptionProviderSetting::OpenAi => {
                let key = required_api_key(settings, "OpenAI Whisper")?;
                tracing::info!(
                    model = %settings.hosted_model,
                    "Selecting OpenAI Whisper transcription"
                );
                let engine = OpenAiWhisperEngine::new(
                    key,
                    settings.base_url.clone(),
                    Some(settings.hosted_model.clone()),
                );
                Ok(Arc::new(engine))
            }
            TranscriptionProviderSetting::Azure => {
                let key = required_api_key(settings, "Azure OpenAI Whisper")?;
                let endpoint = settings.azure_endpoint.as_deref().ok_or_else(|| {
                    TranscriptionError::ModelLoadFailed(
                        "azure_endpoint required for Azure OpenAI Whisper".to_string(),
                    )
                })?;
                let deployment = settings
                    .azure_deployment
                    .as_deref()
                    .unwrap_or(&settings.hosted_model);
                tracing::info!(deployment, "Selecting Azure OpenAI Whisper transcription");
                let engine = AzureWhisperEngine::new(
                    endpoint,
                    deployment,
                    &key,
                    &settings.azure_api_version,
                );
                Ok(Arc::new(engine))
            }
        }
    }
}

fn required_api_key(
    settings: &TranscriptionSettings,
    backend: &str,
) -> Result<String, TranscriptionError> {
    settings
        .api_key
        .clone()
        .filter(|k| !k.is_empty())
        .ok_or_else(|| {
            TranscriptionError::ModelLoadFailed(format!("API key required for {}", backend))
        })
}
