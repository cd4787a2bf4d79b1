use config::{Config, ConfigError, Environment as EnvironmentSource, File};
use serde::Deserialize;

use super::Environment;
use crate::application::services::ValidationLimits;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub logging: LoggingSettings,
    pub limits: LimitSettings,
    pub transcription: TranscriptionSettings,
    pub summarization: SummarizationSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LimitSettings {
    pub max_audio_mb: usize,
    pub min_text_chars: usize,
    pub max_text_chars: usize,
    pub max_batch_size: usize,
}

impl LimitSettings {
    pub fn validation_limits(&self) -> ValidationLimits {
        ValidationLimits {
            max_audio_bytes: self.max_audio_mb.saturating_mul(1024 * 1024),
            min_text_chars: self.min_text_chars,
            max_text_chars: self.max_text_chars,
            max_batch_size: self.max_batch_size,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranscriptionProviderSetting {
    Local,
    #[serde(rename = "openai")]
    OpenAi,
    Azure,
}

impl TranscriptionProviderSetting {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::OpenAi => "openai",
            Self::Azure => "azure",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionSettings {
    pub provider: TranscriptionProviderSetting,
    pub local_model: String,
    pub hosted_model: String,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub azure_endpoint: Option<String>,
    pub azure_deployment: Option<String>,
    pub azure_api_version: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummarizationProviderSetting {
    Local,
    #[serde(rename = "openai")]
    OpenAi,
    Azure,
    #[serde(rename = "lmstudio")]
    LmStudio,
}

impl SummarizationProviderSetting {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::OpenAi => "openai",
            Self::Azure => "azure",
            Self::LmStudio => "lmstudio",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SummarizationSettings {
    pub provider: SummarizationProviderSetting,
    pub local_model: String,
    pub hosted_model: String,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub azure_endpoint: Option<String>,
    pub azure_api_version: String,
    pub temperature: f32,
    pub top_p: f32,
}

impl Settings {
    /// Layers built-in defaults, the optional `appsettings.<env>` file and
    /// `APP__SECTION__KEY` variables, in increasing precedence.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("logging.level", "info")?
            .set_default("logging.enable_json", false)?
            .set_default("limits.max_audio_mb", 50)?
            .set_default("limits.min_text_chars", 10)?
            .set_default("limits.max_text_chars", 100_000)?
            .set_default("limits.max_batch_size", 10)?
            .set_default("transcription.provider", "local")?
            .set_default("transcription.local_model", "openai/whisper-base")?
            .set_default("transcription.hosted_model", "whisper-1")?
            .set_default("transcription.azure_api_version", "2024-06-01")?
            .set_default("summarization.provider", "openai")?
            .set_default("summarization.local_model", "google-t5/t5-small")?
            .set_default("summarization.hosted_model", "gpt-4o-mini")?
            .set_default("summarization.azure_api_version", "2024-06-01")?
            .set_default("summarization.temperature", 0.3)?
            .set_default("summarization.top_p", 0.9)?;

        if let Ok(key) = std::env::var("OPENAI_API_KEY") {
            builder = builder
                .set_default("transcription.api_key", key.clone())?
                .set_default("summarization.api_key", key)?;
        }

        builder
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.file_suffix()))
                    .required(false),
            )
            .add_source(EnvironmentSource::with_prefix("APP").separator("__"))
            .build()?
            .try_deserialize()
    }
}
