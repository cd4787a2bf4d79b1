use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{BackendInfo, CompletionRequest, LlmClient, LlmClientError};
use crate::presentation::config::{SummarizationProviderSetting, SummarizationSettings};

const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Non-streaming client for OpenAI-compatible `/chat/completions` endpoints
/// (OpenAI, Azure OpenAI deployments, LM Studio).
pub struct ChatCompletionClient {
    client: Client,
    provider: SummarizationProviderSetting,
    base_url: String,
    api_key: String,
    api_version: Option<String>,
    model: String,
    temperature: f32,
    top_p: f32,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    max_tokens: usize,
    temperature: f32,
    top_p: f32,
}

#[derive(Serialize, Deserialize, Clone)]
struct ChatMessage {
    role: String,
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

impl ChatCompletionClient {
    pub fn from_settings(settings: &SummarizationSettings) -> Result<Self, LlmClientError> {
        let base_url = match settings.provider {
            SummarizationProviderSetting::OpenAi => settings
                .base_url
                .as_deref()
                .unwrap_or(OPENAI_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            SummarizationProviderSetting::LmStudio => settings
                .base_url
                .as_deref()
                .ok_or_else(|| {
                    LlmClientError::InvalidConfiguration(
                        "base_url required for lmstudio provider".to_string(),
                    )
                })?
                .trim_end_matches('/')
                .to_string(),
            SummarizationProviderSetting::Azure => {
                let endpoint = settings.azure_endpoint.as_deref().ok_or_else(|| {
                    LlmClientError::InvalidConfiguration(
                        "azure_endpoint required for azure provider".to_string(),
                    )
                })?;
                format!(
                    "{}/openai/deployments/{}",
                    endpoint.trim_end_matches('/'),
                    settings.hosted_model
                )
            }
            SummarizationProviderSetting::Local => {
                return Err(LlmClientError::InvalidConfiguration(
                    "local provider has no chat completion endpoint".to_string(),
                ));
            }
        };

        let api_key = settings.api_key.clone().unwrap_or_default();
        if api_key.is_empty() && settings.provider != SummarizationProviderSetting::LmStudio {
            return Err(LlmClientError::InvalidConfiguration(format!(
                "API key required for {} provider",
                settings.provider.as_str()
            )));
        }

        let api_version = (settings.provider == SummarizationProviderSetting::Azure)
            .then(|| settings.azure_api_version.clone());

        Ok(Self {
            client: Client::new(),
            provider: settings.provider,
            base_url,
            api_key,
            api_version,
            model: settings.hosted_model.clone(),
            temperature: settings.temperature,
            top_p: settings.top_p,
        })
    }

    fn apply_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.provider {
            SummarizationProviderSetting::Azure => request.header("api-key", &self.api_key),
            _ if self.api_key.is_empty() => request,
            _ => request.bearer_auth(&self.api_key),
        }
    }
}

#[async_trait]
impl LlmClient for ChatCompletionClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmClientError> {
        let body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: Some(request.system.clone()),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: Some(request.user.clone()),
                },
            ],
            max_tokens: request.max_tokens,
            temperature: self.temperature,
            top_p: self.top_p,
        };

        let mut http_request = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .json(&body);
        if let Some(version) = &self.api_version {
            http_request = http_request.query(&[("api-version", version)]);
        }

        tracing::debug!(
            provider = self.provider.as_str(),
            model = %self.model,
            max_tokens = request.max_tokens,
            "Sending chat completion request"
        );

        let response = self
            .apply_auth(http_request)
            .send()
            .await
            .map_err(|e| LlmClientError::ApiRequestFailed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(LlmClientError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(LlmClientError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| LlmClientError::InvalidResponse(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .ok_or_else(|| LlmClientError::InvalidResponse("empty choices".to_string()))
    }

    fn info(&self) -> BackendInfo {
        BackendInfo::new(self.provider.as_str(), &self.model)
    }
}
