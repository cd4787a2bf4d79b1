use std::collections::HashMap;

use axum::extract::Query;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{Value, json};

use voxnote::application::ports::{CompletionRequest, LlmClient, LlmClientError};
use voxnote::infrastructure::llm::ChatCompletionClient;
use voxnote::presentation::config::{SummarizationProviderSetting, SummarizationSettings};

use crate::infrastructure::mock_server::start_mock_server;

fn settings(
    provider: SummarizationProviderSetting,
    base_url: Option<String>,
) -> SummarizationSettings {
    SummarizationSettings {
        provider,
        local_model: "google-t5/t5-small".to_string(),
        hosted_model: "gpt-4o-mini".to_string(),
        api_key: Some("test-key".to_string()),
        base_url,
        azure_endpoint: None,
        azure_api_version: "2024-06-01".to_string(),
        temperature: 0.3,
        top_p: 0.9,
    }
}

fn completion() -> CompletionRequest {
    CompletionRequest {
        system: "system prompt".to_string(),
        user: "summarize this".to_string(),
        max_tokens: 100,
    }
}

/// Replies with a description of what it received so assertions can inspect the request.
async fn describe_request(
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("-")
            .to_string()
    };
    let content = format!(
        "model={} max_tokens={} roles={}/{} auth={} api_key={} version={}",
        body["model"].as_str().unwrap_or("-"),
        body["max_tokens"],
        body["messages"][0]["role"].as_str().unwrap_or("-"),
        body["messages"][1]["role"].as_str().unwrap_or("-"),
        header("authorization"),
        header("api-key"),
        query.get("api-version").map(String::as_str).unwrap_or("-"),
    );
    Json(json!({
        "choices": [{ "message": { "role": "assistant", "content": format!("  {}  ", content) } }]
    }))
}

async fn start_fixed(
    status: u16,
    body: &'static str,
) -> (String, tokio::sync::oneshot::Sender<()>) {
    let app = Router::new().route(
        "/chat/completions",
        post(move || async move { (StatusCode::from_u16(status).unwrap(), body).into_response() }),
    );
    start_mock_server(app).await
}

#[tokio::test]
async fn given_openai_provider_when_completing_then_sends_bearer_auth_and_prompt() {
    let app = Router::new().route("/chat/completions", post(describe_request));
    let (base_url, shutdown_tx) = start_mock_server(app).await;
    let client = ChatCompletionClient::from_settings(&settings(
        SummarizationProviderSetting::OpenAi,
        Some(format!("{}/", base_url)),
    ))
    .unwrap();

    let reply = client.complete(&completion()).await.unwrap();

    assert_eq!(
        reply,
        "model=gpt-4o-mini max_tokens=100 roles=system/user auth=Bearer test-key api_key=- version=-"
    );
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_azure_provider_when_completing_then_uses_deployment_path_and_api_key_header() {
    let app = Router::new().route(
        "/openai/deployments/gpt-4o-mini/chat/completions",
        post(describe_request),
    );
    let (base_url, shutdown_tx) = start_mock_server(app).await;
    let mut settings = settings(SummarizationProviderSetting::Azure, None);
    settings.azure_endpoint = Some(base_url);
    let client = ChatCompletionClient::from_settings(&settings).unwrap();

    let reply = client.complete(&completion()).await.unwrap();

    assert!(reply.contains("auth=-"));
    assert!(reply.contains("api_key=test-key"));
    assert!(reply.contains("version=2024-06-01"));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_lmstudio_without_key_when_completing_then_sends_no_auth() {
    let app = Router::new().route("/chat/completions", post(describe_request));
    let (base_url, shutdown_tx) = start_mock_server(app).await;
    let mut settings = settings(SummarizationProviderSetting::LmStudio, Some(base_url));
    settings.api_key = None;
    let client = ChatCompletionClient::from_settings(&settings).unwrap();

    let reply = client.complete(&completion()).await.unwrap();

    assert!(reply.contains("auth=-"));
    assert_eq!(client.info().provider, "lmstudio");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_429_response_when_completing_then_reports_rate_limited() {
    let (base_url, shutdown_tx) = start_fixed(429, "slow down").await;
    let client = ChatCompletionClient::from_settings(&settings(
        SummarizationProviderSetting::OpenAi,
        Some(base_url),
    ))
    .unwrap();

    let result = client.complete(&completion()).await;

    assert!(matches!(result, Err(LlmClientError::RateLimited)));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_500_response_when_completing_then_reports_status_and_body() {
    let (base_url, shutdown_tx) = start_fixed(500, "upstream broke").await;
    let client = ChatCompletionClient::from_settings(&settings(
        SummarizationProviderSetting::OpenAi,
        Some(base_url),
    ))
    .unwrap();

    let result = client.complete(&completion()).await;

    assert!(matches!(
        result,
        Err(LlmClientError::ApiRequestFailed(ref msg))
            if msg.contains("500") && msg.contains("upstream broke")
    ));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_empty_choices_when_completing_then_reports_invalid_response() {
    let (base_url, shutdown_tx) = start_fixed(200, r#"{"choices": []}"#).await;
    let client = ChatCompletionClient::from_settings(&settings(
        SummarizationProviderSetting::OpenAi,
        Some(base_url),
    ))
    .unwrap();

    let result = client.complete(&completion()).await;

    assert!(matches!(result, Err(LlmClientError::InvalidResponse(_))));
    shutdown_tx.send(()).ok();
}

#[test]
fn given_openai_provider_without_key_when_building_then_rejects_configuration() {
    let mut settings = settings(SummarizationProviderSetting::OpenAi, None);
    settings.api_key = None;

    let result = ChatCompletionClient::from_settings(&settings);

    assert!(matches!(result, Err(LlmClientError::InvalidConfiguration(_))));
}

#[test]
fn given_lmstudio_without_base_url_when_building_then_rejects_configuration() {
    let result =
        ChatCompletionClient::from_settings(&settings(SummarizationProviderSetting::LmStudio, None));

    assert!(matches!(
        result,
        Err(LlmClientError::InvalidConfiguration(ref msg)) if msg.contains("base_url")
    ));
}

#[test]
fn given_local_provider_when_building_then_rejects_configuration() {
    let result =
        ChatCompletionClient::from_settings(&settings(SummarizationProviderSetting::Local, None));

    assert!(matches!(result, Err(LlmClientError::InvalidConfiguration(_))));
}
