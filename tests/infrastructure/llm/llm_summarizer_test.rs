use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use voxnote::application::ports::{
    BackendInfo, CompletionRequest, LlmClient, LlmClientError, SummarizationError, Summarizer,
};
use voxnote::domain::{SummarizationRequest, SummaryStyle};
use voxnote::infrastructure::llm::{LlmSummarizer, SYSTEM_PROMPT, build_prompt};

struct RecordingLlmClient {
    reply: Result<String, ()>,
    last_request: Mutex<Option<CompletionRequest>>,
}

impl RecordingLlmClient {
    fn new(reply: Result<String, ()>) -> Arc<Self> {
        Arc::new(Self {
            reply,
            last_request: Mutex::new(None),
        })
    }

    fn last_request(&self) -> Option<CompletionRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmClient for RecordingLlmClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmClientError> {
        *self.last_request.lock().unwrap() = Some(request.clone());
        self.reply.clone().map_err(|_| LlmClientError::RateLimited)
    }

    fn info(&self) -> BackendInfo {
        BackendInfo::new("openai", "gpt-4o-mini")
    }
}

fn request(style: SummaryStyle) -> SummarizationRequest {
    SummarizationRequest {
        text: "The meeting covered the quarterly roadmap.".to_string(),
        max_length: 40,
        style,
    }
}

#[test]
fn given_each_style_when_building_prompt_then_includes_style_instruction_and_limit() {
    let cases = [
        (SummaryStyle::BulletPoints, "bullet points"),
        (SummaryStyle::Paragraph, "coherent paragraph"),
        (SummaryStyle::Executive, "executive summary"),
        (SummaryStyle::Technical, "technical summary"),
    ];

    for (style, instruction) in cases {
        let prompt = build_prompt(&request(style));
        assert!(prompt.contains(instruction), "{:?}: {}", style, prompt);
        assert!(prompt.contains("Keep the summary under 40 words."));
        assert!(prompt.ends_with("The meeting covered the quarterly roadmap."));
    }
}

#[tokio::test]
async fn given_request_when_summarizing_then_sends_system_prompt_and_token_budget() {
    let client = RecordingLlmClient::new(Ok("A summary.".to_string()));
    let summarizer = LlmSummarizer::new(client.clone());

    let summary = summarizer
        .summarize(&request(SummaryStyle::Paragraph))
        .await
        .unwrap();

    assert_eq!(summary.text, "A summary.");
    assert_eq!(summary.model, "gpt-4o-mini");
    let sent = client.last_request().unwrap();
    assert_eq!(sent.system, SYSTEM_PROMPT);
    assert_eq!(sent.max_tokens, 80);
}

#[tokio::test]
async fn given_client_error_when_summarizing_then_wraps_it() {
    let summarizer = LlmSummarizer::new(RecordingLlmClient::new(Err(())));

    let result = summarizer.summarize(&request(SummaryStyle::Executive)).await;

    assert!(matches!(
        result,
        Err(SummarizationError::Completion(LlmClientError::RateLimited))
    ));
}

#[test]
fn given_summarizer_when_reporting_info_then_delegates_to_client() {
    let summarizer = LlmSummarizer::new(RecordingLlmClient::new(Ok(String::new())));

    assert_eq!(summarizer.info().provider, "openai");
}
