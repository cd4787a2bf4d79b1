use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{
    BackendInfo, CompletionRequest, LlmClient, SummarizationError, Summarizer, Summary,
};
use crate::domain::{SummarizationRequest, SummaryStyle};
use crate::infrastructure::observability::sanitize_for_log;

pub const SYSTEM_PROMPT: &str =
    "You are an AI assistant specialized in creating clear and concise summaries.";

/// Summarizes through a hosted chat-completion model.
pub struct LlmSummarizer<L: LlmClient + ?Sized> {
    client: Arc<L>,
}

impl<L: LlmClient + ?Sized> LlmSummarizer<L> {
    pub fn new(client: Arc<L>) -> Self {
        Self { client }
    }
}

pub fn build_prompt(request: &SummarizationRequest) -> String {
    let style_instruction = match request.style {
        SummaryStyle::BulletPoints => {
            "Use bullet points to highlight key information and action items. "
        }
        SummaryStyle::Paragraph => "Provide a coherent paragraph summary. ",
        SummaryStyle::Executive => {
            "Create an executive summary suitable for business presentations. "
        }
        SummaryStyle::Technical => {
            "Provide a technical summary with specific details and terminology. "
        }
    };

    format!(
        "Please summarize the following text clearly and concisely. {}Keep the summary under {} words. Here's the text to summarize:\n\n{}",
        style_instruction, request.max_length, request.text
    )
}

#[async_trait]
impl<L: LlmClient + ?Sized + 'static> Summarizer for LlmSummarizer<L> {
    async fn summarize(
        &self,
        request: &SummarizationRequest,
    ) -> Result<Summary, SummarizationError> {
        let completion = CompletionRequest {
            system: SYSTEM_PROMPT.to_string(),
            user: build_prompt(request),
            // roughly two tokens per word
            max_tokens: request.max_length * 2,
        };

        tracing::debug!(text = %sanitize_for_log(&request.text), "Requesting hosted summary");

        let text = self.client.complete(&completion).await?;

        Ok(Summary {
            text,
            model: self.client.info().model,
        })
    }

    fn info(&self) -> BackendInfo {
        self.client.info()
    }
}
