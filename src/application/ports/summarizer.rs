use async_trait::async_trait;

use super::{BackendInfo, LlmClientError};
use crate::domain::SummarizationRequest;

/// Backend output before the word limit is enforced.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub text: String,
    pub model: String,
}

#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(
        &self,
        request: &SummarizationRequest,
    ) -> Result<Summary, SummarizationError>;

    fn info(&self) -> BackendInfo;
}

#[derive(Debug, thiserror::Error)]
pub enum SummarizationError {
    #[error("model loading failed: {0}")]
    ModelLoadFailed(String),
    #[error("inference failed: {0}")]
    InferenceFailed(String),
    #[error("completion failed: {0}")]
    Completion(#[from] LlmClientError),
    #[error("backend returned an empty summary")]
    EmptySummary,
}
