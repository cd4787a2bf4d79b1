use std::sync::Arc;

use futures::future::join_all;

use crate::application::ports::{BackendInfo, SummarizationError, Summarizer};
use crate::domain::{SummarizationRequest, SummarizationResult, SummaryInput};

use super::input_validator::{InputValidator, ValidationError};
use super::word_counter::{count_words, truncate_words};

#[derive(Debug, thiserror::Error)]
pub enum SummarizationServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("summarization failed: {0}")]
    Failed(#[source] SummarizationError),
}

/// Outcome of one batch entry. A backend failure does not fail the batch.
#[derive(Debug)]
pub struct BatchItem {
    pub request: SummarizationRequest,
    pub outcome: Result<SummarizationResult, SummarizationError>,
}

pub struct SummarizationService {
    summarizer: Arc<dyn Summarizer>,
    validator: InputValidator,
}

impl SummarizationService {
    pub fn new(summarizer: Arc<dyn Summarizer>, validator: InputValidator) -> Self {
        Self {
            summarizer,
            validator,
        }
    }

    pub fn backend(&self) -> BackendInfo {
        self.summarizer.info()
    }

    pub async fn summarize(
        &self,
        input: &SummaryInput,
    ) -> Result<SummarizationResult, SummarizationServiceError> {
        let request = self.validator.validate_summary(input)?;

        tracing::info!(
            original_length = request.original_length(),
            max_length = request.max_length,
            style = %request.style,
            "Summarizing text"
        );

        self.run(&request)
            .await
            .map_err(SummarizationServiceError::Failed)
    }

    pub async fn summarize_batch(
        &self,
        inputs: &[SummaryInput],
    ) -> Result<Vec<BatchItem>, ValidationError> {
        let requests = self.validator.validate_batch(inputs)?;

        tracing::info!(count = requests.len(), "Processing batch summarization");

        let outcomes = join_all(requests.iter().map(|request| self.run(request))).await;

        let items: Vec<BatchItem> = requests
            .into_iter()
            .zip(outcomes)
            .enumerate()
            .map(|(index, (request, outcome))| {
                if let Err(e) = &outcome {
                    tracing::error!(index, error = %e, "Batch item summarization failed");
                }
                BatchItem { request, outcome }
            })
            .collect();

        Ok(items)
    }

    async fn run(
        &self,
        request: &SummarizationRequest,
    ) -> Result<SummarizationResult, SummarizationError> {
        let summary = self.summarizer.summarize(request).await?;

        let text = truncate_words(summary.text.trim(), request.max_length);
        if text.is_empty() {
            return Err(SummarizationError::EmptySummary);
        }

        let word_count = count_words(&text);
        tracing::info!(word_count, model = %summary.model, "Summarization completed");

        Ok(SummarizationResult {
            summary: text,
            word_count,
            original_length: request.original_length(),
            style: request.style,
            model_used: summary.model,
        })
    }
}
