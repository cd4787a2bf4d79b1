use std::sync::Arc;

use crate::application::ports::{SummarizationError, Summarizer};
use crate::presentation::config::{SummarizationProviderSetting, SummarizationSettings};

use super::candle_t5_summarizer::CandleT5Summarizer;
use super::chat_completion_client::ChatCompletionClient;
use super::llm_summarizer::LlmSummarizer;

pub struct SummarizerFactory;

impl SummarizerFactory {
    pub fn create(
        settings: &SummarizationSettings,
    ) -> Result<Arc<dyn Summarizer>, SummarizationError> {
        match settings.provider {
            SummarizationProviderSetting::Local => {
                tracing::info!(
                    model = %settings.local_model,
                    "Selecting local T5 summarization"
                );
                let summarizer = CandleT5Summarizer::new(&settings.local_model)?;
                Ok(Arc::new(summarizer))
            }
            provider => {
                tracing::info!(
                    provider = provider.as_str(),
                    model = %settings.hosted_model,
                    "Selecting hosted LLM summarization"
                );
                let client = ChatCompletionClient::from_settings(settings)?;
                Ok(Arc::new(LlmSummarizer::new(Arc::new(client))))
            }
        }
    }
}
