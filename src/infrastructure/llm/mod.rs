mod candle_t5_summarizer;
mod chat_completion_client;
mod llm_summarizer;
pub mod style_formatter;
mod summarizer_factory;

pub use candle_t5_summarizer::CandleT5Summarizer;
pub use chat_completion_client::ChatCompletionClient;
pub use llm_summarizer::{LlmSummarizer, SYSTEM_PROMPT, build_prompt};
pub use summarizer_factory::SummarizerFactory;
