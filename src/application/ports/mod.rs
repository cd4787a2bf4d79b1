mod backend_info;
mod llm_client;
mod summarizer;
mod transcription_engine;

pub use backend_info::BackendInfo;
pub use llm_client::{CompletionRequest, LlmClient, LlmClientError};
pub use summarizer::{SummarizationError, Summarizer, Summary};
pub use transcription_engine::{Transcript, TranscriptionEngine, TranscriptionError};
