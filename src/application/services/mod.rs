mod input_validator;
mod summarization_service;
mod transcription_service;
mod word_counter;

pub use input_validator::{
    DEFAULT_SUMMARY_WORDS, InputValidator, MAX_SUMMARY_WORDS, MIN_SUMMARY_WORDS, ValidationError,
    ValidationLimits,
};
pub use summarization_service::{BatchItem, SummarizationService, SummarizationServiceError};
pub use transcription_service::{
    DEFAULT_CONFIDENCE, DEFAULT_LANGUAGE, TranscriptionService, TranscriptionServiceError,
};
pub use word_counter::{count_words, truncate_words};
