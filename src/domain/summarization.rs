use super::summary_style::SummaryStyle;

/// Raw summarization input as received from a client.
#[derive(Debug, Clone, Default)]
pub struct SummaryInput {
    pub text: String,
    pub max_length: Option<usize>,
    pub style: Option<String>,
}

/// Validated summarization input. `text` is trimmed and non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct SummarizationRequest {
    pub text: String,
    pub max_length: usize,
    pub style: SummaryStyle,
}

impl SummarizationRequest {
    pub fn original_length(&self) -> usize {
        self.text.chars().count()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummarizationResult {
    pub summary: String,
    pub word_count: usize,
    pub original_length: usize,
    pub style: SummaryStyle,
    pub model_used: String,
}
