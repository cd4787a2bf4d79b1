use serde::{Deserialize, Serialize};

use crate::application::ports::BackendInfo;
use crate::application::services::BatchItem;
use crate::domain::{SummarizationResult, SummaryInput, TranscriptionResult};

#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    pub text: String,
    #[serde(default)]
    pub max_length: Option<usize>,
    #[serde(default)]
    pub style: Option<String>,
}

impl From<SummarizeRequest> for SummaryInput {
    fn from(request: SummarizeRequest) -> Self {
        Self {
            text: request.text,
            max_length: request.max_length,
            style: request.style,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TranscriptionResponse {
    pub transcript: String,
    pub confidence: f32,
    pub language: String,
    pub duration: f64,
}

impl From<TranscriptionResult> for TranscriptionResponse {
    fn from(result: TranscriptionResult) -> Self {
        Self {
            transcript: result.transcript,
            confidence: result.confidence,
            language: result.language,
            duration: result.duration_secs,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SummarizeResponse {
    pub summary: String,
    pub word_count: usize,
    pub original_length: usize,
    pub style: String,
    pub model_used: String,
}

impl From<SummarizationResult> for SummarizeResponse {
    fn from(result: SummarizationResult) -> Self {
        Self {
            summary: result.summary,
            word_count: result.word_count,
            original_length: result.original_length,
            style: result.style.to_string(),
            model_used: result.model_used,
        }
    }
}

impl From<BatchItem> for SummarizeResponse {
    fn from(item: BatchItem) -> Self {
        match item.outcome {
            Ok(result) => result.into(),
            Err(e) => Self {
                summary: format!("Error: {}", e),
                word_count: 0,
                original_length: item.request.original_length(),
                style: item.request.style.to_string(),
                model_used: "error".to_string(),
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
    pub provider: String,
    pub model: String,
    pub available: bool,
}

impl From<BackendInfo> for StatusResponse {
    fn from(info: BackendInfo) -> Self {
        Self {
            status: "operational".to_string(),
            provider: info.provider,
            model: info.model,
            available: true,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    pub status_code: u16,
}
