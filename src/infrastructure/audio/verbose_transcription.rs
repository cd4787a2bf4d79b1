use reqwest::multipart;
use serde::Deserialize;

use crate::application::ports::{Transcript, TranscriptionError};
use crate::domain::TranscriptionRequest;

use super::languages::language_code;

/// Hosted Whisper does not report confidence when no segments are returned.
pub const HOSTED_DEFAULT_CONFIDENCE: f32 = 0.95;

/// `response_format=verbose_json` body shared by OpenAI and Azure OpenAI.
#[derive(Debug, Deserialize)]
pub struct VerboseTranscription {
    pub text: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub segments: Vec<VerboseSegment>,
}

#[derive(Debug, Deserialize)]
pub struct VerboseSegment {
    #[serde(default)]
    pub avg_logprob: Option<f64>,
}

impl VerboseTranscription {
    pub fn into_transcript(self) -> Transcript {
        let logprobs: Vec<f64> = self
            .segments
            .iter()
            .filter_map(|s| s.avg_logprob)
            .collect();

        let confidence = if logprobs.is_empty() {
            HOSTED_DEFAULT_CONFIDENCE
        } else {
            (logprobs.iter().map(|lp| lp.exp()).sum::<f64>() / logprobs.len() as f64) as f32
        };

        let language = self.language.as_deref().map(|reported| {
            language_code(reported)
                .map(str::to_string)
                .unwrap_or_else(|| reported.trim().to_lowercase())
        });

        Transcript {
            text: self.text.trim().to_string(),
            language,
            confidence: Some(confidence),
            duration_secs: self.duration,
        }
    }
}

pub fn audio_part(request: &TranscriptionRequest) -> Result<multipart::Part, TranscriptionError> {
    multipart::Part::bytes(request.data.to_vec())
        .file_name(request.upload_name())
        .mime_str(request.format.as_mime())
        .map_err(|e| TranscriptionError::ApiRequestFailed(format!("mime: {}", e)))
}

pub async fn read_verbose_response(
    response: reqwest::Response,
) -> Result<Transcript, TranscriptionError> {
    if !response.status().is_success() {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "unknown error".to_string());
        return Err(TranscriptionError::ApiRequestFailed(format!(
            "status {}: {}",
            status, body
        )));
    }

    let body: VerboseTranscription = response
        .json()
        .await
        .map_err(|e| TranscriptionError::ApiRequestFailed(format!("parse response: {}", e)))?;

    Ok(body.into_transcript())
}
