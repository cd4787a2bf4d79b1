use bytes::Bytes;

use super::audio_format::AudioFormat;

/// Raw multipart upload before validation.
#[derive(Debug, Clone)]
pub struct AudioUpload {
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub data: Bytes,
}

/// Audio that passed validation and may be handed to a backend.
#[derive(Debug, Clone)]
pub struct TranscriptionRequest {
    pub filename: String,
    pub format: AudioFormat,
    pub data: Bytes,
}

impl TranscriptionRequest {
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    /// Filename to send upstream; falls back to a name derived from the format.
    pub fn upload_name(&self) -> String {
        if AudioFormat::from_filename(&self.filename) == Some(self.format) {
            self.filename.clone()
        } else {
            format!("audio.{}", self.format.extension())
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptionResult {
    pub transcript: String,
    pub confidence: f32,
    pub language: String,
    pub duration_secs: f64,
}

impl TranscriptionResult {
    /// Confidence is clamped into `[0, 1]`; NaN becomes 0. Duration is never negative.
    pub fn new(transcript: String, confidence: f32, language: String, duration_secs: f64) -> Self {
        let confidence = if confidence.is_nan() {
            0.0
        } else {
            confidence.clamp(0.0, 1.0)
        };
        let duration_secs = if duration_secs.is_finite() {
            duration_secs.max(0.0)
        } else {
            0.0
        };
        Self {
            transcript,
            confidence,
            language,
            duration_secs,
        }
    }
}
