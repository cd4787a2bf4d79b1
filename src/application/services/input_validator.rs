use crate::domain::{
    AudioFormat, AudioUpload, SummarizationRequest, SummaryInput, SummaryStyle,
    TranscriptionRequest,
};

pub const MIN_SUMMARY_WORDS: usize = 10;
pub const MAX_SUMMARY_WORDS: usize = 500;
pub const DEFAULT_SUMMARY_WORDS: usize = 150;

const GENERIC_CONTENT_TYPE: &str = "application/octet-stream";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationLimits {
    pub max_audio_bytes: usize,
    pub min_text_chars: usize,
    pub max_text_chars: usize,
    pub max_batch_size: usize,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            max_audio_bytes: 50 * 1024 * 1024,
            min_text_chars: 10,
            max_text_chars: 100_000,
            max_batch_size: 10,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("no audio file provided")]
    MissingAudio,
    #[error("audio payload is empty")]
    EmptyAudio,
    #[error("audio payload of {size} bytes exceeds the {limit} byte limit")]
    AudioTooLarge { size: usize, limit: usize },
    #[error(
        "unsupported audio format: {0}. Supported formats: MP3, WAV, M4A, FLAC, OGG, WEBM"
    )]
    UnsupportedAudioFormat(String),
    #[error("text cannot be empty")]
    EmptyText,
    #[error("text too short for summarization (minimum {min} characters)")]
    TextTooShort { min: usize },
    #[error("text of {length} characters exceeds the {max} character limit")]
    TextTooLong { length: usize, max: usize },
    #[error("max_length must be between {min} and {max} words, got {value}")]
    MaxLengthOutOfRange { value: usize, min: usize, max: usize },
    #[error("{0}")]
    UnknownStyle(String),
    #[error("no texts provided for batch summarization")]
    EmptyBatch,
    #[error("too many texts for batch processing: {size} (max {max})")]
    BatchTooLarge { size: usize, max: usize },
    #[error("item {index}: {source}")]
    InvalidBatchItem {
        index: usize,
        source: Box<ValidationError>,
    },
}

/// Rejects malformed input before any backend is contacted.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputValidator {
    limits: ValidationLimits,
}

impl InputValidator {
    pub fn new(limits: ValidationLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &ValidationLimits {
        &self.limits
    }

    pub fn validate_audio(
        &self,
        upload: AudioUpload,
    ) -> Result<TranscriptionRequest, ValidationError> {
        if upload.data.is_empty() {
            return Err(ValidationError::EmptyAudio);
        }

        if upload.data.len() > self.limits.max_audio_bytes {
            return Err(ValidationError::AudioTooLarge {
                size: upload.data.len(),
                limit: self.limits.max_audio_bytes,
            });
        }

        let format = resolve_format(upload.filename.as_deref(), upload.content_type.as_deref())?;
        let filename = upload
            .filename
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| format!("audio.{}", format.extension()));

        Ok(TranscriptionRequest {
            filename,
            format,
            data: upload.data,
        })
    }

    pub fn validate_summary(
        &self,
        input: &SummaryInput,
    ) -> Result<SummarizationRequest, ValidationError> {
        let text = input.text.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyText);
        }

        let length = text.chars().count();
        if length < self.limits.min_text_chars {
            return Err(ValidationError::TextTooShort {
                min: self.limits.min_text_chars,
            });
        }
        if length > self.limits.max_text_chars {
            return Err(ValidationError::TextTooLong {
                length,
                max: self.limits.max_text_chars,
            });
        }

        let max_length = input.max_length.unwrap_or(DEFAULT_SUMMARY_WORDS);
        if !(MIN_SUMMARY_WORDS..=MAX_SUMMARY_WORDS).contains(&max_length) {
            return Err(ValidationError::MaxLengthOutOfRange {
                value: max_length,
                min: MIN_SUMMARY_WORDS,
                max: MAX_SUMMARY_WORDS,
            });
        }

        let style = match input.style.as_deref() {
            Some(raw) => raw
                .parse::<SummaryStyle>()
                .map_err(ValidationError::UnknownStyle)?,
            None => SummaryStyle::default(),
        };

        Ok(SummarizationRequest {
            text: text.to_string(),
            max_length,
            style,
        })
    }

    pub fn validate_batch(
        &self,
        inputs: &[SummaryInput],
    ) -> Result<Vec<SummarizationRequest>, ValidationError> {
        if inputs.is_empty() {
            return Err(ValidationError::EmptyBatch);
        }
        if inputs.len() > self.limits.max_batch_size {
            return Err(ValidationError::BatchTooLarge {
                size: inputs.len(),
                max: self.limits.max_batch_size,
            });
        }

        inputs
            .iter()
            .enumerate()
            .map(|(index, input)| {
                self.validate_summary(input)
                    .map_err(|e| ValidationError::InvalidBatchItem {
                        index,
                        source: Box::new(e),
                    })
            })
            .collect()
    }
}

fn resolve_format(
    filename: Option<&str>,
    content_type: Option<&str>,
) -> Result<AudioFormat, ValidationError> {
    // An extension, when present, must be supported even if the MIME type decides the format.
    if let Some(name) = filename {
        let unsupported_extension = name
            .rsplit_once('.')
            .is_some_and(|(_, ext)| AudioFormat::from_extension(ext).is_none());
        if unsupported_extension {
            return Err(ValidationError::UnsupportedAudioFormat(name.to_string()));
        }
    }

    let declared = content_type
        .map(str::trim)
        .filter(|ct| !ct.is_empty() && !ct.eq_ignore_ascii_case(GENERIC_CONTENT_TYPE));

    match declared {
        Some(ct) => AudioFormat::from_mime(ct)
            .ok_or_else(|| ValidationError::UnsupportedAudioFormat(ct.to_string())),
        None => filename
            .and_then(AudioFormat::from_filename)
            .ok_or_else(|| {
                ValidationError::UnsupportedAudioFormat(
                    filename.unwrap_or("unnamed upload").to_string(),
                )
            }),
    }
}
