use axum::Json;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::application::services::{
    SummarizationServiceError, TranscriptionServiceError, ValidationError,
};

use super::api_types::ErrorResponse;

/// Every failure a handler can return, already mapped to an HTTP status.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    error: String,
    detail: Option<String>,
}

impl ApiError {
    pub fn new(status: StatusCode, error: impl Into<String>, detail: Option<String>) -> Self {
        Self {
            status,
            error: error.into(),
            detail,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn invalid_body(rejection: JsonRejection) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            "Invalid request body",
            Some(rejection.body_text()),
        )
    }

    pub fn invalid_multipart(rejection: MultipartRejection) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            "Invalid multipart request",
            Some(rejection.body_text()),
        )
    }

    /// Keeps the transport status, so an upload cut off by the body limit stays a 413.
    pub fn multipart(error: MultipartError) -> Self {
        let status = error.status();
        let error_text = if status == StatusCode::PAYLOAD_TOO_LARGE {
            "Audio file too large"
        } else {
            "Failed to read multipart upload"
        };
        Self::new(status, error_text, Some(error.body_text()))
    }
}

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        let status = match &error {
            ValidationError::AudioTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ValidationError::UnsupportedAudioFormat(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            _ => StatusCode::BAD_REQUEST,
        };
        Self::new(status, "Validation failed", Some(error.to_string()))
    }
}

impl From<TranscriptionServiceError> for ApiError {
    fn from(error: TranscriptionServiceError) -> Self {
        match error {
            TranscriptionServiceError::Validation(e) => e.into(),
            TranscriptionServiceError::Failed(e) => Self::new(
                StatusCode::BAD_GATEWAY,
                "Transcription failed",
                Some(e.to_string()),
            ),
        }
    }
}

impl From<SummarizationServiceError> for ApiError {
    fn from(error: SummarizationServiceError) -> Self {
        match error {
            SummarizationServiceError::Validation(e) => e.into(),
            SummarizationServiceError::Failed(e) => Self::new(
                StatusCode::BAD_GATEWAY,
                "Summarization failed",
                Some(e.to_string()),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(
                status = %self.status,
                error = %self.error,
                detail = ?self.detail,
                "Request failed"
            );
        } else {
            tracing::warn!(
                status = %self.status,
                error = %self.error,
                detail = ?self.detail,
                "Request rejected"
            );
        }

        (
            self.status,
            Json(ErrorResponse {
                error: self.error,
                detail: self.detail,
                status_code: self.status.as_u16(),
            }),
        )
            .into_response()
    }
}
