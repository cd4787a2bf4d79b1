use voxnote::application::ports::Transcript;
use voxnote::application::services::{
    DEFAULT_CONFIDENCE, InputValidator, TranscriptionService, TranscriptionServiceError,
    ValidationError,
};

use crate::helpers::{MockTranscriptionEngine, audio_upload, small_limits, transcript};

#[tokio::test]
async fn given_valid_upload_when_transcribing_then_backend_is_called_once() {
    let engine = MockTranscriptionEngine::returning(transcript(" hi there "));
    let service = TranscriptionService::new(engine.clone(), InputValidator::default());

    let result = service
        .transcribe(audio_upload(Some("a.wav"), Some("audio/wav"), b"RIFF"))
        .await
        .unwrap();

    assert_eq!(result.transcript, "hi there");
    assert_eq!(engine.calls(), 1);
}

#[tokio::test]
async fn given_backend_reports_language_name_casing_when_transcribing_then_lowercases_it() {
    let engine = MockTranscriptionEngine::returning(Transcript {
        text: "bonjour".to_string(),
        language: Some(" FR ".to_string()),
        confidence: Some(f32::NAN),
        duration_secs: Some(2.0),
    });
    let service = TranscriptionService::new(engine, InputValidator::default());

    let result = service
        .transcribe(audio_upload(Some("a.mp3"), None, b"ID3"))
        .await
        .unwrap();

    assert_eq!(result.language, "fr");
    assert_eq!(result.confidence, 0.0);
    assert_eq!(result.duration_secs, 2.0);
}

#[tokio::test]
async fn given_backend_without_confidence_when_transcribing_then_uses_default() {
    let engine = MockTranscriptionEngine::returning(Transcript {
        text: "plain".to_string(),
        ..Transcript::default()
    });
    let service = TranscriptionService::new(engine, InputValidator::default());

    let result = service
        .transcribe(audio_upload(Some("a.mp3"), None, b"ID3"))
        .await
        .unwrap();

    assert_eq!(result.confidence, DEFAULT_CONFIDENCE);
    assert_eq!(result.language, "en");
    assert_eq!(result.duration_secs, 0.0);
}

#[tokio::test]
async fn given_oversized_upload_when_transcribing_then_backend_is_never_called() {
    let engine = MockTranscriptionEngine::returning(transcript("never"));
    let service = TranscriptionService::new(engine.clone(), InputValidator::new(small_limits()));

    let result = service
        .transcribe(audio_upload(Some("a.mp3"), None, &[1u8; 4096]))
        .await;

    assert!(matches!(
        result,
        Err(TranscriptionServiceError::Validation(
            ValidationError::AudioTooLarge { .. }
        ))
    ));
    assert_eq!(engine.calls(), 0);
    assert_eq!(service.max_audio_bytes(), 1024);
}

#[tokio::test]
async fn given_failing_backend_when_transcribing_then_reports_transcription_failed() {
    let service = TranscriptionService::new(
        MockTranscriptionEngine::failing(),
        InputValidator::default(),
    );

    let err = service
        .transcribe(audio_upload(Some("a.mp3"), None, b"ID3"))
        .await
        .unwrap_err();

    assert!(matches!(err, TranscriptionServiceError::Failed(_)));
    assert!(err.to_string().starts_with("transcription failed"));
}

#[test]
fn given_service_when_asking_backend_then_returns_engine_info() {
    let service = TranscriptionService::new(
        MockTranscriptionEngine::returning(transcript("x")),
        InputValidator::default(),
    );

    let info = service.backend();

    assert_eq!(info.provider, "mock");
    assert_eq!(info.model, "mock-whisper");
}
