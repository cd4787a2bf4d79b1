use bytes::Bytes;

use voxnote::domain::{
    AudioFormat, SummarizationRequest, SummaryStyle, TranscriptionRequest, TranscriptionResult,
};

#[test]
fn given_confidence_outside_unit_range_when_constructing_then_clamps() {
    let high = TranscriptionResult::new("a".to_string(), 1.4, "en".to_string(), 1.0);
    let low = TranscriptionResult::new("a".to_string(), -0.2, "en".to_string(), 1.0);

    assert_eq!(high.confidence, 1.0);
    assert_eq!(low.confidence, 0.0);
}

#[test]
fn given_nan_confidence_when_constructing_then_becomes_zero() {
    let result = TranscriptionResult::new("a".to_string(), f32::NAN, "en".to_string(), 1.0);
    assert_eq!(result.confidence, 0.0);
}

#[test]
fn given_invalid_duration_when_constructing_then_becomes_non_negative() {
    let negative = TranscriptionResult::new("a".to_string(), 0.5, "en".to_string(), -3.0);
    let infinite = TranscriptionResult::new("a".to_string(), 0.5, "en".to_string(), f64::INFINITY);

    assert_eq!(negative.duration_secs, 0.0);
    assert_eq!(infinite.duration_secs, 0.0);
}

#[test]
fn given_filename_matching_format_when_naming_upload_then_keeps_filename() {
    let request = TranscriptionRequest {
        filename: "standup.wav".to_string(),
        format: AudioFormat::Wav,
        data: Bytes::from_static(b"RIFF"),
    };

    assert_eq!(request.upload_name(), "standup.wav");
    assert_eq!(request.size_bytes(), 4);
}

#[test]
fn given_filename_disagreeing_with_format_when_naming_upload_then_derives_name() {
    let request = TranscriptionRequest {
        filename: "blob".to_string(),
        format: AudioFormat::Ogg,
        data: Bytes::from_static(b"OggS"),
    };

    assert_eq!(request.upload_name(), "audio.ogg");
}

#[test]
fn given_multibyte_text_when_measuring_original_length_then_counts_characters() {
    let request = SummarizationRequest {
        text: "naïve café".to_string(),
        max_length: 50,
        style: SummaryStyle::Paragraph,
    };

    assert_eq!(request.original_length(), 10);
}
