use voxnote::infrastructure::audio::{HOSTED_DEFAULT_CONFIDENCE, VerboseTranscription};

fn parse(body: &str) -> VerboseTranscription {
    serde_json::from_str(body).unwrap()
}

#[test]
fn given_segments_without_logprobs_when_converting_then_uses_hosted_default() {
    let transcript = parse(r#"{"text": "hi", "segments": [{"id": 0}]}"#).into_transcript();
    assert_eq!(transcript.confidence, Some(HOSTED_DEFAULT_CONFIDENCE));
}

#[test]
fn given_zero_logprob_when_converting_then_confidence_is_one() {
    let transcript =
        parse(r#"{"text": "hi", "segments": [{"avg_logprob": 0.0}]}"#).into_transcript();
    assert_eq!(transcript.confidence, Some(1.0));
}

#[test]
fn given_unmapped_language_when_converting_then_keeps_lowercased_value() {
    let transcript = parse(r#"{"text": "hi", "language": "Esperanto-ish"}"#).into_transcript();
    assert_eq!(transcript.language.as_deref(), Some("esperanto-ish"));
}

#[test]
fn given_missing_duration_when_converting_then_duration_is_none() {
    let transcript = parse(r#"{"text": "  padded  "}"#).into_transcript();
    assert_eq!(transcript.duration_secs, None);
    assert_eq!(transcript.text, "padded");
}
