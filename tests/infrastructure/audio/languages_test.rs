use voxnote::infrastructure::audio::languages::{WHISPER_LANGUAGES, language_code};

#[test]
fn given_language_name_when_resolving_then_returns_code() {
    assert_eq!(language_code("english"), Some("en"));
    assert_eq!(language_code("German"), Some("de"));
}

#[test]
fn given_language_code_when_resolving_then_returns_it() {
    assert_eq!(language_code("FR"), Some("fr"));
}

#[test]
fn given_unknown_language_when_resolving_then_returns_none() {
    assert_eq!(language_code("klingon"), None);
}

#[test]
fn given_whisper_table_when_inspecting_then_english_comes_first() {
    assert_eq!(WHISPER_LANGUAGES[0], ("en", "english"));
}
