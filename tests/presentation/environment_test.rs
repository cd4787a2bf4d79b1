use voxnote::presentation::config::Environment;

#[test]
fn given_known_names_when_parsing_then_maps_environment() {
    assert_eq!(Environment::try_from("LOCAL".to_string()), Ok(Environment::Local));
    assert_eq!(Environment::try_from("test".to_string()), Ok(Environment::Test));
    assert_eq!(Environment::try_from("production".to_string()), Ok(Environment::Prod));
}

#[test]
fn given_unknown_name_when_parsing_then_returns_error() {
    let err = Environment::try_from("staging".to_string()).unwrap_err();
    assert!(err.contains("staging"));
}

#[test]
fn given_environment_when_selecting_settings_file_then_uses_lowercase_suffix() {
    assert_eq!(Environment::Prod.file_suffix(), "prod");
    assert_eq!(Environment::default(), Environment::Local);
}
