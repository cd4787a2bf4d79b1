use voxnote::infrastructure::observability::TracingConfig;
use voxnote::presentation::config::{Environment, LoggingSettings};

#[test]
fn given_plain_logging_settings_when_building_then_uses_text_format_and_environment() {
    let settings = LoggingSettings {
        level: "info".to_string(),
        enable_json: false,
    };

    let config = TracingConfig::from_settings(&settings, Environment::Local);

    assert!(!config.json_format);
    assert_eq!(config.environment, "Local");
}

#[test]
fn given_logging_settings_when_building_then_filter_uses_level() {
    let settings = LoggingSettings {
        level: "debug".to_string(),
        enable_json: true,
    };

    let config = TracingConfig::from_settings(&settings, Environment::Prod);

    assert!(config.json_format);
    assert_eq!(config.environment, "Prod");
    assert!(config.default_filter.starts_with("debug,"));
    assert!(config.default_filter.contains("voxnote=debug"));
}
