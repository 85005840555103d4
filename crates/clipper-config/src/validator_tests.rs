use super::*;
use std::path::PathBuf;

fn configured() -> Config {
    let mut config = Config::default();
    config.notion.token = "secret_abc".to_string();
    config.notion.database_id = "db123".to_string();
    config
}

#[test]
fn test_validate_configured_config() {
    let result = ConfigValidator::validate(&configured());
    assert!(result.is_valid());
    assert!(result.warnings.is_empty());
}

#[test]
fn test_validate_default_config_warns_about_credentials() {
    let result = ConfigValidator::validate(&Config::default());
    assert!(result.is_valid());
    assert!(result.warnings.iter().any(|w| w.path == "notion.token"));
    assert!(result.warnings.iter().any(|w| w.path == "notion.database_id"));
}

#[test]
fn test_validate_invalid_port() {
    let mut config = configured();
    config.server.port = 0;

    let result = ConfigValidator::validate(&config);
    assert!(!result.is_valid());
    assert!(result.errors.iter().any(|e| e.path == "server.port"));
}

#[test]
fn test_validate_empty_host() {
    let mut config = configured();
    config.server.host = String::new();

    let result = ConfigValidator::validate(&config);
    assert!(result.errors.iter().any(|e| e.path == "server.host"));
}

#[test]
fn test_validate_base_url_scheme() {
    let mut config = configured();
    config.notion.api_base_url = "ftp://api.notion.com/v1".to_string();

    let result = ConfigValidator::validate(&config);
    assert!(!result.is_valid());
    assert!(result.errors.iter().any(|e| e.path == "notion.api_base_url"));
}

#[test]
fn test_validate_base_url_unparsable() {
    let mut config = configured();
    config.notion.api_base_url = "not a url".to_string();

    let result = ConfigValidator::validate(&config);
    assert!(!result.is_valid());
}

#[test]
fn test_validate_empty_api_version() {
    let mut config = configured();
    config.notion.api_version = " ".to_string();

    let result = ConfigValidator::validate(&config);
    assert!(result.errors.iter().any(|e| e.path == "notion.api_version"));
}

#[test]
fn test_validate_empty_tag_warning() {
    let mut config = configured();
    config.capture.default_tags = vec!["ok".to_string(), " ".to_string()];

    let result = ConfigValidator::validate(&config);
    assert!(result.is_valid());
    assert!(result.warnings.iter().any(|w| w.path == "capture.default_tags"));
}

#[test]
fn test_validate_empty_history_path() {
    let mut config = configured();
    config.history.path = PathBuf::new();

    let result = ConfigValidator::validate(&config);
    assert!(result.errors.iter().any(|e| e.path == "history.path"));

    config.history.enabled = false;
    assert!(ConfigValidator::validate(&config).is_valid());
}

#[test]
fn test_into_result() {
    let mut config = configured();
    config.server.port = 0;
    let err = ConfigValidator::validate(&config).into_result().unwrap_err();
    assert!(err.to_string().contains("server.port"));

    let warnings = ConfigValidator::validate(&Config::default())
        .into_result()
        .unwrap();
    assert_eq!(warnings.len(), 2);
}

#[test]
fn test_validation_result_default() {
    let result = ValidationResult::default();
    assert!(result.is_valid());
    assert!(result.errors.is_empty());
    assert!(result.warnings.is_empty());
}
