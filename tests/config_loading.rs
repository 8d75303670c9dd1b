//! Config file loading: each phase (read, parse, validate) reports its own error

use chatrelay::{
    config::{ClientSettings, Config},
    error::AppError,
};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("should create temp file");
    file.write_all(contents.as_bytes())
        .expect("should write temp config");
    file
}

#[test]
fn test_loads_valid_config() {
    let file = write_config(
        r#"
[server]
host = "127.0.0.1"
port = 3100

[vendor]
base_url = "https://api.groq.com/openai/v1"
timeout_seconds = 30

[observability]
log_level = "debug"
"#,
    );

    let config = Config::from_file(file.path()).expect("config should load");
    assert_eq!(config.server.port, 3100);
    assert_eq!(config.vendor.timeout().as_secs(), 30);
    assert_eq!(config.observability.log_level, "debug");
}

#[test]
fn test_missing_file_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    match Config::from_file(&path) {
        Err(AppError::ConfigFileRead { path: reported, .. }) => {
            assert!(reported.ends_with("absent.toml"))
        }
        other => panic!("expected ConfigFileRead, got {:?}", other.err()),
    }
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let file = write_config("[server\nhost = ");

    assert!(matches!(
        Config::from_file(file.path()),
        Err(AppError::ConfigParseFailed { .. })
    ));
}

#[test]
fn test_missing_server_section_is_parse_error() {
    let file = write_config(
        r#"
[vendor]
base_url = "https://api.groq.com/openai/v1"
"#,
    );

    assert!(matches!(
        Config::from_file(file.path()),
        Err(AppError::ConfigParseFailed { .. })
    ));
}

#[test]
fn test_out_of_range_timeout_is_validation_error() {
    let file = write_config(
        r#"
[server]
host = "127.0.0.1"
port = 3000

[vendor]
timeout_seconds = 0
"#,
    );

    match Config::from_file(file.path()) {
        Err(AppError::ConfigValidationFailed { reason, .. }) => {
            assert!(reason.contains("timeout_seconds"), "reason: {}", reason)
        }
        other => panic!("expected ConfigValidationFailed, got {:?}", other.err()),
    }
}

#[test]
fn test_client_settings_default_when_file_absent() {
    let dir = tempfile::tempdir().unwrap();

    let settings = ClientSettings::load(dir.path().join("config.toml"))
        .expect("absent file should fall back to defaults");
    assert_eq!(settings.vendor.base_url(), "https://api.groq.com/openai/v1");
    assert_eq!(settings.vendor.api_key_env(), "GROQ_API_KEY");
    assert_eq!(settings.observability.log_level, "info");
}

#[test]
fn test_client_settings_do_not_require_server_section() {
    let file = write_config(
        r#"
[vendor]
api_key_env = "OTHER_KEY"
timeout_seconds = 20
"#,
    );

    let settings = ClientSettings::load(file.path()).expect("vendor-only file should load");
    assert_eq!(settings.vendor.api_key_env(), "OTHER_KEY");
    assert_eq!(settings.vendor.timeout().as_secs(), 20);
}

#[test]
fn test_client_settings_read_full_server_config() {
    let file = write_config(
        r#"
[server]
host = "127.0.0.1"
port = 3000

[observability]
log_level = "warn"
"#,
    );

    let settings = ClientSettings::load(file.path()).expect("full config should load");
    assert_eq!(settings.observability.log_level, "warn");
}

#[test]
fn test_client_settings_still_validate_vendor() {
    let file = write_config(
        r#"
[vendor]
base_url = "api.groq.com/openai/v1"
"#,
    );

    match ClientSettings::load(file.path()) {
        Err(AppError::ConfigValidationFailed { reason, .. }) => {
            assert!(reason.contains("vendor.base_url"), "reason: {}", reason)
        }
        other => panic!("expected ConfigValidationFailed, got {:?}", other.err()),
    }
}
