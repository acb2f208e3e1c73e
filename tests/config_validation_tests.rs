//! Config Validation Tests
//!
//! Typo detection and whole-config validation, including loading real
//! files from disk.

use std::io::Write;

use tbm_advance::config::validation::{known_config_keys, suggest_correction, validate_unknown_keys};
use tbm_advance::config::{ConfigError, LogFormat, ServiceConfig};

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

// ============================================================================
// Typo Detection
// ============================================================================

#[test]
fn typo_in_logging_section_warns_with_suggestion() {
    let warnings = validate_unknown_keys(
        r#"
[logging]
levle = "debug"
"#,
    );
    assert_eq!(warnings.len(), 1, "Expected exactly 1 warning");
    assert_eq!(warnings[0].field, "logging.levle");
    assert_eq!(warnings[0].suggestion.as_deref(), Some("logging.level"));
}

#[test]
fn misspelled_section_warns_for_section_and_children() {
    let warnings = validate_unknown_keys(
        r#"
[sever]
addr = "127.0.0.1:9000"
"#,
    );
    assert_eq!(warnings.len(), 2);
    assert!(warnings
        .iter()
        .any(|w| w.field == "sever" && w.suggestion.as_deref() == Some("server")));
}

#[test]
fn known_keys_cover_every_section() {
    let known = known_config_keys();
    for section in ["service", "server", "cors", "logging"] {
        assert!(known.contains(section), "missing section {section}");
    }
    assert!(known.contains("server.request_body_limit_bytes"));
    assert!(suggest_correction("completely_unrelated_garbage_key_xyz", &known).is_none());
}

// ============================================================================
// Loading From Disk
// ============================================================================

#[test]
fn load_full_config_from_file() {
    let file = write_config(
        r#"
[service]
name = "Tunnel Planner"
model_version = "1.1"

[server]
addr = "127.0.0.1:9100"
request_body_limit_bytes = 8192

[cors]
allowed_origins = ["https://planner.example"]

[logging]
level = "tbm_advance=debug"
format = "json"
"#,
    );
    let config = ServiceConfig::load_from_file(file.path()).unwrap();
    assert_eq!(config.service.name, "Tunnel Planner");
    assert_eq!(config.service.model_version, "1.1");
    assert_eq!(config.server.request_body_limit_bytes, 8192);
    assert_eq!(config.socket_addr().unwrap().port(), 9100);
    assert!(!config.cors.allows_any());
    assert_eq!(config.logging.log_format(), LogFormat::Json);
}

#[test]
fn unknown_keys_do_not_reject_config() {
    let file = write_config(
        r#"
[server]
addr = "127.0.0.1:9200"
adr = "ignored"
"#,
    );
    let config = ServiceConfig::load_from_file(file.path()).unwrap();
    assert_eq!(config.server.addr, "127.0.0.1:9200");
}

#[test]
fn invalid_values_fail_validation() {
    let file = write_config(
        r#"
[server]
request_body_limit_bytes = 0

[logging]
format = "yaml"
"#,
    );
    match ServiceConfig::load_from_file(file.path()) {
        Err(ConfigError::Validation(errors)) => {
            assert_eq!(errors.len(), 2, "{errors:?}");
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn malformed_toml_is_parse_error_with_path() {
    let file = write_config("[server\naddr = ");
    let err = ServiceConfig::load_from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(..)));
    assert!(err.to_string().contains(&file.path().display().to_string()));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ServiceConfig::load_from_file(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(..)));
}
