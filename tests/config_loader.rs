mod common;

use common::temp_file;
use fluxstore::config::{ConfigError, Settings, StoreConfig};

#[test]
fn test_default_values() {
    let config = StoreConfig::default();
    assert_eq!(config.max_queued_dispatches, 1024);
    assert!(config.warn_on_unhandled);
    assert_eq!(Settings::default().store, config);
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Settings::config_path();
    assert!(path.ends_with("fluxstore/config.toml"));
}

#[test]
fn test_load_full_file() {
    let (_dir, path) = temp_file(
        "config.toml",
        r#"
[store]
max_queued_dispatches = 16
warn_on_unhandled = false
"#,
    );

    let settings = Settings::load_from(&path).unwrap();
    assert_eq!(settings.store.max_queued_dispatches, 16);
    assert!(!settings.store.warn_on_unhandled);
}

#[test]
fn test_missing_fields_use_defaults() {
    let (_dir, path) = temp_file("config.toml", "[store]\nmax_queued_dispatches = 3\n");
    let settings = Settings::load_from(&path).unwrap();
    assert_eq!(settings.store.max_queued_dispatches, 3);
    assert!(settings.store.warn_on_unhandled);

    let (_dir, path) = temp_file("config.toml", "");
    assert_eq!(Settings::load_from(&path).unwrap(), Settings::default());
}

#[test]
fn test_zero_queue_limit_fails_validation() {
    let (_dir, path) = temp_file("config.toml", "[store]\nmax_queued_dispatches = 0\n");

    match Settings::load_from(&path).unwrap_err() {
        ConfigError::ValidationError { message } => {
            assert!(message.contains("max_queued_dispatches"));
        }
        other => panic!("Expected ValidationError, got {other:?}"),
    }
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = temp_file("config.toml", "[store\nmax_queued_dispatches = ");
    assert!(matches!(
        Settings::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn test_wrong_type_is_parse_error() {
    let (_dir, path) = temp_file("config.toml", "[store]\nmax_queued_dispatches = \"many\"\n");
    assert!(matches!(
        Settings::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn test_missing_file_is_read_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");
    match Settings::load_from(&path) {
        Err(ConfigError::ReadError { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("Expected ReadError, got {other:?}"),
    }
}
