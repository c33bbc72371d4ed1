mod common;

use shopcart::config::{CatalogConfig, Config, ConfigError, UiConfig};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Test that Config::default() produces the documented values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert!(config.catalog.path.is_none());
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.ui.max_columns, 3);
    assert_eq!(config.ui.tick_rate(), Duration::from_millis(250));
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());
    assert!(config.validate().is_ok());
}

/// Test that Config::config_path() returns a path ending with the expected filename.
#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("shopcart/config.toml"));
}

#[test]
fn test_load_full_file() {
    let (_dir, path) = common::temp_file(
        "config.toml",
        r#"
[catalog]
path = "/srv/shop/catalog.toml"

[ui]
tick_rate_ms = 100
max_columns = 2

[logging]
level = "debug"
file = "/tmp/shopcart-test.log"
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(
        config.catalog.path.as_deref(),
        Some(Path::new("/srv/shop/catalog.toml"))
    );
    assert_eq!(
        config.ui,
        UiConfig {
            tick_rate_ms: 100,
            max_columns: 2,
        }
    );
    assert_eq!(config.logging.level, "debug");
    assert_eq!(
        config.logging.file.as_deref(),
        Some(Path::new("/tmp/shopcart-test.log"))
    );
}

#[test]
fn test_missing_sections_use_defaults() {
    let (_dir, path) = common::temp_file("config.toml", "[ui]\nmax_columns = 1\n");

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.ui.max_columns, 1);
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.logging.level, "info");
    assert!(config.catalog.path.is_none());
}

#[test]
fn test_empty_file_is_default() {
    let (_dir, path) = common::temp_file("config.toml", "");
    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
}

#[test]
fn test_missing_explicit_file_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = Config::load_from(&dir.path().join("nope.toml"));
    assert!(matches!(result, Err(ConfigError::ReadError { .. })));
}

#[test]
fn test_malformed_file_is_parse_error() {
    let (_dir, path) = common::temp_file("config.toml", "[ui\ntick_rate_ms = ");
    let result = Config::load_from(&path);
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn test_validation_rejects_zero_tick_rate() {
    let mut config = Config::default();
    config.ui.tick_rate_ms = 0;
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("tick_rate_ms"));
}

#[test]
fn test_validation_rejects_column_count_out_of_range() {
    let mut config = Config::default();
    config.ui.max_columns = 0;
    assert!(config.validate().is_err());
    config.ui.max_columns = 5;
    assert!(config.validate().is_err());
    config.ui.max_columns = 4;
    assert!(config.validate().is_ok());
}

#[test]
fn test_validation_rejects_unknown_log_level() {
    let (_dir, path) = common::temp_file("config.toml", "[logging]\nlevel = \"loud\"\n");
    let result = Config::load_from(&path);
    match result {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("loud"));
        }
        other => panic!("expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_catalog_path_resolves_against_config_dir() {
    let config_file = Path::new("/home/me/.config/shopcart/config.toml");
    let relative = CatalogConfig {
        path: Some(PathBuf::from("catalog.toml")),
    };
    assert_eq!(
        relative.resolve_path(config_file),
        Some(PathBuf::from("/home/me/.config/shopcart/catalog.toml"))
    );

    let absolute = CatalogConfig {
        path: Some(PathBuf::from("/srv/shop/catalog.toml")),
    };
    assert_eq!(
        absolute.resolve_path(config_file),
        Some(PathBuf::from("/srv/shop/catalog.toml"))
    );

    assert_eq!(CatalogConfig::default().resolve_path(config_file), None);
}
