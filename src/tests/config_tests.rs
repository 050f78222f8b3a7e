//! Tests for the configuration module.
//!
//! This module contains tests for configuration loading, validation, and usage.

use std::path::PathBuf;

use super::TestFixture;
use crate::config::{
    AppConfig, CatalogConfig, CatalogSource, ConfigLoader, LogConfig, SuggestSettings, Validate,
};
use crate::error::config::ConfigError;

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = AppConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.suggest, SuggestSettings::default());
    assert!(config.catalog.sources.is_empty());
}

/// Test that configuration validation catches invalid values.
#[test]
fn test_config_validation() {
    let mut config = AppConfig::default();

    config.suggest.max_results = Some(0);
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange { .. })
    ));

    config.suggest.max_results = Some(10);
    config.log.level = "verbose".to_string();
    assert!(config.validate().is_err());

    config.log = LogConfig::default();
    config.catalog.sources.push(CatalogSource {
        index: "  ".to_string(),
        path: PathBuf::from("products.txt"),
    });
    assert!(config.validate().is_err());
}

/// Test that the same file cannot feed the same index twice.
#[test]
fn test_duplicate_catalog_source_rejected() {
    let source = CatalogSource {
        index: "products".to_string(),
        path: PathBuf::from("products.txt"),
    };
    let mut catalog = CatalogConfig {
        sources: vec![source.clone(), source.clone()],
        skip_missing: false,
    };
    assert!(catalog.validate().is_err());

    // Same file feeding another index is fine
    catalog.sources[1].index = "categories".to_string();
    assert!(catalog.validate().is_ok());
}

/// Test loading configuration from a file.
#[test]
fn test_load_config_from_file() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .write_file(
            "suggest.toml",
            r#"
            [suggest]
            min_prefix_chars = 2
            max_results = 8

            [catalog]
            skip_missing = true

            [[catalog.sources]]
            index = "products"
            path = "data/products.txt"

            [[catalog.sources]]
            index = "categories"
            path = "data/categories.json"
            "#,
        )
        .unwrap();

    let config = ConfigLoader::new(Some(&config_path), "TEST_FILE").load().unwrap();

    assert_eq!(config.suggest.min_prefix_chars, 2);
    assert_eq!(config.suggest.max_results, Some(8));
    assert!(config.catalog.skip_missing);
    assert_eq!(config.catalog.sources.len(), 2);
    assert_eq!(config.catalog.sources[1].index, "categories");

    // Other values should be defaults
    assert!(config.suggest.sort_results);
    assert_eq!(config.log.level, "info");
}

/// Test loading configuration with environment variable overrides.
#[test]
fn test_env_var_override() {
    let mut fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .write_file("env.toml", "[suggest]\nmin_prefix_chars = 1\n")
        .unwrap();

    fixture.set_env("TEST_ENV__SUGGEST__MIN_PREFIX_CHARS", "3");
    fixture.set_env("TEST_ENV__LOG__JSON", "true");

    let config = ConfigLoader::new(Some(&config_path), "TEST_ENV").load().unwrap();

    assert_eq!(config.suggest.min_prefix_chars, 3);
    assert!(config.log.json);
}

/// Test that a missing file is reported as such.
#[test]
fn test_missing_config_file() {
    let loader = ConfigLoader::new(Some("does/not/exist.toml"), "TEST_MISSING");
    assert!(matches!(loader.load(), Err(ConfigError::FileNotFound(_))));
}

/// Test that loading an invalid configuration file returns an error.
#[test]
fn test_load_invalid_config() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .write_file("invalid.toml", "[suggest\nmin_prefix_chars = two\"\n")
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_INVALID");
    assert!(matches!(loader.load(), Err(ConfigError::ParseError(_))));
}

/// Test that unsupported extensions are rejected.
#[test]
fn test_unsupported_config_extension() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture.write_file("suggest.ini", "").unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_EXT");
    assert!(matches!(loader.load(), Err(ConfigError::ParseError(_))));
}

/// Test that the default configuration round-trips through TOML.
#[test]
fn test_default_config_serializes_to_toml() {
    let fixture = TestFixture::new().unwrap();
    let toml = toml::to_string_pretty(&AppConfig::default()).unwrap();
    let config_path = fixture.write_file("generated.toml", toml).unwrap();

    let config = ConfigLoader::new(Some(&config_path), "TEST_GEN").load().unwrap();
    assert_eq!(config.suggest, SuggestSettings::default());
}
