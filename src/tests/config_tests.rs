//! Tests for the configuration module.
//!
//! This module contains tests for configuration loading, validation, and usage.

use test_case::test_case;

use super::test_utils::TestFixture;
use crate::config::{
    ConfigLoader, LauConfig, LogConfig, OutputFormat, SessionConfig, SymbolMode, Validate,
};
use crate::error::config::ConfigError;

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = LauConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.session.symbols, SymbolMode::Chars);
    assert_eq!(config.session.output, OutputFormat::Text);
}

/// Test that configuration validation catches invalid values.
#[test]
fn test_config_validation() {
    let mut config = LauConfig::default();

    config.session.max_word_length = 0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError(_))
    ));

    config.session.max_word_length = usize::MAX;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange { ref key, .. }) if key == "session.max_word_length"
    ));

    config.session.max_word_length = 64;
    config.log.level = "verbose".to_string();
    assert!(config.validate().is_err());
}

#[test_case("trace", true ; "trace")]
#[test_case("warn", true ; "warn")]
#[test_case("error", true ; "error")]
#[test_case("WARN", false ; "uppercase")]
#[test_case("", false ; "empty")]
fn test_log_level_validation(level: &str, valid: bool) {
    let log = LogConfig {
        level: level.to_string(),
        ..LogConfig::default()
    };
    assert_eq!(log.validate().is_ok(), valid);
}

/// Test loading configuration from a file.
#[test]
fn test_load_config_from_file() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file(
            "config_file_test.toml",
            r#"
    [session]
    symbols = "bytes"
    fold_case = true

    [log]
    level = "debug"
    "#,
        )
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_FILE");
    let config = loader.load().unwrap();

    assert_eq!(config.session.symbols, SymbolMode::Bytes);
    assert!(config.session.fold_case);
    assert_eq!(config.log.level, "debug");

    // Other values should be defaults
    assert_eq!(
        config.session.max_word_length,
        SessionConfig::default().max_word_length
    );
    assert!(!config.session.stop_on_error);
}

/// Test that JSON files are accepted as well.
#[test]
fn test_load_config_from_json() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file(
            "config_json_test.json",
            r#"{ "session": { "output": "json", "max_word_length": 12 } }"#,
        )
        .unwrap();

    let config = ConfigLoader::new(Some(&config_path), "TEST_JSON")
        .load()
        .unwrap();
    assert_eq!(config.session.output, OutputFormat::Json);
    assert_eq!(config.session.max_word_length, 12);
}

/// Test loading configuration with environment variable overrides.
#[test]
fn test_env_var_override() {
    let mut fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file(
            "config_env_test.toml",
            r#"
    [session]
    fold_case = false
    max_word_length = 32
    "#,
        )
        .unwrap();

    fixture.set_env("TEST_ENV__SESSION__FOLD_CASE", "true");
    fixture.set_env("TEST_ENV__SESSION__MAX_WORD_LENGTH", "64");
    fixture.set_env("TEST_ENV__LOG__LEVEL", "warn");

    let loader = ConfigLoader::new(Some(&config_path), "TEST_ENV");
    let config = loader.load().unwrap();

    // Environment variables take precedence over the file
    assert!(config.session.fold_case);
    assert_eq!(config.session.max_word_length, 64);
    assert_eq!(config.log.level, "warn");
}

/// Test that values from the environment are validated too.
#[test]
fn test_env_var_override_is_validated() {
    let mut fixture = TestFixture::new().unwrap();
    fixture.set_env("TEST_ENV_INVALID__SESSION__MAX_WORD_LENGTH", "0");

    let loader = ConfigLoader::new(None::<&str>, "TEST_ENV_INVALID");
    assert!(matches!(
        loader.load(),
        Err(ConfigError::ValidationError(_))
    ));
}

/// Test that loading an invalid configuration file returns an error.
#[test]
fn test_load_invalid_config() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file(
            "invalid.toml",
            r#"
    [session
    symbols = chars"
    "#,
        )
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_INVALID");
    assert!(matches!(loader.load(), Err(ConfigError::ParseError(_))));
}

/// Test that an unknown symbol mode is rejected.
#[test]
fn test_load_unknown_symbol_mode() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file("symbols.toml", "[session]\nsymbols = \"words\"\n")
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_SYMBOLS");
    assert!(loader.load().is_err());
}

#[test]
fn test_missing_file() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture.temp_dir.path().join("missing.toml");

    let loader = ConfigLoader::new(Some(&config_path), "TEST_MISSING");
    assert!(matches!(
        loader.load(),
        Err(ConfigError::FileNotFound(path)) if path == config_path
    ));
}

#[test]
fn test_unsupported_extension() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture.create_file("config.ini", "[session]\n").unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_EXTENSION");
    assert!(matches!(loader.load(), Err(ConfigError::ParseError(_))));
}

/// Test that a generated configuration file loads back unchanged.
#[test]
fn test_generated_config_loads() {
    let fixture = TestFixture::new().unwrap();
    let generated = toml::to_string_pretty(&LauConfig::default()).unwrap();
    let config_path = fixture.create_file("generated.toml", generated).unwrap();

    let config = ConfigLoader::new(Some(&config_path), "TEST_GENERATED")
        .load()
        .unwrap();
    assert_eq!(config, LauConfig::default());
}
