//! Loading BotConfig from disk.

use std::io::Write;

use messbot::{BotConfig, Error, Theme, config::ConfigError};

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"typing_delay_ms": 0, "feedback_reset_ms": 1000, "theme": "dark"}}"#
    )
    .unwrap();

    let config = BotConfig::load_from_file(file.path()).unwrap();
    assert_eq!(config.typing_delay_ms, 0);
    assert_eq!(config.feedback_reset_ms, 1000);
    assert_eq!(config.theme, Theme::Dark);
    assert_eq!(config.rng_seed, None);
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = BotConfig::load_from_file(dir.path().join("messbot.json")).unwrap();
    assert_eq!(config, BotConfig::default());
}

#[test]
fn test_malformed_file_is_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{{ not json").unwrap();

    let err = BotConfig::load_from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));

    let err: Error = err.into();
    assert!(err.is_config_error());
    assert_eq!(err.module(), "config");
}

#[test]
fn test_directory_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = BotConfig::load_from_file(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}
