//! Tests for ConfigFormat parsing and detection.

use crate::config::{ConfigFormat, GameConfig};
use crate::error::ConfigError;

#[test]
fn parse_names_and_aliases() {
    assert_eq!(ConfigFormat::parse("json"), Some(ConfigFormat::Json));
    assert_eq!(ConfigFormat::parse("JSON"), Some(ConfigFormat::Json));
    assert_eq!(ConfigFormat::parse("yml"), Some(ConfigFormat::Yaml));
    assert_eq!(ConfigFormat::parse("toml"), Some(ConfigFormat::Toml));
    assert_eq!(ConfigFormat::parse("ini"), None);
}

#[test]
fn infer_from_path() {
    assert_eq!(ConfigFormat::from_path("game.yaml"), Some(ConfigFormat::Yaml));
    assert_eq!(ConfigFormat::from_path("dir/game.json"), Some(ConfigFormat::Json));
    assert_eq!(ConfigFormat::from_path("game"), None);
}

#[cfg(feature = "json")]
#[test]
fn json_fills_missing_fields_with_defaults() {
    let config: GameConfig = ConfigFormat::Json.deserialize(r#"{"tries": 3}"#).unwrap();
    assert_eq!(config, GameConfig::default().with_tries(3));
}

#[cfg(feature = "json")]
#[test]
fn json_rejects_unknown_fields() {
    let err = ConfigFormat::Json
        .deserialize::<GameConfig>(r#"{"guesses": 3}"#)
        .unwrap_err();
    assert!(matches!(err, ConfigError::Parse { ref format, .. } if format == "json"));
}

#[cfg(feature = "yaml")]
#[test]
fn yaml_config() {
    let config: GameConfig = ConfigFormat::Yaml
        .deserialize("tries: 5\nlower: -10\nupper: 10\n")
        .unwrap();
    assert_eq!(config, GameConfig::new(5, -10, 10).unwrap());
}

#[cfg(feature = "toml")]
#[test]
fn toml_config() {
    let config: GameConfig = ConfigFormat::Toml
        .deserialize("tries = 2\nupper = 3\n")
        .unwrap();
    assert_eq!(config, GameConfig::default().with_tries(2).with_range(0, 3));
}

#[cfg(not(feature = "toml"))]
#[test]
fn disabled_format_is_reported() {
    assert!(!ConfigFormat::Toml.is_enabled());
    let err = ConfigFormat::Toml.deserialize::<GameConfig>("").unwrap_err();
    assert!(matches!(err, ConfigError::FormatDisabled(_)));
}
