//! 配置模块集成测试

use fair9_core::command::DEFAULT_COMMAND_DEBOUNCE_MS;
use fair9_core::config::{ConfigError, CoreConfig};
use fair9_core::hotkey::{
    DEFAULT_DEACTIVATION_DELAY_MS, DEFAULT_DEBOUNCE_MS, DEFAULT_HOLD_THRESHOLD_MS,
};
use fair9_core::input::{LEGACY_DELAY_MS, NORMAL_DELAY_MS};

#[test]
fn test_default_values() {
    let config = CoreConfig::default();

    assert_eq!(config.hotkey.debounce_ms, DEFAULT_DEBOUNCE_MS);
    assert_eq!(config.hotkey.hold_threshold_ms, DEFAULT_HOLD_THRESHOLD_MS);
    assert_eq!(
        config.hotkey.deactivation_delay_ms,
        DEFAULT_DEACTIVATION_DELAY_MS
    );
    assert_eq!(config.injector.normal_delay_ms, NORMAL_DELAY_MS);
    assert_eq!(config.injector.legacy_delay_ms, LEGACY_DELAY_MS);
    assert!(!config.injector.legacy_mode);
    assert_eq!(config.command.debounce_ms, DEFAULT_COMMAND_DEBOUNCE_MS);
}

#[test]
fn test_empty_json_gives_defaults() {
    let config = CoreConfig::from_json("{}").unwrap();
    assert_eq!(config, CoreConfig::default());
}

#[test]
fn test_full_round_trip() {
    let mut config = CoreConfig::default();
    config.hotkey.debounce_ms = 350;
    config.injector.legacy_mode = true;
    config.command.debounce_ms = 2000;

    let json = config.to_json().unwrap();
    let parsed = CoreConfig::from_json(&json).unwrap();
    assert_eq!(config, parsed);
}

#[test]
fn test_nested_section_override() {
    let json = r#"{
        "hotkey": {"hold_threshold_ms": 250},
        "injector": {"normal_delay_ms": 15, "legacy_delay_ms": 45}
    }"#;

    let config = CoreConfig::from_json(json).unwrap();
    assert_eq!(config.hotkey.hold_threshold_ms, 250);
    assert_eq!(config.hotkey.debounce_ms, DEFAULT_DEBOUNCE_MS);
    assert_eq!(config.injector.normal_delay_ms, 15);
    assert_eq!(config.injector.legacy_delay_ms, 45);
}

#[test]
fn test_invalid_json_rejected() {
    assert!(matches!(
        CoreConfig::from_json("{"),
        Err(ConfigError::Json(_))
    ));
}

#[test]
fn test_zero_hold_threshold_rejected() {
    let result = CoreConfig::from_json(r#"{"hotkey": {"hold_threshold_ms": 0}}"#);
    match result {
        Err(ConfigError::Validation(msg)) => {
            assert!(msg.contains("hold_threshold_ms"));
        }
        other => panic!("Expected validation error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_legacy_delay_must_not_undercut_normal() {
    let json = r#"{"injector": {"normal_delay_ms": 40, "legacy_delay_ms": 20}}"#;
    assert!(matches!(
        CoreConfig::from_json(json),
        Err(ConfigError::Validation(_))
    ));
}

#[test]
fn test_equal_delays_allowed() {
    let json = r#"{"injector": {"normal_delay_ms": 20, "legacy_delay_ms": 20}}"#;
    assert!(CoreConfig::from_json(json).is_ok());
}

#[test]
fn test_config_error_display() {
    let err = ConfigError::Validation("bad value".to_string());
    assert!(err.to_string().contains("bad value"));
    assert!(err.to_string().contains("Invalid config"));
}
