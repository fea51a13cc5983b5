//! Tests for compiler-config loading and default-target injection.

use std::fs;
use std::path::PathBuf;

use quoin_config::{ConfigError, SwcConfig};
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join(".swcrc");
    fs::write(&path, content).expect("write config");
    path
}

#[test]
fn missing_file_is_not_found() {
    let dir = TempDir::new().expect("tempdir");
    let result = SwcConfig::load(&dir.path().join("absent.swcrc"));
    assert!(matches!(result, Err(ConfigError::NotFound { .. })));
}

#[test]
fn malformed_document_is_parse_error() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_config(&dir, "{ this is not json");
    let result = SwcConfig::load(&path);
    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}

#[test]
fn non_object_document_is_parse_error() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_config(&dir, "[1, 2, 3]");
    let result = SwcConfig::load(&path);
    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}

#[test]
fn absent_target_gets_documented_default() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_config(&dir, "{}");

    let config = SwcConfig::load(&path).expect("load");

    assert_eq!(config.targets(), "> 0.25, not dead");
    assert_eq!(
        config.as_value()["env"]["targets"],
        serde_json::json!("> 0.25, not dead")
    );
}

#[test]
fn declared_target_is_unchanged() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_config(&dir, r#"{ "env": { "targets": "last 2 versions" } }"#);

    let config = SwcConfig::load(&path).expect("load");

    assert_eq!(config.targets(), "last 2 versions");
}

#[test]
fn injection_preserves_unrelated_keys() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_config(
        &dir,
        r#"{
            "env": { "mode": "usage" },
            "jsc": { "parser": { "syntax": "typescript", "tsx": true } }
        }"#,
    );

    let config = SwcConfig::load(&path).expect("load");
    let raw = config.as_value();

    assert_eq!(raw["env"]["mode"], serde_json::json!("usage"));
    assert_eq!(raw["env"]["targets"], serde_json::json!("> 0.25, not dead"));
    assert_eq!(raw["jsc"]["parser"]["tsx"], serde_json::json!(true));
}
