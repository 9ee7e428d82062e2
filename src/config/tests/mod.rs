//! Unit tests for config module
//!
//! Tests loading, saving, and user updates against the in-memory filesystem.
//! No real filesystem access.

#![allow(clippy::panic, clippy::unwrap_used)]

use std::io::ErrorKind;

use crate::config::{
    CONFIG_FILE_NAME, Config, ConfigError, ConfigPaths, FileAccess, MemoryFileAccess,
};

const HOME: &str = "/home/test";

fn config_path() -> String {
    format!("{HOME}/{CONFIG_FILE_NAME}")
}

fn fs_with_config(config: &Config) -> MemoryFileAccess {
    let data = serde_json::to_vec_pretty(config).unwrap();
    MemoryFileAccess::new(HOME).with_file(config_path(), data)
}

fn sample_config() -> Config {
    Config {
        db_url: "postgres://localhost:5432/gator".to_string(),
        current_user_name: "default".to_string(),
    }
}

#[test]
fn config_file_is_in_home_dir() {
    let fs = MemoryFileAccess::new(HOME).with_working_dir("/somewhere/else");

    let path = ConfigPaths::config_file(&fs).unwrap();

    assert_eq!(path.to_string_lossy(), config_path());
}

#[test]
fn config_file_fails_when_home_unresolvable() {
    let mut fs = MemoryFileAccess::new(HOME);
    fs.fail_dirs(ErrorKind::NotFound, "no home");

    let err = ConfigPaths::config_file(&fs).unwrap_err();

    assert!(matches!(err, ConfigError::PathResolution { .. }));
    assert_eq!(err.io_kind(), Some(ErrorKind::NotFound));
}

#[test]
fn load_reads_existing_config() {
    let fs = fs_with_config(&sample_config());

    let config = Config::load(&fs).unwrap();

    assert_eq!(config, sample_config());
}

#[test]
fn load_missing_file_is_read_error() {
    let fs = MemoryFileAccess::new(HOME);

    let err = Config::load(&fs).unwrap_err();

    assert!(matches!(err, ConfigError::Read { .. }));
    assert_eq!(err.io_kind(), Some(ErrorKind::NotFound));
}

#[test]
fn load_invalid_json_is_parse_error() {
    let fs = MemoryFileAccess::new(HOME).with_file(config_path(), "{ not json");

    let err = Config::load(&fs).unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }));
    assert_eq!(err.io_kind(), None);
}

#[test]
fn load_wrong_field_type_is_parse_error() {
    let fs = MemoryFileAccess::new(HOME).with_file(config_path(), r#"{"db_url": 42}"#);

    let err = Config::load(&fs).unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn load_missing_fields_default_to_empty() {
    let fs = MemoryFileAccess::new(HOME).with_file(config_path(), r#"{"db_url": "x"}"#);

    let config = Config::load(&fs).unwrap();

    assert_eq!(config.db_url, "x");
    assert_eq!(config.current_user_name, "");
}

#[test]
fn load_ignores_unknown_fields() {
    let fs = MemoryFileAccess::new(HOME).with_file(
        config_path(),
        r#"{"db_url": "x", "current_user_name": "kim", "theme": "dark"}"#,
    );

    let config = Config::load(&fs).unwrap();

    assert_eq!(config.current_user_name, "kim");
}

#[test]
fn save_then_load_roundtrip() {
    let cases = [
        sample_config(),
        Config::default(),
        Config {
            db_url: "postgres://u:p@host/db?sslmode=disable".to_string(),
            current_user_name: "名前 \"quoted\"".to_string(),
        },
    ];

    for original in cases {
        let fs = MemoryFileAccess::new(HOME);

        original.save(&fs).unwrap();
        let loaded = Config::load(&fs).unwrap();

        assert_eq!(loaded, original);
    }
}

#[test]
fn save_writes_indented_json_in_key_order() {
    let fs = MemoryFileAccess::new(HOME);

    sample_config().save(&fs).unwrap();

    let written = String::from_utf8(fs.contents(config_path()).unwrap()).unwrap();
    assert_eq!(
        written,
        "{\n  \"db_url\": \"postgres://localhost:5432/gator\",\n  \"current_user_name\": \"default\"\n}"
    );
}

#[test]
fn save_propagates_write_error() {
    let mut fs = MemoryFileAccess::new(HOME);
    fs.fail_writes(ErrorKind::PermissionDenied, "read-only");

    let err = sample_config().save(&fs).unwrap_err();

    match err {
        ConfigError::Write { path, source } => {
            assert_eq!(path.to_string_lossy(), config_path());
            assert_eq!(source.kind(), ErrorKind::PermissionDenied);
        }
        other => panic!("expected write error, got {other:?}"),
    }
    assert_eq!(fs.write_calls(), 1);
}

#[test]
fn save_propagates_path_error_without_writing() {
    let mut fs = MemoryFileAccess::new(HOME);
    fs.fail_dirs(ErrorKind::NotFound, "no home");

    let err = sample_config().save(&fs).unwrap_err();

    assert!(matches!(err, ConfigError::PathResolution { .. }));
    assert_eq!(fs.write_calls(), 0);
}

#[test]
fn set_user_empty_name_changes_nothing() {
    let fs = fs_with_config(&sample_config());
    let mut config = sample_config();

    let err = config.set_user(&fs, "").unwrap_err();

    assert!(matches!(err, ConfigError::NoUsernameSupplied));
    assert_eq!(config.current_user_name, "default");
    assert_eq!(fs.write_calls(), 0);
    assert_eq!(Config::load(&fs).unwrap().current_user_name, "default");
}

#[test]
fn set_user_persists_name() {
    let fs = fs_with_config(&sample_config());
    let mut config = sample_config();

    config.set_user(&fs, "alice").unwrap();

    assert_eq!(config.current_user_name, "alice");
    assert_eq!(fs.write_calls(), 1);

    let stored = Config::load(&fs).unwrap();
    assert_eq!(stored.current_user_name, "alice");
    assert_eq!(stored.db_url, sample_config().db_url);
}

#[test]
fn set_user_write_failure_mutates_memory_only() {
    let mut fs = fs_with_config(&sample_config());
    fs.fail_writes(ErrorKind::PermissionDenied, "read-only");
    let mut config = sample_config();

    let err = config.set_user(&fs, "bob").unwrap_err();

    assert!(matches!(err, ConfigError::Write { .. }));
    assert_eq!(err.io_kind(), Some(ErrorKind::PermissionDenied));
    assert_eq!(config.current_user_name, "bob");
    assert_eq!(fs.write_calls(), 1);
    assert_eq!(Config::load(&fs).unwrap().current_user_name, "default");
}

#[test]
fn memory_fs_missing_file_is_not_found() {
    let fs = MemoryFileAccess::new(HOME);

    let err = fs.read_file(std::path::Path::new("/nope")).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn memory_fs_counts_failed_writes() {
    let mut fs = MemoryFileAccess::new(HOME);
    fs.fail_writes(ErrorKind::Other, "boom");

    let path = std::path::Path::new("/tmp/file");
    assert!(fs.write_file(path, b"a", 0o644).is_err());
    assert!(fs.write_file(path, b"b", 0o644).is_err());

    assert_eq!(fs.write_calls(), 2);
    assert!(fs.contents(path).is_none());
}

#[test]
fn memory_fs_reports_configured_dirs() {
    let fs = MemoryFileAccess::new(HOME).with_working_dir("/work");

    assert_eq!(fs.home_dir().unwrap().to_string_lossy(), HOME);
    assert_eq!(fs.current_dir().unwrap().to_string_lossy(), "/work");
}
