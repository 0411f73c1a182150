//! Tests for game configuration loading.

use weatherle::{GameConfig, DEFAULT_SUGGESTION_LIMIT, MAX_ATTEMPTS};

#[test]
fn test_defaults() {
    let config = GameConfig::default();

    assert_eq!(*config.max_attempts(), MAX_ATTEMPTS);
    assert_eq!(*config.max_attempts(), 6);
    assert_eq!(*config.suggestion_limit(), DEFAULT_SUGGESTION_LIMIT);
    assert!(config.worker_url().starts_with("https://"));
}

#[test]
fn test_from_file_reads_all_fields() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("weatherle.toml");
    std::fs::write(
        &path,
        r#"
worker_url = "http://localhost:8787/"
max_attempts = 3
suggestion_limit = 5
"#,
    )
    .expect("write config");

    let config = GameConfig::from_file(&path).expect("load config");

    assert_eq!(config.worker_url(), "http://localhost:8787/");
    assert_eq!(*config.max_attempts(), 3);
    assert_eq!(*config.suggestion_limit(), 5);
}

#[test]
fn test_from_file_missing_fields_use_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("weatherle.toml");
    std::fs::write(&path, "worker_url = \"http://localhost:8787/\"\n").expect("write config");

    let config = GameConfig::from_file(&path).expect("load config");

    assert_eq!(config.worker_url(), "http://localhost:8787/");
    assert_eq!(*config.max_attempts(), MAX_ATTEMPTS);
    assert_eq!(*config.suggestion_limit(), DEFAULT_SUGGESTION_LIMIT);
}

#[test]
fn test_from_file_malformed_toml_errors() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("weatherle.toml");
    std::fs::write(&path, "worker_url = [not toml").expect("write config");

    let err = GameConfig::from_file(&path).expect_err("malformed config");
    assert!(err.message.contains("parse"));
}

#[test]
fn test_from_file_missing_file_errors() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("nope.toml");

    let err = GameConfig::from_file(&path).expect_err("missing config");
    assert!(err.message.contains("read"));
}

#[test]
fn test_with_worker_url_overrides() {
    let config = GameConfig::default().with_worker_url("http://localhost:8787/".to_string());

    assert_eq!(config.worker_url(), "http://localhost:8787/");
}
