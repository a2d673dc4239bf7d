//! Loader tests for the `crosstalk-config` crate.
//!
//! These exercise default handling, file discovery via `CROSSTALK_CONFIG`,
//! and environment overrides. Environment mutation forces serial execution.

use std::fs;

use serial_test::serial;
use tempfile::TempDir;

use crosstalk_config::load;

const ENV_VARS_TO_RESET: &[&str] = &[
    "CROSSTALK_CONFIG",
    "CROSSTALK__API_KEY",
    "CROSSTALK__API_SECRET",
    "CROSSTALK__BASE_URL",
    "CROSSTALK__REQUEST_TIMEOUT_SECONDS",
];

fn reset_environment() {
    for key in ENV_VARS_TO_RESET {
        std::env::remove_var(key);
    }
}

#[test]
#[serial]
fn loads_defaults_without_file_or_environment() {
    reset_environment();

    let config = load().expect("configuration should load with defaults");
    assert_eq!(config.base_url, "https://chat.crosstalk.dev");
    assert_eq!(config.request_timeout_seconds, 30);
    assert!(config.api_key.is_none());
    assert!(config.api_secret.is_none());
}

#[test]
#[serial]
fn environment_overrides_take_precedence() {
    reset_environment();

    std::env::set_var("CROSSTALK__API_KEY", "env-key");
    std::env::set_var("CROSSTALK__API_SECRET", "env-secret");
    std::env::set_var("CROSSTALK__BASE_URL", "https://staging.chat.example.org");
    std::env::set_var("CROSSTALK__REQUEST_TIMEOUT_SECONDS", "5");

    let config = load().expect("configuration should load from environment");
    assert_eq!(config.api_key.as_deref(), Some("env-key"));
    assert_eq!(config.api_secret.as_deref(), Some("env-secret"));
    assert_eq!(config.base_url, "https://staging.chat.example.org");
    assert_eq!(config.request_timeout_seconds, 5);

    reset_environment();
}

#[test]
#[serial]
fn file_pointed_at_by_env_var_is_loaded() {
    reset_environment();

    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("crosstalk.toml");
    fs::write(
        &path,
        r#"
api_key = "file-key"
api_secret = "file-secret"
request_timeout_seconds = 12
"#,
    )
    .expect("write config file");

    std::env::set_var("CROSSTALK_CONFIG", &path);

    let config = load().expect("configuration should load from file");
    assert_eq!(config.api_key.as_deref(), Some("file-key"));
    assert_eq!(config.api_secret.as_deref(), Some("file-secret"));
    assert_eq!(config.request_timeout_seconds, 12);
    // untouched fields keep their defaults
    assert_eq!(config.base_url, "https://chat.crosstalk.dev");

    reset_environment();
}

#[test]
#[serial]
fn environment_wins_over_file() {
    reset_environment();

    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("crosstalk.toml");
    fs::write(&path, "api_key = \"file-key\"\n").expect("write config file");

    std::env::set_var("CROSSTALK_CONFIG", &path);
    std::env::set_var("CROSSTALK__API_KEY", "env-key");

    let config = load().expect("configuration should load");
    assert_eq!(config.api_key.as_deref(), Some("env-key"));

    reset_environment();
}
