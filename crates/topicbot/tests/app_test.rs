//! Tests for configuration loading and the configuration check.

use clap::Parser;
use std::path::Path;
use tempfile::TempDir;
use topicbot::{Args, check_config, load_config, run};
use topicbot_core::ChannelId;

const CONFIG: &str = r#"{
    "guild_id": 1234,
    "on_topic_channel": 5678,
    "review_channel": 9012,
    "cooldown": {"hours": 12, "minutes": 0, "seconds": 0},
    "token": "secret"
}"#;

fn write(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("write file");
    path.display().to_string()
}

fn args(extra: &[&str]) -> Args {
    Args::try_parse_from(["topicbot"].iter().chain(extra)).expect("valid args")
}

#[test]
fn test_load_config_applies_state_override() {
    let dir = TempDir::new().expect("temp dir");
    let config_path = write(&dir, "config.json", CONFIG);

    let config = load_config(&args(&[
        "--config",
        &config_path,
        "--state",
        "/tmp/topicbot-state.json",
    ]))
    .expect("valid config");

    assert_eq!(config.submission_channel(), ChannelId(5678));
    assert_eq!(config.state_file(), Path::new("/tmp/topicbot-state.json"));
}

#[test]
fn test_load_config_keeps_configured_state_file() {
    let dir = TempDir::new().expect("temp dir");
    let config_path = write(&dir, "config.json", CONFIG);

    let config = load_config(&args(&["--config", &config_path])).expect("valid config");

    assert_eq!(config.state_file(), Path::new("state.json"));
}

#[test]
fn test_load_config_rejects_invalid_config() {
    let dir = TempDir::new().expect("temp dir");
    let config_path = write(
        &dir,
        "config.json",
        r#"{"guild_id": 1, "on_topic_channel": 2, "review_channel": 2}"#,
    );

    assert!(load_config(&args(&["--config", &config_path])).is_err());
}

#[test]
fn test_load_config_reports_missing_file() {
    let dir = TempDir::new().expect("temp dir");
    let missing = dir.path().join("nope.json").display().to_string();

    let err = load_config(&args(&["--config", &missing])).unwrap_err();

    assert!(err.to_string().contains("Failed to read config file"));
}

#[tokio::test]
async fn test_check_config_tolerates_corrupt_state() {
    let dir = TempDir::new().expect("temp dir");
    let config_path = write(&dir, "config.json", CONFIG);
    let state_path = write(&dir, "state.json", "not json");
    let config = load_config(&args(&["--config", &config_path, "--state", &state_path]))
        .expect("valid config");

    check_config(&config, None).await;

    assert_eq!(
        std::fs::read_to_string(&state_path).expect("state kept"),
        "not json"
    );
}

#[tokio::test]
async fn test_run_with_check_config_exits_without_connecting() {
    let dir = TempDir::new().expect("temp dir");
    let config_path = write(&dir, "config.json", CONFIG);
    let state_path = dir.path().join("state.json").display().to_string();

    run(args(&[
        "--config",
        &config_path,
        "--state",
        &state_path,
        "--check-config",
    ]))
    .await
    .expect("check passes");

    assert!(!Path::new(&state_path).exists());
}
