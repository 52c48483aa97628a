use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

/// Helper to get a temporary home directory
fn temp_home_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get config file path in the temp dir
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".restaurant-viewer").join("config.json")
}

const BINARY_NAME: &str = "restaurant-viewer";

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Usage:"))
        .stdout(contains("set-status"));
}

#[test]
/// Config reset should delete an existing config file.
fn config_reset_deletes_config_file() {
    let tmp = temp_home_dir();
    let config_path = config_file_path(&tmp);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, "{}").unwrap();

    // Ensure the file exists
    assert!(config_path.exists());

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["config", "reset"])
        .env("HOME", tmp.path()) // simulate different $HOME
        .assert()
        .success()
        .stdout(contains("Config reset"));

    // Confirm the file was deleted
    assert!(!config_path.exists());
}

#[test]
/// Config show falls back to defaults when no file exists.
fn config_show_prints_defaults() {
    let tmp = temp_home_dir();

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["config", "show"])
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("\"staff_refresh_secs\": 3"))
        .stdout(contains("\"home_refresh_secs\": 5"));
}

#[test]
/// Config set writes the file, and config show reads it back.
fn config_set_persists_values() {
    let tmp = temp_home_dir();
    let config_path = config_file_path(&tmp);
    assert!(!config_path.exists());

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args([
        "config",
        "set",
        "--api-url",
        "http://10.0.0.7:8000",
        "--staff-refresh-secs",
        "10",
        "--background-color",
        "false",
    ])
    .env("HOME", tmp.path())
    .assert()
    .success()
    .stdout(contains("Config saved"));

    assert!(config_path.exists());

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["config", "show"])
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("\"api_url\": \"http://10.0.0.7:8000\""))
        .stdout(contains("\"staff_refresh_secs\": 10"))
        .stdout(contains("\"home_refresh_secs\": 5"))
        .stdout(contains("\"with_background_color\": false"));
}

#[test]
/// Only the three settable statuses are accepted.
fn set_status_rejects_unknown_status() {
    let tmp = temp_home_dir();

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["set-status", "--table-id", "1", "--status", "cleaning"])
        .env("HOME", tmp.path())
        .assert()
        .failure()
        .stderr(contains("unknown table status"));
}

#[test]
/// The staff panel sits behind the login screen and cannot be opened directly.
fn start_rejects_unknown_screen() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["start", "--screen", "panel"])
        .assert()
        .failure()
        .stderr(contains("unknown screen"));
}

#[test]
/// An unreachable API is reported as a failure, not a hang.
fn stats_fails_when_api_unreachable() {
    let tmp = temp_home_dir();

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["--api-url", "http://127.0.0.1:9", "stats"])
        .env("HOME", tmp.path())
        .env_remove("RESTAURANT_API_URL")
        .timeout(std::time::Duration::from_secs(30))
        .assert()
        .failure();
}
