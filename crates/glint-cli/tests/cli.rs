//! Tests for the `glint` binary's startup behaviour.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn glint(cwd: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("glint").unwrap();
    cmd.current_dir(cwd.path())
        .env_remove("PORT")
        .env_remove("WATCH")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_help_lists_flags() {
    let temp = TempDir::new().unwrap();
    glint(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--watch"))
        .stdout(predicate::str::contains("--debounce-ms"))
        .stdout(predicate::str::contains("--port"));
}

#[test]
fn test_version() {
    let temp = TempDir::new().unwrap();
    glint(&temp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_explicit_config_fails() {
    let temp = TempDir::new().unwrap();
    glint(&temp)
        .args(["--config", "missing.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn test_zero_debounce_fails() {
    let temp = TempDir::new().unwrap();
    glint(&temp)
        .args(["--debounce-ms", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 1"));
}

#[test]
fn test_zero_debounce_in_config_file_fails() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("glint.config.json"), r#"{ "debounceMs": 0 }"#).unwrap();
    glint(&temp)
        .assert()
        .failure()
        .stderr(predicate::str::contains("debounceMs"));
}

#[test]
fn test_root_that_is_not_a_directory_fails() {
    let temp = TempDir::new().unwrap();
    glint(&temp)
        .args(["--root", "no-such-dir", "--port", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("root"));
}

#[test]
fn test_occupied_port_fails_to_bind() {
    let temp = TempDir::new().unwrap();
    let taken = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = taken.local_addr().unwrap().port();

    glint(&temp)
        .args(["--port", &port.to_string()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to bind"));
}
