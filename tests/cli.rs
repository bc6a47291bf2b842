//! End-to-end tests for the pomotrack binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pomotrack(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pomotrack").unwrap();
    cmd.env("HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("POMOTRACK_CONFIG")
        .env_remove("POMOTRACK_LOG");
    cmd
}

#[test]
fn help_describes_timer() {
    let home = TempDir::new().unwrap();
    pomotrack(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("work/break countdown timer"));
}

#[test]
fn status_defaults_to_twenty_five_minutes() {
    let home = TempDir::new().unwrap();
    pomotrack(&home)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Work Session"))
        .stdout(predicate::str::contains("25:00"));
}

#[test]
fn status_json_with_minutes_override() {
    let home = TempDir::new().unwrap();
    let output = pomotrack(&home)
        .args(["status", "--minutes", "50", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["remaining_minutes"], 50);
    assert_eq!(value["remaining_seconds"], 0);
    assert_eq!(value["is_running"], false);
    assert_eq!(value["is_break"], false);
}

#[test]
fn status_reads_config_file() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("custom.yaml");
    std::fs::write(
        &config,
        "general:\n  default_output: json\ntimer:\n  work_minutes: 40\n",
    )
    .unwrap();

    pomotrack(&home)
        .arg("--config")
        .arg(&config)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"remaining_minutes\": 40"));
}

#[test]
fn invalid_config_is_reported() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("bad.yaml");
    std::fs::write(&config, "timer:\n  work_minutes: 0\n").unwrap();

    pomotrack(&home)
        .arg("--config")
        .arg(&config)
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("work_minutes"));
}

#[test]
fn rejects_zero_minutes() {
    let home = TempDir::new().unwrap();
    pomotrack(&home)
        .args(["run", "--minutes", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid duration"));
}

#[test]
fn config_init_then_path() {
    let home = TempDir::new().unwrap();
    let expected = home.path().join(".pomotrack").join("config.yaml");

    pomotrack(&home)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));
    assert!(expected.exists());

    pomotrack(&home)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    pomotrack(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".pomotrack"));
}

#[test]
fn completions_for_bash() {
    let home = TempDir::new().unwrap();
    pomotrack(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pomotrack"));
}
