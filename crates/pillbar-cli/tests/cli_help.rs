use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_all_commands() {
    cargo_bin_cmd!("pillbar")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("demo"))
        .stdout(predicate::str::contains("fit"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_fit_help_shows_flags() {
    cargo_bin_cmd!("pillbar")
        .args(["fit", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--label"))
        .stdout(predicate::str::contains("--width"))
        .stdout(predicate::str::contains("--suffix"))
        .stdout(predicate::str::contains("--overhead"))
        .stdout(predicate::str::contains("--px"))
        .stdout(predicate::str::contains("--json"));
}

#[test]
fn test_config_help_shows_subcommands() {
    cargo_bin_cmd!("pillbar")
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("path"))
        .stdout(predicate::str::contains("init"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("pillbar")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1"));
}

#[test]
fn test_width_policy_rejects_garbage() {
    cargo_bin_cmd!("pillbar")
        .args(["--width", "wide", "demo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected \"auto\""));
}
