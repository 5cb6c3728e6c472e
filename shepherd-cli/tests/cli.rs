use std::process::Command;

use assert_cmd::prelude::*;
use predicates::str::contains;

fn shepherd_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("shepherd"))
}

#[test]
fn version_flag_prints_name_and_version() {
    shepherd_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(contains("shepherd"));
}

#[test]
fn help_documents_every_flag() {
    let assert = shepherd_cmd().arg("--help").assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("stdout utf8");

    for flag in [
        "--no-ansi",
        "--log-file",
        "--log-level",
        "--log-append",
        "--check-forks",
        "-v",
    ] {
        assert!(stdout.contains(flag), "help is missing {flag}");
    }
}

#[test]
fn short_aliases_parse() {
    // --help short-circuits before any cloning; unknown aliases would fail
    shepherd_cmd()
        .args([
            "--na", "--lf", "x.log", "--ll", "debug", "--la", "false", "--cf", "--help",
        ])
        .assert()
        .success();
}

#[test]
fn rejects_unknown_log_level() {
    shepherd_cmd()
        .args(["--log-level", "loud"])
        .assert()
        .failure()
        .stderr(contains("loud"));
}

#[test]
fn rejects_unknown_flags() {
    shepherd_cmd().arg("--frobnicate").assert().failure();
}
