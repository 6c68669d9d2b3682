//! CLI help output integration tests

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_root_help() {
    Command::cargo_bin("jtp")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("JSON Table Preview CLI"));
}

#[test]
fn test_preview_help() {
    Command::cargo_bin("jtp")
        .unwrap()
        .args(["preview", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--no-paginate"));
}

#[test]
fn test_export_help() {
    Command::cargo_bin("jtp")
        .unwrap()
        .args(["export", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--all"));
}

#[test]
fn test_show_help() {
    Command::cargo_bin("jtp")
        .unwrap()
        .args(["show", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--page-size"));
}

#[test]
fn test_desc_requires_sort() {
    Command::cargo_bin("jtp")
        .unwrap()
        .args(["show", "-", "--desc"])
        .assert()
        .failure();
}
