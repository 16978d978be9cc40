#![allow(deprecated)]
use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ij_compat() -> Command {
    let mut cmd = Command::cargo_bin("ij-compat").unwrap();
    cmd.env_remove("IJ_COMPAT_CATALOG");
    cmd
}

fn write_catalog(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("releases.json");
    fs::write(
        &path,
        r#"[
            {"marketingVersion": "2023.3", "branch": 233, "build": 11799, "fix": 241, "releaseDate": "2023-12-06", "recommendedToolchain": "JDK 17"},
            {"marketingVersion": "2024.3", "branch": 243, "build": 21565, "fix": 193, "releaseDate": "2024-11-12", "recommendedToolchain": "JDK 21"},
            {"marketingVersion": "2025.1", "branch": 251, "build": 23774, "fix": 435, "releaseDate": "2025-04-15", "recommendedToolchain": "JDK 21"}
        ]"#,
    )
    .unwrap();
    path
}

// ---------------------------------------------------------------------------
// ij-compat check: exit code 0
// ---------------------------------------------------------------------------

#[test]
fn check_exits_zero_when_every_target_is_in_range() {
    let dir = TempDir::new().unwrap();
    let catalog = write_catalog(&dir);

    ij_compat()
        .args(["--catalog", catalog.to_str().unwrap()])
        .args(["check", "--since", "233", "--until", "251.*"])
        .args(["--targets", "2024.3,2025.1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("In range (2):"))
        .stdout(predicate::str::contains("Summary: 2 in range"));
}

#[test]
fn check_warns_on_stderr_but_exits_zero_for_an_open_ended_range() {
    let dir = TempDir::new().unwrap();
    let catalog = write_catalog(&dir);

    ij_compat()
        .args(["--catalog", catalog.to_str().unwrap()])
        .args(["check", "--since", "243", "--targets", "2024.3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unbounded above (1):"))
        .stderr(predicate::str::contains("cannot be verified"));
}

// ---------------------------------------------------------------------------
// ij-compat check: exit code 1
// ---------------------------------------------------------------------------

#[test]
fn check_exits_one_when_a_target_falls_outside_the_range() {
    let dir = TempDir::new().unwrap();
    let catalog = write_catalog(&dir);

    ij_compat()
        .args(["--catalog", catalog.to_str().unwrap()])
        .args(["check", "--since", "243", "--until", "243.*"])
        .args(["--targets", "2023.3"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Below range (1):"))
        .stdout(predicate::str::contains(
            "Suggested range: since-build 233, until-build 243.*",
        ));
}

#[test]
fn check_json_output_keeps_the_exit_code() {
    let dir = TempDir::new().unwrap();
    let catalog = write_catalog(&dir);

    ij_compat()
        .args(["--catalog", catalog.to_str().unwrap(), "--json"])
        .args(["check", "--since", "243", "--until", "243.*"])
        .args(["--targets", "2023.3"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"declaredRange\""))
        .stdout(predicate::str::contains("\"BELOW_RANGE\""));
}

// ---------------------------------------------------------------------------
// ij-compat check: exit code 2
// ---------------------------------------------------------------------------

#[test]
fn check_exits_two_for_a_malformed_since_build() {
    let dir = TempDir::new().unwrap();
    let catalog = write_catalog(&dir);

    ij_compat()
        .args(["--catalog", catalog.to_str().unwrap()])
        .args(["check", "--since", "24x", "--targets", "2024.3"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Malformed build number '24x'"));
}

#[test]
fn unknown_targets_exit_two_even_when_another_target_fails_the_range() {
    let dir = TempDir::new().unwrap();
    let catalog = write_catalog(&dir);

    // 2023.3 is below range (otherwise exit 1), but the unknown version
    // turns the run into an input error.
    ij_compat()
        .args(["--catalog", catalog.to_str().unwrap()])
        .args(["check", "--since", "243", "--until", "243.*"])
        .args(["--targets", "2023.3,2077.1"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Below range (1):"))
        .stderr(predicate::str::contains("Unknown IDE version '2077.1'"));
}

#[test]
fn check_exits_two_for_an_unreadable_catalog() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.json");

    ij_compat()
        .args(["--catalog", missing.to_str().unwrap()])
        .args(["check", "--since", "243", "--targets", "2024.3"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("failed to load catalog"));
}

#[test]
fn check_exits_two_for_an_unreadable_issues_file() {
    let dir = TempDir::new().unwrap();
    let catalog = write_catalog(&dir);

    ij_compat()
        .args(["--catalog", catalog.to_str().unwrap()])
        .args(["check", "--since", "243", "--until", "243.*"])
        .args(["--targets", "2024.3"])
        .args(["--issues", dir.path().join("nope.json").to_str().unwrap()])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("failed to load issues"));
}

#[test]
fn check_exits_two_for_a_malformed_issues_file() {
    let dir = TempDir::new().unwrap();
    let catalog = write_catalog(&dir);
    let issues = dir.path().join("issues.json");
    fs::write(&issues, "{not json").unwrap();

    ij_compat()
        .args(["--catalog", catalog.to_str().unwrap()])
        .args(["check", "--since", "243", "--until", "243.*"])
        .args(["--targets", "2024.3"])
        .args(["--issues", issues.to_str().unwrap()])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid issues file"));
}

// ---------------------------------------------------------------------------
// ij-compat releases
// ---------------------------------------------------------------------------

#[test]
fn releases_prints_the_catalog_as_a_table() {
    let dir = TempDir::new().unwrap();
    let catalog = write_catalog(&dir);

    ij_compat()
        .args(["--catalog", catalog.to_str().unwrap(), "releases"])
        .assert()
        .success()
        .stdout(predicate::str::contains("VERSION"))
        .stdout(predicate::str::contains("243.21565.193"))
        .stdout(predicate::str::contains("JDK 21"));
}
