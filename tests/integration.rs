// Integration tests for the teascore CLI.
//
// These tests use assert_cmd to invoke the binary and verify
// exit codes and stdout/stderr output.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to build a Command for the teascore binary.
fn teascore() -> Command {
    let mut cmd = Command::cargo_bin("teascore").expect("binary should exist");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn cli_version_flag() {
    teascore()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("teascore"));
}

#[test]
fn cli_help_flag() {
    teascore()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Tea effect scoring"));
}

#[test]
fn analyze_requires_path() {
    teascore()
        .arg("analyze")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn normalize_requires_scores() {
    teascore()
        .arg("normalize")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn normalize_rejects_malformed_score() {
    teascore()
        .args(["normalize", "--score", "calming"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected name=value"));
}

#[test]
fn normalize_equal_scores_maps_to_midpoint() {
    teascore()
        .args(["normalize", "-s", "a=5", "-s", "b=5", "-s", "c=5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"a\": 5.0"))
        .stdout(predicate::str::contains("\"c\": 5.0"));
}

#[test]
fn normalize_all_zero_scores_are_unchanged() {
    teascore()
        .args(["normalize", "-s", "a=0", "-s", "b=0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"a\": 0.0"))
        .stdout(predicate::str::contains("\"b\": 0.0"));
}

#[test]
fn enhance_boosts_clear_dominant_effect() {
    teascore()
        .args([
            "enhance", "-s", "a=10", "-s", "b=5", "-s", "c=5", "--dominant", "a", "--factor",
            "1.1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"a\": 9.8"))
        .stdout(predicate::str::contains("\"b\": 4.75"))
        .stdout(predicate::str::contains("\"c\": 4.75"));
}

#[test]
fn enhance_defaults_to_standard_factor() {
    teascore()
        .args(["enhance", "-s", "a=8", "-s", "b=5", "-s", "c=5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"a\": 8.8"))
        .stdout(predicate::str::contains("\"b\": 4.75"));
}

#[test]
fn duplicate_score_keeps_last_value_with_warning() {
    teascore()
        .args(["normalize", "-s", "a=1", "-s", "a=0", "-s", "b=0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"a\": 0.0"))
        .stderr(predicate::str::contains("duplicate --score"));
}

#[test]
fn enhance_leaves_narrow_lead_unchanged() {
    teascore()
        .args(["enhance", "-s", "a=6", "-s", "b=5", "-s", "c=5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"a\": 6.0"))
        .stdout(predicate::str::contains("\"b\": 5.0"));
}

#[test]
fn describe_prints_matching_buckets() {
    teascore()
        .args(["describe", "--elevation", "1200", "--latitude", "-30", "--month", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("elevation 1200 m: Highland garden"))
        .stdout(predicate::str::contains("latitude -30 deg: Warm temperate zone"))
        .stdout(predicate::str::contains("season spring"));
}

#[test]
fn describe_reports_values_outside_tables() {
    teascore()
        .args(["describe", "--elevation", "-20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no descriptor"));
}

#[test]
fn describe_rejects_invalid_month() {
    teascore()
        .args(["describe", "--month", "13"])
        .assert()
        .failure();
}
