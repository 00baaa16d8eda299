//! CLI integration tests driving the compiled binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

fn cmd() -> Command {
    Command::cargo_bin("smellcatalog").expect("binary should build")
}

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

#[test]
fn test_default_run_lists_android_smells() {
    cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("Fused Location"))
        .stdout(predicate::str::contains("Leakage"));
}

#[test]
fn test_name_lookup_succeeds() {
    cmd()
        .args(["--name", "Fused Location"])
        .assert()
        .success()
        .stdout(predicate::str::contains("GPS"))
        .stdout(predicate::str::contains("Wi-Fi"));
}

#[test]
fn test_name_lookup_not_found_exits_nonzero() {
    cmd()
        .args(["--name", "Nonexistent Smell Name"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Not found"));
}

#[test]
fn test_name_lookup_is_case_sensitive() {
    cmd().args(["--name", "fused location"]).assert().failure();
}

#[test]
fn test_ios_platform_is_empty() {
    cmd()
        .args(["--platform", "ios"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No smells cataloged"));
}

#[test]
fn test_category_filter() {
    cmd()
        .args(["--category", "privacy", "--format", "compact"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tracking Id"))
        .stdout(predicate::str::contains("Fused Location").not());
}

#[test]
fn test_json_output_is_machine_readable() {
    let output = cmd()
        .args(["--format", "json"])
        .output()
        .expect("binary runs");
    assert!(output.status.success());

    let records: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout must be valid json");
    let records = records.as_array().expect("top level is an array");
    assert!(!records.is_empty());

    let fused = records
        .iter()
        .find(|r| r["name"] == "Fused Location")
        .expect("Fused Location exported");
    assert_eq!(fused["platform"], "android");
    assert_eq!(fused["category"], "optimized-api");
    assert_eq!(fused["axis"], "environmental");
}

#[test]
fn test_json_output_to_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("export.json");

    cmd()
        .args(["--format", "json", "--output"])
        .arg(&out)
        .assert()
        .success();

    let text = std::fs::read_to_string(&out).expect("export written");
    let parsed: serde_json::Value = serde_json::from_str(&text).expect("valid json");
    assert!(parsed.as_array().is_some());
}

#[test]
fn test_alternate_catalog_document() {
    cmd()
        .args(["--format", "compact", "--catalog"])
        .arg(fixtures_path().join("mini_catalog.md"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Durable Wake Lock"))
        .stdout(predicate::str::contains("Fused Location").not());
}

#[test]
fn test_malformed_catalog_fails_at_load() {
    cmd()
        .arg("--catalog")
        .arg(fixtures_path().join("broken_catalog.md"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("two-column"));
}

#[test]
fn test_list_categories() {
    cmd()
        .arg("--list-categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("Leakage"))
        .stdout(predicate::str::contains("Privacy"));
}

#[test]
fn test_summary_format() {
    cmd()
        .args(["--format", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("By Category"))
        .stdout(predicate::str::contains("Environmental"));
}

#[test]
fn test_config_file_sets_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config_path = dir.path().join("smellcatalog.toml");
    std::fs::write(&config_path, "format = \"compact\"\nplatform = \"ios\"\n")
        .expect("write config");

    cmd()
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("No smells cataloged").or(predicate::str::is_empty()));
}

#[test]
fn test_cli_flag_overrides_config() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config_path = dir.path().join("smellcatalog.toml");
    std::fs::write(&config_path, "platform = \"ios\"\n").expect("write config");

    cmd()
        .arg("--config")
        .arg(&config_path)
        .args(["--platform", "android", "--format", "compact"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fused Location"));
}
