//! Configuration integration tests.
//!
//! These tests verify config discovery, format parsing, and precedence
//! from an end-to-end perspective using the compiled binary. Tests use
//! `info --json` to assert actual config values, not just process success.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

/// Run `info --json` from a directory and parse the JSON output.
fn info_json(dir: &std::path::Path) -> Value {
    let output = cmd()
        .args(["-C", dir.to_str().unwrap(), "info", "--json"])
        .output()
        .expect("failed to run command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("invalid JSON output")
}

// =============================================================================
// Config File Discovery
// =============================================================================

#[test]
fn runs_without_config_file() {
    let tmp = TempDir::new().unwrap();
    let json = info_json(tmp.path());

    assert_eq!(
        json["config"]["log_level"], "info",
        "should use default log level"
    );
    assert!(
        json["config"]["config_file"].is_null(),
        "no config file should be reported"
    );
}

#[test]
fn discovers_dotfile_config_in_current_dir() {
    let tmp = TempDir::new().unwrap();
    let config_path = tmp.path().join(".essay-grade.toml");
    fs::write(&config_path, r#"log_level = "debug""#).unwrap();

    let json = info_json(tmp.path());

    assert_eq!(json["config"]["log_level"], "debug");
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(
        reported.ends_with(".essay-grade.toml"),
        "should report dotfile: {reported}"
    );
}

#[test]
fn discovers_regular_config_in_current_dir() {
    let tmp = TempDir::new().unwrap();
    let config_path = tmp.path().join("essay-grade.toml");
    fs::write(&config_path, r#"log_level = "warn""#).unwrap();

    let json = info_json(tmp.path());

    assert_eq!(json["config"]["log_level"], "warn");
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(
        reported.ends_with("essay-grade.toml"),
        "should report regular config: {reported}"
    );
}

#[test]
fn discovers_config_in_parent_directory() {
    let tmp = TempDir::new().unwrap();
    let sub_dir = tmp.path().join("nested").join("deep");
    fs::create_dir_all(&sub_dir).unwrap();

    // Config in root, run from nested/deep
    fs::write(tmp.path().join(".essay-grade.toml"), r#"log_level = "debug""#).unwrap();

    let json = info_json(&sub_dir);

    assert_eq!(json["config"]["log_level"], "debug");
    assert!(
        json["config"]["config_file"].as_str().is_some(),
        "should find parent config"
    );
}

#[test]
fn regular_name_overrides_dotfile() {
    let tmp = TempDir::new().unwrap();

    // Both configs exist: regular file (higher precedence) should win
    fs::write(tmp.path().join(".essay-grade.toml"), r#"log_level = "debug""#).unwrap();
    fs::write(tmp.path().join("essay-grade.toml"), r#"log_level = "error""#).unwrap();

    let json = info_json(tmp.path());

    assert_eq!(
        json["config"]["log_level"], "error",
        "regular file should override dotfile"
    );
}

#[test]
fn short_name_is_overridden_by_full_name() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("essay.toml"), r#"default_domain = "Polity""#).unwrap();
    fs::write(
        tmp.path().join("essay-grade.toml"),
        r#"default_domain = "Economy""#,
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["default_domain"], "Economy");
}

// =============================================================================
// Config Format Parsing
// =============================================================================

#[test]
fn parses_toml_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".essay-grade.toml"), r#"log_level = "warn""#).unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["log_level"], "warn");
}

#[test]
fn parses_yaml_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".essay-grade.yaml"), "log_level: warn\n").unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["log_level"], "warn");
}

#[test]
fn parses_yml_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".essay-grade.yml"), "log_level: debug\n").unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["log_level"], "debug");
}

#[test]
fn parses_json_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".essay-grade.json"),
        r#"{"log_level": "error"}"#,
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["log_level"], "error");
}

// =============================================================================
// Config Precedence
// =============================================================================

#[test]
fn closer_config_takes_precedence() {
    let tmp = TempDir::new().unwrap();
    let sub_dir = tmp.path().join("project");
    fs::create_dir_all(&sub_dir).unwrap();

    // Parent config (error) vs child config (debug): child should win
    fs::write(tmp.path().join(".essay-grade.toml"), r#"log_level = "error""#).unwrap();
    fs::write(sub_dir.join(".essay-grade.toml"), r#"log_level = "debug""#).unwrap();

    let json = info_json(&sub_dir);

    assert_eq!(
        json["config"]["log_level"], "debug",
        "closer config should win"
    );
}

#[test]
fn later_extension_overrides_earlier_in_same_directory() {
    let tmp = TempDir::new().unwrap();

    // Both dotfiles exist: YAML comes after TOML in merge order, so it wins
    fs::write(tmp.path().join(".essay-grade.toml"), r#"log_level = "debug""#).unwrap();
    fs::write(tmp.path().join(".essay-grade.yaml"), "log_level: error\n").unwrap();

    let json = info_json(tmp.path());
    assert_eq!(
        json["config"]["log_level"], "error",
        "later extension (YAML) should override earlier (TOML) in merge"
    );
}

#[test]
fn explicit_config_overrides_discovered() {
    let tmp = TempDir::new().unwrap();

    // Project config sets debug
    fs::write(tmp.path().join(".essay-grade.toml"), r#"log_level = "debug""#).unwrap();

    // Explicit config sets error
    let explicit = tmp.path().join("override.toml");
    fs::write(&explicit, r#"log_level = "error""#).unwrap();

    let output = cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "--config",
            explicit.to_str().unwrap(),
            "info",
            "--json",
        ])
        .output()
        .expect("failed to run command");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json["config"]["log_level"], "error",
        "--config should override discovered config"
    );
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(
        reported.ends_with("override.toml"),
        "--config path should be reported: {reported}"
    );
}

// =============================================================================
// Scoring Configuration
// =============================================================================

#[test]
fn scoring_settings_are_reported() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".essay-grade.toml"),
        r#"
default_domain = "Environment"

[scoring]
ml_weight = 0.25
on_predictor_error = "fail"

[length]
min_words = 300
max_words = 900

[dictionary]
extra_words = ["agroforestry", "biochar"]

[domains]
Agriculture = "crops farming irrigation soil harvest"
"#,
    )
    .unwrap();

    let json = info_json(tmp.path());
    let config = &json["config"];
    assert_eq!(config["default_domain"], "Environment");
    assert_eq!(config["ml_weight"], 0.25);
    assert_eq!(config["on_predictor_error"], "fail");
    assert_eq!(config["min_words"], 300);
    assert_eq!(config["max_words"], 900);
    assert_eq!(config["extra_words"], 2);
    assert_eq!(config["custom_domains"][0], "Agriculture");
}

#[test]
fn env_vars_override_config_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".essay-grade.toml"),
        "default_domain = \"Polity\"\n[scoring]\nml_weight = 0.5\n",
    )
    .unwrap();

    let output = cmd()
        .env("ESSAY_GRADE_DEFAULT_DOMAIN", "Economy")
        .env("ESSAY_GRADE_SCORING__ML_WEIGHT", "0.1")
        .args(["-C", tmp.path().to_str().unwrap(), "info", "--json"])
        .output()
        .expect("failed to run command");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["config"]["default_domain"], "Economy");
    assert_eq!(json["config"]["ml_weight"], 0.1);
}

#[test]
fn invalid_weights_fail_evaluation() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".essay-grade.toml"),
        "[scoring.weights]\nrelevance = 0.9\n",
    )
    .unwrap();
    fs::write(tmp.path().join("essay.txt"), "Trade and taxation shape growth.").unwrap();

    cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "evaluate",
            "essay.txt",
            "--domain",
            "Economy",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid scoring configuration"))
        .stderr(predicate::str::contains("weights must sum to 1.0"));
}

#[test]
fn inverted_length_bounds_fail_evaluation() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".essay-grade.toml"),
        "[length]\nmin_words = 900\nmax_words = 300\n",
    )
    .unwrap();
    fs::write(tmp.path().join("essay.txt"), "Trade and taxation shape growth.").unwrap();

    cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "evaluate",
            "essay.txt",
            "--domain",
            "Economy",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid scoring configuration"));
}

#[test]
fn config_default_domain_is_used_by_evaluate() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".essay-grade.toml"),
        r#"default_domain = "Polity""#,
    )
    .unwrap();
    fs::write(tmp.path().join("essay.txt"), "Trade and taxation shape growth.").unwrap();

    let output = cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "evaluate",
            "essay.txt",
            "--no-ml",
            "--json",
        ])
        .output()
        .expect("failed to run command");
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["domain"], "Polity");
}

#[test]
fn extra_words_are_not_misspelled() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".essay-grade.toml"),
        "[dictionary]\nextra_words = [\"agroforestry\"]\n",
    )
    .unwrap();
    fs::write(tmp.path().join("essay.txt"), "Agroforestry helps the land.").unwrap();

    let output = cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "spelling",
            "essay.txt",
            "--json",
        ])
        .output()
        .expect("failed to run command");
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["misspelled"].as_array().map(Vec::len), Some(0));
}

#[test]
fn word_list_resolves_relative_to_config() {
    let tmp = TempDir::new().unwrap();
    let sub = tmp.path().join("essays");
    fs::create_dir_all(&sub).unwrap();
    fs::write(tmp.path().join("words.txt"), "biochar\n").unwrap();
    fs::write(
        tmp.path().join(".essay-grade.toml"),
        "[dictionary]\nword_list = \"words.txt\"\n",
    )
    .unwrap();
    fs::write(sub.join("essay.txt"), "Biochar improves the land.").unwrap();

    let output = cmd()
        .args(["-C", sub.to_str().unwrap(), "spelling", "essay.txt", "--json"])
        .output()
        .expect("failed to run command");
    assert!(
        output.status.success(),
        "{}",
        String::from_utf8_lossy(&output.stderr)
    );
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["misspelled"].as_array().map(Vec::len), Some(0));
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn invalid_toml_config_shows_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".essay-grade.toml"),
        "this is not valid toml [[[",
    )
    .unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration").or(predicate::str::contains("config")));
}

#[test]
fn invalid_yaml_config_shows_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".essay-grade.yaml"),
        "invalid:\n  yaml\n content:\n[broken",
    )
    .unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure();
}

#[test]
fn invalid_json_config_shows_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".essay-grade.json"), "{not valid json}").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure();
}

#[test]
fn unknown_config_field_is_ignored() {
    // Figment ignores unknown fields by default with serde
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".essay-grade.toml"),
        "log_level = \"info\"\nunknown_field = \"should be ignored\"\nanother_unknown = 42\n",
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["log_level"], "info");
}

// =============================================================================
// Boundary Marker Tests
// =============================================================================

#[test]
fn git_boundary_stops_config_search() {
    let tmp = TempDir::new().unwrap();

    // Structure: /tmp/parent/.project.toml + /tmp/parent/repo/.git/ + /tmp/parent/repo/src/
    let parent = tmp.path().join("parent");
    let repo = parent.join("repo");
    let src = repo.join("src");
    fs::create_dir_all(&src).unwrap();

    // Config in parent (outside repo)
    fs::write(parent.join(".essay-grade.toml"), r#"log_level = "error""#).unwrap();

    // .git directory marks repo boundary
    fs::create_dir(repo.join(".git")).unwrap();

    // Running from src/ should NOT find parent config (stopped at .git)
    let json = info_json(&src);

    assert_eq!(
        json["config"]["log_level"], "info",
        "should use default: boundary stops search"
    );
    assert!(
        json["config"]["config_file"].is_null(),
        "should not find config beyond boundary"
    );
}

#[test]
fn config_in_same_dir_as_git_is_found() {
    let tmp = TempDir::new().unwrap();
    let repo = tmp.path().join("repo");
    let src = repo.join("src");
    fs::create_dir_all(&src).unwrap();

    // .git and config in same directory
    fs::create_dir(repo.join(".git")).unwrap();
    fs::write(repo.join(".essay-grade.toml"), r#"log_level = "debug""#).unwrap();

    // Running from src/ should find the repo config
    let json = info_json(&src);

    assert_eq!(
        json["config"]["log_level"], "debug",
        "config next to .git should be found"
    );
    assert!(
        json["config"]["config_file"].as_str().is_some(),
        "should report config file"
    );
}
