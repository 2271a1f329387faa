//! CLI Integration Tests
//!
//! These tests run the `cropsense` binary against an empty config directory,
//! so every command sees the built-in defaults.
//!
//! ```
//! cargo test --package cropsense-cli --test cli_integration
//! ```

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Run cropsense with `home` as its home and config directory.
fn run_cropsense_in(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cropsense"))
        .args(args)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("CROPSENSE_CROP")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run cropsense binary")
}

fn run_cropsense(args: &[&str]) -> Output {
    let home = TempDir::new().unwrap();
    run_cropsense_in(home.path(), args)
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

// =============================================================================
// Help and Version
// =============================================================================

#[test]
fn test_help() {
    let output = run_cropsense(&["--help"]);
    assert!(output.status.success());
    let text = stdout(&output);
    for command in ["watch", "classify", "crops", "config", "completions"] {
        assert!(text.contains(command), "help should list {command}");
    }
}

#[test]
fn test_version() {
    let output = run_cropsense(&["--version"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_color_env_values() {
    let home = TempDir::new().unwrap();
    for value in ["1", "true", "0", ""] {
        let output = Command::new(env!("CARGO_BIN_EXE_cropsense"))
            .args(["classify", "-t", "25", "-H", "50", "-s", "500"])
            .env("HOME", home.path())
            .env("XDG_CONFIG_HOME", home.path().join(".config"))
            .env("NO_COLOR", value)
            .output()
            .expect("Failed to run cropsense binary");
        assert!(output.status.success(), "NO_COLOR={value:?} should be accepted");
        assert!(stdout(&output).contains("conditions optimal"));
    }
}

#[test]
fn test_watch_no_header_appends() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("readings.csv");
    let path_arg = path.to_str().unwrap();
    let watch = |extra: &[&str]| {
        let mut args = vec![
            "--quiet", "--output", path_arg, "watch", "--count", "1", "--format", "csv",
        ];
        args.extend_from_slice(extra);
        run_cropsense_in(home.path(), &args)
    };

    assert!(watch(&[]).status.success());
    assert!(watch(&["--no-header"]).status.success());

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3, "header plus two rows, got: {content}");
    assert!(lines[0].starts_with("timestamp,"));
}

#[test]
fn test_unknown_command_fails() {
    let output = run_cropsense(&["irrigate"]);
    assert!(!output.status.success());
}

// =============================================================================
// Classify
// =============================================================================

#[test]
fn test_classify_text() {
    let output = run_cropsense(&["classify", "-t", "25", "-H", "50", "-s", "500"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Suggestion:  conditions optimal"), "got: {text}");
}

#[test]
fn test_classify_priority_order() {
    // Dry and hot: the humidity rule wins
    let output = run_cropsense(&["classify", "-t", "40", "-H", "20", "-s", "500"]);
    assert!(stdout(&output).contains("needs more water"));

    // Boundaries are strict
    let output = run_cropsense(&["classify", "-t", "35", "-H", "80", "-s", "100"]);
    assert!(stdout(&output).contains("conditions optimal"));
}

#[test]
fn test_classify_json() {
    let output = run_cropsense(&["--json", "classify", "-t", "5", "-H", "50", "-s", "500"]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["suggestion"], "too cold");
}

#[test]
fn test_classify_csv() {
    let output = run_cropsense(&[
        "classify", "-t", "25", "-H", "85", "-s", "500", "--format", "csv",
    ]);
    let text = stdout(&output);
    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some("temperature_c,humidity_pct,sunlight_lux,suggestion")
    );
    assert_eq!(
        lines.next(),
        Some("25.00,85.00,500.00,\"soil too wet, reduce watering\"")
    );
}

// =============================================================================
// Crops
// =============================================================================

#[test]
fn test_crops_lists_defaults() {
    let output = run_cropsense(&["crops"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("* Tomato (default)"));
    assert!(text.contains("Lettuce"));
}

// =============================================================================
// Config
// =============================================================================

#[test]
fn test_config_set_changes_default_crop() {
    let home = TempDir::new().unwrap();
    let output = run_cropsense_in(home.path(), &["config", "set", "default_crop", "Rice"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let output = run_cropsense_in(home.path(), &["crops"]);
    assert!(stdout(&output).contains("* Rice (default)"));
}

#[test]
fn test_config_set_rejects_unknown_key() {
    let output = run_cropsense(&["config", "set", "colour", "blue"]);
    assert!(!output.status.success());
}

// =============================================================================
// Watch
// =============================================================================

#[test]
fn test_watch_count_csv() {
    let output = run_cropsense(&[
        "--quiet", "watch", "--crop", "Corn", "--count", "2", "--interval", "1", "--seed", "7",
        "--format", "csv",
    ]);
    assert!(output.status.success());
    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3, "header plus two rows, got: {text}");
    assert!(lines[0].starts_with("timestamp,crop,"));
    assert!(lines[1..].iter().all(|line| line.contains(",Corn,")));
}

#[test]
fn test_watch_empty_crop_is_unknown() {
    let output = run_cropsense(&[
        "--quiet", "--json", "--compact", "watch", "--crop", "", "--count", "1",
    ]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(value["crop_name"], "Unknown");
}

#[test]
fn test_watch_keeps_crop_text_as_given() {
    let output = run_cropsense(&[
        "--quiet", "--json", "--compact", "watch", "--crop", " Corn ", "--count", "1",
    ]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(value["crop_name"], " Corn ");
}

#[test]
fn test_completions() {
    let output = run_cropsense(&["completions", "bash"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("cropsense"));
}
