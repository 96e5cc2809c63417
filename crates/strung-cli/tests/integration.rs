//! Integration tests for strung CLI commands.
//!
//! These tests run the actual binary and verify end-to-end behavior.

use std::process::Command;

fn binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_strung"))
}

#[test]
fn patterns_command_lists_all_patterns() {
    let output = binary()
        .arg("patterns")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("star"), "Should list 'star' pattern");
    assert!(stdout.contains("eye"), "Should list 'eye' pattern");
    assert!(stdout.contains("mandala"), "Should list 'mandala' pattern");
    assert!(stdout.contains("spiral"), "Should list 'spiral' pattern");
    assert!(stdout.contains("parabola"), "Should list 'parabola' pattern");
    assert!(stdout.contains("wave"), "Should list 'wave' pattern");
}

#[test]
fn render_command_produces_svg() {
    let output = binary()
        .args(["render", "-p", "star"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("<svg"), "Should have SVG element");
    assert!(stdout.contains("<line"), "Should have line elements");
    assert!(stdout.contains("<circle"), "Should have nail circles");
    assert!(stdout.contains("</svg>"), "Should close SVG element");
}

#[test]
fn render_command_produces_json() {
    let output = binary()
        .args(["render", "-p", "mandala", "-f", "json", "-n", "25"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let doc: serde_json::Value =
        serde_json::from_str(&stdout).expect("Output should be valid JSON");

    assert_eq!(doc["pattern"], "mandala");
    assert_eq!(doc["strings"].as_array().map(|a| a.len()), Some(25));
    assert!(doc["step_count"].as_u64().unwrap() >= 25);
}

#[test]
fn render_command_applies_config_overrides() {
    let output = binary()
        .args([
            "render", "-p", "star", "-f", "json", "--set", "sides=5", "--set",
            "nails_per_side=10",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let doc: serde_json::Value =
        serde_json::from_str(&stdout).expect("Output should be valid JSON");

    assert_eq!(doc["step_count"], 50);
}

#[test]
fn render_command_rejects_unknown_pattern() {
    let output = binary()
        .args(["render", "-p", "nonesuch"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("nonesuch"), "Error should name the pattern");
}

#[test]
fn harness_command_passes_and_emits_json() {
    let output = binary()
        .args(["harness", "--json"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "harness should pass on builtins");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let report: serde_json::Value =
        serde_json::from_str(&stdout).expect("Report should be valid JSON");

    assert_eq!(report["failed"], 0);
    assert!(report["passed"].as_u64().unwrap() >= 6);
}

#[test]
fn unknown_command_fails() {
    let output = binary()
        .arg("frobnicate")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
}
