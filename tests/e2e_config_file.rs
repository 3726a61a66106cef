//! End-to-end tests for config file loading through the CLI.
//!
//! Config problems must be reported before the package is opened, so most of
//! these tests point at a package path that doesn't exist.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

/// Write a config file at the specified path.
fn write_config(path: &Path, content: &str) {
    fs::write(path, content).unwrap();
}

fn run_with_config(content: &str) -> assert_cmd::assert::Assert {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.ini");
    write_config(&config_path, content);

    cargo_bin_cmd!("nuspec-graph")
        .arg(&config_path)
        .arg(dir.path().join("does-not-exist.nupkg"))
        .assert()
}

// ============================================================================
// Required keys
// ============================================================================

#[test]
fn test_missing_package_name() {
    run_with_config("[main]\nOutputPath = graph.png\nVisualizerPath = mmdc\n")
        .code(1)
        .stderr(predicate::str::contains("Missing config key 'PackageName'"));
}

#[test]
fn test_missing_output_path() {
    run_with_config("[main]\nPackageName = Foo\nVisualizerPath = mmdc\n")
        .code(1)
        .stderr(predicate::str::contains("Missing config key 'OutputPath'"));
}

#[test]
fn test_missing_visualizer_path() {
    run_with_config("[main]\nPackageName = Foo\nOutputPath = graph.png\n")
        .code(1)
        .stderr(predicate::str::contains("Missing config key 'VisualizerPath'"));
}

#[test]
fn test_missing_main_section() {
    run_with_config("[settings]\nPackageName = Foo\n")
        .code(1)
        .stderr(predicate::str::contains("Missing [main] section"));
}

// ============================================================================
// Optional keys and validation
// ============================================================================

#[test]
fn test_invalid_graph_style() {
    run_with_config(
        "[main]\nPackageName = Foo\nOutputPath = graph.png\nVisualizerPath = mmdc\nGraphStyle = radial\n",
    )
    .code(1)
    .stderr(predicate::str::contains("Invalid value for config key 'GraphStyle'"));
}

#[test]
fn test_unknown_field_warns_then_continues_to_package() {
    run_with_config(
        "[main]\nPackageName = Foo\nOutputPath = graph.png\nVisualizerPath = mmdc\nTheme = dark\n",
    )
    .code(1)
    .stderr(predicate::str::contains(
        "Unknown config field 'Theme' will be ignored",
    ))
    .stderr(predicate::str::contains("Invalid package path"));
}

#[test]
fn test_valid_config_reaches_package_validation() {
    run_with_config("[main]\nPackageName = Foo\nOutputPath = graph.png\nVisualizerPath = mmdc\n")
        .code(1)
        .stderr(predicate::str::contains("Invalid package path"))
        .stderr(predicate::str::contains("Missing config key").not());
}
