//! Integration tests for the pathviz CLI
//!
//! These tests run the pathviz binary and verify exit codes, output
//! formats and the end-to-end shortest-path behavior.

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use tempfile::tempdir;

/// Get a Command for pathviz
fn pathviz() -> Command {
    cargo_bin_cmd!("pathviz")
}

/// Write graph text into a temp dir and return (dir guard, file path)
fn graph_file(text: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("graph.txt");
    std::fs::write(&path, text).unwrap();
    (dir, path)
}

const CHAIN: &str = "3 2\n1 2 3\n2 3 1\n";

// ============================================================================
// Help and Version tests
// ============================================================================

#[test]
fn test_help_flag() {
    pathviz()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: pathviz"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("path"))
        .stdout(predicate::str::contains("trace"))
        .stdout(predicate::str::contains("random"));
}

#[test]
fn test_version_flag() {
    pathviz()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pathviz"));
}

#[test]
fn test_subcommand_help() {
    pathviz()
        .args(["trace", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("step trace"));
}

// ============================================================================
// Exit code tests
// ============================================================================

#[test]
fn test_unknown_format_exit_code_2() {
    let (_dir, file) = graph_file(CHAIN);
    pathviz()
        .args(["--format", "records", "show"])
        .arg(&file)
        .assert()
        .code(2);
}

#[test]
fn test_unknown_argument_json_usage_error() {
    pathviz()
        .args(["--format", "json", "show", "--bogus-flag", "x"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"usage_error\""));
}

#[test]
fn test_unknown_command_exit_code_2() {
    pathviz().arg("frobnicate").assert().code(2);
}

#[test]
fn test_missing_file_exit_code_1() {
    pathviz()
        .args(["show", "/no/such/graph.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn test_malformed_graph_exit_code_3() {
    let (_dir, file) = graph_file("3\n");
    pathviz()
        .arg("show")
        .arg(&file)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid graph text at line 1"));
}

#[test]
fn test_rejected_edge_exit_code_3() {
    let (_dir, file) = graph_file("2 1\n1 2 0\n");
    pathviz()
        .args(["--format", "json", "show"])
        .arg(&file)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"invalid_weight\""));
}

#[test]
fn test_unknown_node_exit_code_3() {
    let (_dir, file) = graph_file(CHAIN);
    pathviz()
        .args(["--format", "json", "path"])
        .arg(&file)
        .args(["0", "9"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"invalid_node\""));
}

#[test]
fn test_malformed_node_ref_exit_code_2() {
    let (_dir, file) = graph_file(CHAIN);
    pathviz()
        .arg("path")
        .arg(&file)
        .args(["0", "2x"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown node reference"));
}

// ============================================================================
// path command
// ============================================================================

#[test]
fn test_path_chain_human() {
    let (_dir, file) = graph_file(CHAIN);
    pathviz()
        .arg("path")
        .arg(&file)
        .args(["0", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("path: A -> B -> C"))
        .stdout(predicate::str::contains("distance: 4"));
}

#[test]
fn test_path_accepts_node_names() {
    let (_dir, file) = graph_file(CHAIN);
    pathviz()
        .arg("path")
        .arg(&file)
        .args(["a", "C"])
        .assert()
        .success()
        .stdout(predicate::str::contains("distance: 4"));
}

#[test]
fn test_path_reverse_direction_undirected() {
    let (_dir, file) = graph_file(CHAIN);
    pathviz()
        .arg("path")
        .arg(&file)
        .args(["2", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("path: C -> B -> A"))
        .stdout(predicate::str::contains("distance: 4"));
}

#[test]
fn test_path_json() {
    let (_dir, file) = graph_file(CHAIN);
    let output = pathviz()
        .args(["--format", "json", "path"])
        .arg(&file)
        .args(["0", "2"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["found"], true);
    assert_eq!(json["distance"], 4);
    assert_eq!(json["path"], serde_json::json!([0, 1, 2]));
    assert_eq!(json["names"], serde_json::json!(["A", "B", "C"]));
}

#[test]
fn test_path_unreachable_is_success() {
    let (_dir, file) = graph_file("4 2\n1 2 5\n3 4 2\n");
    pathviz()
        .arg("path")
        .arg(&file)
        .args(["0", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no path from A (0) to D (3)"));

    let output = pathviz()
        .args(["--format", "json", "path"])
        .arg(&file)
        .args(["0", "3"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["found"], false);
    assert_eq!(json["distance"], serde_json::Value::Null);
}

#[test]
fn test_path_source_equals_target() {
    let (_dir, file) = graph_file(CHAIN);
    pathviz()
        .arg("path")
        .arg(&file)
        .args(["1", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("path: B"))
        .stdout(predicate::str::contains("distance: 0"));
}

// ============================================================================
// trace command
// ============================================================================

#[test]
fn test_trace_human_step_sequence() {
    let (_dir, file) = graph_file(CHAIN);
    pathviz()
        .arg("trace")
        .arg(&file)
        .args(["0", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("initialize source=A"))
        .stdout(predicate::str::contains("visit A distance=0"))
        .stdout(predicate::str::contains("update B via A distance=3"))
        .stdout(predicate::str::contains("complete target=C distance=4"))
        .stdout(predicate::str::contains("path: A -> B -> C"));
}

#[test]
fn test_trace_json_matches_path_result() {
    let (_dir, file) = graph_file(CHAIN);
    let output = pathviz()
        .args(["--format", "json", "trace"])
        .arg(&file)
        .args(["0", "2"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let steps = json["steps"].as_array().unwrap();
    assert_eq!(steps.first().unwrap()["step"], "initialize");
    assert_eq!(steps.last().unwrap()["step"], "complete");
    assert_eq!(steps.last().unwrap()["final_distance"], 4);
    assert_eq!(json["result"]["distance"], 4);
    assert_eq!(json["result"]["path"], serde_json::json!([0, 1, 2]));
}

#[test]
fn test_trace_unreachable() {
    let (_dir, file) = graph_file("4 2\n1 2 5\n3 4 2\n");
    pathviz()
        .arg("trace")
        .arg(&file)
        .args(["0", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("complete target=D unreachable"))
        .stdout(predicate::str::contains("no path from A (0) to D (3)"));
}

// ============================================================================
// random command
// ============================================================================

#[test]
fn test_random_seeded_is_deterministic() {
    let args = ["random", "--nodes", "9", "--density", "40", "--seed", "11"];
    let first = pathviz().args(args).output().unwrap();
    let second = pathviz().args(args).output().unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_random_output_is_loadable() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("random.txt");
    pathviz()
        .args(["random", "--nodes", "6", "--seed", "3", "--output"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("wrote 6 nodes"));

    pathviz()
        .arg("path")
        .arg(&file)
        .args(["0", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("distance:"));
}

#[test]
fn test_random_density_zero_chain() {
    let output = pathviz()
        .args(["random", "--nodes", "5", "--density", "0", "--seed", "1"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let text = String::from_utf8_lossy(&output.stdout);
    assert!(text.starts_with("5 4\n"));
}

#[test]
fn test_random_invalid_density_exit_code_2() {
    pathviz()
        .args(["random", "--density", "150"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid density"));
}

// ============================================================================
// show command
// ============================================================================

#[test]
fn test_show_human_adjacency() {
    let (_dir, file) = graph_file(CHAIN);
    pathviz()
        .arg("show")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("nodes: 3"))
        .stdout(predicate::str::contains("edges: 2"))
        .stdout(predicate::str::contains("B (1): A(3), C(1)"));
}

#[test]
fn test_show_json() {
    let (_dir, file) = graph_file(CHAIN);
    let output = pathviz()
        .args(["--format", "json", "show"])
        .arg(&file)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["nodes"], 3);
    assert_eq!(
        json["edges"],
        serde_json::json!([
            {"a": 0, "b": 1, "weight": 3},
            {"a": 1, "b": 2, "weight": 1}
        ])
    );
}

// ============================================================================
// config file
// ============================================================================

#[test]
fn test_config_sets_random_defaults() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("pathviz.toml");
    std::fs::write(&config, "nodes = 4\ndensity = 0\n").unwrap();

    let output = pathviz()
        .args(["random", "--seed", "2", "--config"])
        .arg(&config)
        .output()
        .unwrap();
    assert!(output.status.success());
    let text = String::from_utf8_lossy(&output.stdout);
    assert!(text.starts_with("4 3\n"));
}

#[test]
fn test_bad_config_exit_code_1() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("pathviz.toml");
    std::fs::write(&config, "nodes = \"many\"\n").unwrap();

    pathviz()
        .args(["random", "--config"])
        .arg(&config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML error"));
}
