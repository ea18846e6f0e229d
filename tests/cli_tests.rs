//! Integration tests for the pathline CLI
//!
//! These tests run the pathline binary against graph files written to a
//! temporary directory.

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::tempdir;

/// Get a Command for pathline
fn pathline() -> Command {
    cargo_bin_cmd!("pathline")
}

fn write_graph(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

const SQUARE: &str = r#"
nodes = [0, 1, 2, 3]
edges = [
  { from = 0, to = 1 },
  { from = 1, to = 2 },
  { from = 2, to = 3 },
  { from = 0, to = 3 },
]
"#;

const WEIGHTED_CHAIN: &str = r#"
nodes = [0, 1, 2, 3]
edges = [
  { from = 0, to = 1, weight = 10 },
  { from = 1, to = 2, weight = 1 },
]
"#;

const NEGATIVE_CYCLE: &str = r#"
nodes = [0, 1, 2]
edges = [
  { from = 0, to = 1, weight = 1 },
  { from = 1, to = 2, weight = 1 },
  { from = 1, to = 0, weight = -5 },
]
"#;

// ============================================================================
// Help and Version tests
// ============================================================================

#[test]
fn test_help_flag() {
    pathline()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: pathline"))
        .stdout(predicate::str::contains("distances"))
        .stdout(predicate::str::contains("line"));
}

#[test]
fn test_version_flag() {
    pathline()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pathline"));
}

#[test]
fn test_no_command_prints_hint() {
    pathline()
        .assert()
        .success()
        .stdout(predicate::str::contains("pathline --help"));
}

// ============================================================================
// Distances command tests
// ============================================================================

#[test]
fn test_distances_unweighted_uses_bfs() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "square.toml", SQUARE);

    pathline()
        .current_dir(dir.path())
        .arg("distances")
        .arg(&graph)
        .args(["--source", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Distances from 0 (bfs):"))
        .stdout(predicate::str::contains("1: 1\n2: 2\n3: 1\n"));
}

#[test]
fn test_distances_weighted_json() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "chain.toml", WEIGHTED_CHAIN);

    let output = pathline()
        .current_dir(dir.path())
        .args(["--format", "json", "distances"])
        .arg(&graph)
        .args(["--source", "0"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["algorithm"], "dijkstra");
    assert_eq!(json["negative_cycle"], false);
    assert_eq!(json["distances"][1]["distance"], 10);
    assert_eq!(json["distances"][2]["distance"], 11);
    assert!(json["distances"][3]["distance"].is_null());
}

#[test]
fn test_distances_reports_unreachable() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "chain.toml", WEIGHTED_CHAIN);

    pathline()
        .current_dir(dir.path())
        .arg("distances")
        .arg(&graph)
        .args(["--source", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0: unreachable"))
        .stdout(predicate::str::contains("2: 1"));
}

#[test]
fn test_distances_negative_cycle_notice() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "cycle.toml", NEGATIVE_CYCLE);

    pathline()
        .current_dir(dir.path())
        .arg("distances")
        .arg(&graph)
        .args(["--source", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(bellman-ford)"))
        .stdout(predicate::str::contains("negative cycle detected"));
}

#[test]
fn test_distances_json_graph_file() {
    let dir = tempdir().unwrap();
    let graph = write_graph(
        dir.path(),
        "graph.json",
        r#"{"nodes": [0, 1, 2], "edges": [{"from": 0, "to": 1, "weight": -1}, {"from": 1, "to": 2, "weight": 1}]}"#,
    );

    pathline()
        .current_dir(dir.path())
        .arg("distances")
        .arg(&graph)
        .args(["--source", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1: -1\n2: 0\n"))
        .stdout(predicate::str::contains("negative cycle").not());
}

#[test]
fn test_distances_algorithm_override() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "chain.toml", WEIGHTED_CHAIN);

    pathline()
        .current_dir(dir.path())
        .arg("distances")
        .arg(&graph)
        .args(["--source", "0", "--algorithm", "bfs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(bfs)"))
        .stdout(predicate::str::contains("2: 2"));
}

#[test]
fn test_distances_unknown_algorithm_is_usage_error() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "chain.toml", WEIGHTED_CHAIN);

    pathline()
        .current_dir(dir.path())
        .arg("distances")
        .arg(&graph)
        .args(["--source", "0", "--algorithm", "astar"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown algorithm"));
}

#[test]
fn test_distances_config_default_algorithm() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "chain.toml", WEIGHTED_CHAIN);
    fs::write(
        dir.path().join("pathline.toml"),
        "[graph]\ndefault_algorithm = \"bellman-ford\"\n",
    )
    .unwrap();

    pathline()
        .current_dir(dir.path())
        .arg("distances")
        .arg(&graph)
        .args(["--source", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(bellman-ford)"));
}

#[test]
fn test_distances_dijkstra_flag_refused_on_negative_weights() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "cycle.toml", NEGATIVE_CYCLE);

    pathline()
        .current_dir(dir.path())
        .timeout(Duration::from_secs(10))
        .arg("distances")
        .arg(&graph)
        .args(["--source", "0", "--algorithm", "dijkstra"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("dijkstra cannot run"));
}

#[test]
fn test_distances_config_dijkstra_refused_on_negative_weights() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "cycle.toml", NEGATIVE_CYCLE);
    let config = dir.path().join("dijkstra.toml");
    fs::write(&config, "[graph]\ndefault_algorithm = \"dijkstra\"\n").unwrap();

    let output = pathline()
        .current_dir(dir.path())
        .timeout(Duration::from_secs(10))
        .arg("--config")
        .arg(&config)
        .args(["--format", "json", "distances"])
        .arg(&graph)
        .args(["--source", "0"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "usage_error");
}

#[test]
fn test_distances_config_dijkstra_still_runs_on_non_negative() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "chain.toml", WEIGHTED_CHAIN);
    fs::write(
        dir.path().join("pathline.toml"),
        "[graph]\ndefault_algorithm = \"dijkstra\"\n",
    )
    .unwrap();

    pathline()
        .current_dir(dir.path())
        .arg("distances")
        .arg(&graph)
        .args(["--source", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(dijkstra)"))
        .stdout(predicate::str::contains("2: 11"));
}

#[test]
fn test_distances_oversized_node_id_is_data_error() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "big.toml", "nodes = [0, 100000000000000]\n");

    pathline()
        .current_dir(dir.path())
        .timeout(Duration::from_secs(10))
        .arg("distances")
        .arg(&graph)
        .args(["--source", "0"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("highest supported identifier"));
}

#[test]
fn test_distances_source_outside_graph() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "square.toml", SQUARE);

    pathline()
        .current_dir(dir.path())
        .arg("distances")
        .arg(&graph)
        .args(["--source", "9"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid source"));
}

#[test]
fn test_distances_dangling_edge_json_error() {
    let dir = tempdir().unwrap();
    let graph = write_graph(
        dir.path(),
        "bad.toml",
        "nodes = [0, 1]\nedges = [{ from = 0, to = 5 }]\n",
    );

    let output = pathline()
        .current_dir(dir.path())
        .args(["--format", "json", "distances"])
        .arg(&graph)
        .args(["--source", "0"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "invalid_graph");
    assert_eq!(json["error"]["code"], 3);
}

#[test]
fn test_distances_missing_file() {
    let dir = tempdir().unwrap();

    pathline()
        .current_dir(dir.path())
        .args(["distances", "nope.toml", "--source", "0"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("IO error"));
}

// ============================================================================
// Line command tests
// ============================================================================

#[test]
fn test_line_with_incompatible_pair() {
    let dir = tempdir().unwrap();

    pathline()
        .current_dir(dir.path())
        .args(["line", "-i", "0", "-i", "1", "-i", "2", "--incompatible", "0,1"])
        .assert()
        .success()
        .stdout("0 2 1\n1 2 0\n2 line(s)\n");
}

#[test]
fn test_line_two_compatible_quiet() {
    let dir = tempdir().unwrap();

    pathline()
        .current_dir(dir.path())
        .args(["--quiet", "line", "--item", "0", "--item", "1"])
        .assert()
        .success()
        .stdout("0 1\n1 0\n");
}

#[test]
fn test_line_without_items_is_empty() {
    let dir = tempdir().unwrap();

    pathline()
        .current_dir(dir.path())
        .arg("line")
        .assert()
        .success()
        .stdout("0 line(s)\n");
}

#[test]
fn test_line_json() {
    let dir = tempdir().unwrap();

    let output = pathline()
        .current_dir(dir.path())
        .args([
            "--format",
            "json",
            "line",
            "-i",
            "0",
            "-i",
            "1",
            "-i",
            "2",
            "-i",
            "3",
            "-x",
            "0,1",
            "-x",
            "0,2",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["count"], 4);
    assert_eq!(
        json["lines"],
        serde_json::json!([[0, 3, 1, 2], [0, 3, 2, 1], [1, 2, 3, 0], [2, 1, 3, 0]])
    );
}

#[test]
fn test_line_negative_items() {
    let dir = tempdir().unwrap();

    pathline()
        .current_dir(dir.path())
        .args(["--quiet", "line", "-i", "-3", "-i", "7", "-x", "-3,7"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_line_bad_pair_is_usage_error() {
    let dir = tempdir().unwrap();

    pathline()
        .current_dir(dir.path())
        .args(["line", "-i", "0", "-x", "0"])
        .assert()
        .code(2);
}

#[test]
fn test_line_respects_max_items() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("limits.toml");
    fs::write(&config, "[lineup]\nmax_items = 2\n").unwrap();

    pathline()
        .current_dir(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["line", "-i", "0", "-i", "1", "-i", "2"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("too many items"));
}
