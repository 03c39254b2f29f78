use std::path::Path;

use assert_cmd::Command;
use wgraph::{
    GraphAlgo, WeightedGraph,
    client::{CommandLineConfig, run_command},
};

fn prepare_graph(path: &Path) {
    let mut graph = WeightedGraph::new();
    for key in 0..6 {
        graph.add_vertex(key);
    }
    for key in 0..5 {
        graph.connect(key, key + 1, 1.0);
    }
    graph.connect(0, 3, 1.0);
    graph.connect(0, 5, 5.0);
    graph.connect(0, 2, 3.0);
    assert!(GraphAlgo::from_graph(graph).save(path));
}

fn stdout_of(args: &[&str]) -> String {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_wgraph"));
    cmd.args(args);
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).expect("utf8")
}

#[test]
fn test_cli_exits_with_success_on_help() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_wgraph"));
    cmd.arg("--help");
    cmd.assert().success();
}

#[test]
fn test_cli_status_on_empty_graph() {
    let out = stdout_of(&["--command", "status"]);
    assert_eq!(out.trim(), "vertices=0 edges=0 modifications=0");
}

#[test]
fn test_cli_queries_saved_graph() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("graph.jsonl");
    prepare_graph(&path);
    let path = path.to_str().expect("path");

    assert_eq!(
        stdout_of(&["--graph", path, "status"]).trim(),
        "vertices=6 edges=8 modifications=14"
    );
    assert_eq!(
        stdout_of(&["--graph", path, "connected"]).trim(),
        "connected=true"
    );
    assert_eq!(
        stdout_of(&["--graph", path, "distance", "0", "5"]).trim(),
        "distance=3"
    );
    assert_eq!(
        stdout_of(&["--graph", path, "--command", "path", "0", "5"]).trim(),
        "path=0,3,4,5"
    );
    assert_eq!(
        stdout_of(&["--graph", path, "path", "0", "9"]).trim(),
        "path=none"
    );
}

#[test]
fn test_cli_rejects_unknown_flag() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_wgraph"));
    cmd.arg("--bogus");
    cmd.assert().code(2);
}

#[test]
fn test_cli_missing_graph_file_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("missing.jsonl");
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_wgraph"));
    cmd.args(["--graph", missing.to_str().expect("path"), "status"]);
    cmd.assert().code(2);
}

#[test]
fn test_cli_bad_command_arguments_fail() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_wgraph"));
    cmd.args(["distance", "0"]);
    cmd.assert().code(1);

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_wgraph"));
    cmd.args(["frobnicate"]);
    cmd.assert().code(1);
}

#[test]
fn test_command_line_config_parsing() {
    let config =
        CommandLineConfig::from_args(&["wgraph", "--graph", "g.jsonl", "path", "1", "2"])
            .expect("config");
    assert_eq!(config.graph.as_deref(), Some("g.jsonl"));
    assert_eq!(config.command, "path");
    assert_eq!(config.command_args, vec!["1", "2"]);

    let defaults = CommandLineConfig::from_args(&["wgraph"]).expect("config");
    assert_eq!(defaults.graph, None);
    assert_eq!(defaults.command, "status");

    assert!(CommandLineConfig::from_args(&["wgraph", "--graph"]).is_err());
}

#[test]
fn test_help_flag_only_counts_before_command() {
    assert!(CommandLineConfig::wants_help(&["wgraph", "--help"]));
    assert!(CommandLineConfig::wants_help(&["wgraph", "--graph", "g.jsonl", "-h"]));
    assert!(!CommandLineConfig::wants_help(&["wgraph", "--graph", "-h"]));
    assert!(!CommandLineConfig::wants_help(&["wgraph", "path", "-h", "2"]));
    assert!(!CommandLineConfig::wants_help(&["wgraph", "--command", "status", "--help"]));
    assert!(!CommandLineConfig::wants_help(&["wgraph"]));
}

#[test]
fn test_cli_help_after_command_is_a_command_argument() {
    let out = stdout_of(&["--command", "status", "--help"]);
    assert_eq!(out.trim(), "vertices=0 edges=0 modifications=0");

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_wgraph"));
    cmd.args(["path", "-h"]);
    cmd.assert().code(1);
}

#[test]
fn test_run_command_reports_unreachable_distance() {
    let mut graph = WeightedGraph::new();
    graph.add_vertex(1);
    graph.add_vertex(2);
    let algo = GraphAlgo::from_graph(graph);
    let config = CommandLineConfig {
        graph: None,
        command: "distance".into(),
        command_args: vec!["1".into(), "2".into()],
    };
    assert_eq!(run_command(&algo, &config).expect("run"), "distance=none");
}
