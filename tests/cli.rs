use std::path::PathBuf;
use std::process::{Command, Output};

fn data(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("data").join(name)
}

fn max_flow(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_max-flow")).args(args).env_remove("RUST_LOG").output().unwrap()
}

#[test]
fn prints_total_and_edge_flows() {
    let output = max_flow(&[data("clrs.txt").to_str().unwrap()]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("maximum flow: 23"));
    assert!(stdout.contains("  0 -> 1: 12/16"));
    assert!(stdout.contains("  3 -> 5: 19/20"));
}

#[test]
fn prints_trace_and_cut() {
    let output = max_flow(&[data("clrs.txt").to_str().unwrap(), "--trace", "--cut"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("1: 0 -> 1 -> 3 -> 5 (path flow 12, total 12)"));
    assert!(stdout.contains("3: 0 -> 2 -> 4 -> 3 -> 5 (path flow 7, total 23)"));
    assert!(stdout.contains("4: no augmenting path, total 23"));
    assert!(stdout.contains("minimum cut source side: {0, 1, 2, 4}"));
}

#[test]
fn json_input_and_output() {
    let output = max_flow(&[data("clrs.json").to_str().unwrap(), "--json"]);
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["flow"], 23);
    assert_eq!(report["status"], "optimal");
    assert_eq!(report["trace"].as_array().unwrap().len(), 4);
    assert_eq!(report["trace"][0]["path"], serde_json::json!([[0, 1], [1, 3], [3, 5]]));
    assert_eq!(report["edges"].as_array().unwrap().len(), 9);
}

#[test]
fn terminals_can_be_overridden() {
    let output = max_flow(&[data("clrs.txt").to_str().unwrap(), "--source", "1", "--sink", "3"]);
    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout).unwrap().contains("maximum flow: 19"));
}

#[test]
fn invalid_edge_exits_with_failure() {
    let output = max_flow(&[data("bad_vertex.txt").to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(String::from_utf8(output.stderr).unwrap().contains("node 9 is out of range"));
}

#[test]
fn missing_file_exits_with_failure() {
    let output = max_flow(&[data("missing.txt").to_str().unwrap()]);
    assert!(!output.status.success());
}
