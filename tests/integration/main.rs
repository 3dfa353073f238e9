//! Integration tests for Flowscribe
//!
//! These tests run the whole pipeline on a checked-in diagram and drive the
//! CLI binary.

use std::path::PathBuf;
use std::process::Command;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn countdown_pseudocode() -> Vec<&'static str> {
    vec![
        "begin program",
        "perform: set n to 10",
        "if n > 0:",
        "    [true branch]",
        "    perform: print n",
        "    perform: n = n - 1",
        "    [false branch]",
        "    perform: print \"liftoff\"",
        "    end program",
    ]
}

/// The loop-back connector only has a target point; it must land on the decision.
#[test]
fn test_fixture_extraction() {
    let extraction = flowscribe_core::extract_file(fixture("countdown.drawio")).unwrap();
    let graph = &extraction.graph;

    assert_eq!(graph.node_count(), 7);
    assert_eq!(graph.edge_count(), 7);
    assert!(extraction.diagnostics.is_empty());

    let back_edge = graph.edges_from("dec").next().unwrap();
    assert_eq!(back_edge.target, "check");
    assert_eq!(graph.edges_to("check").count(), 2);
}

#[test]
fn test_fixture_translation() {
    let translation = flowscribe_core::translate_file(fixture("countdown.drawio")).unwrap();
    assert_eq!(translation.lines, countdown_pseudocode());
}

#[test]
fn test_translation_is_deterministic() {
    let xml = std::fs::read_to_string(fixture("countdown.drawio")).unwrap();
    let first = flowscribe_core::translate(&xml).unwrap();
    let second = flowscribe_core::translate(&xml).unwrap();
    assert_eq!(first.pseudocode(), second.pseudocode());
}

#[test]
fn test_cli_translate() {
    let output = Command::new(env!("CARGO_BIN_EXE_flowscribe"))
        .arg("translate")
        .arg(fixture("countdown.drawio"))
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, countdown_pseudocode());
}

#[test]
fn test_cli_inspect() {
    let output = Command::new(env!("CARGO_BIN_EXE_flowscribe"))
        .arg("inspect")
        .arg(fixture("countdown.drawio"))
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("--- Graph Structure ---\n"));
    assert!(stdout.contains("check: n > 0 (if)\n"));
    assert!(stdout.contains("check -> done [condition: false]\n"));
}

#[test]
fn test_cli_generate_local() {
    let output = Command::new(env!("CARGO_BIN_EXE_flowscribe"))
        .args(["generate", "--provider", "local"])
        .arg(fixture("countdown.drawio"))
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("def main():"));
    assert!(stdout.contains("    if n > 0:\n        step(\"print n\")"));
}

#[test]
fn test_cli_rejects_two_start_nodes() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("two_starts.drawio");
    std::fs::write(
        &path,
        r#"<mxGraphModel><root>
<mxCell id="a" value="Start" style="rounded=1;" vertex="1" />
<mxCell id="b" value="Start" style="rounded=1;" vertex="1" />
</root></mxGraphModel>"#,
    )
    .unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_flowscribe"))
        .arg("translate")
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("multiple start nodes detected"));
}
