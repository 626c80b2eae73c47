//! Integration tests for the sdrf2dot CLI.
//!
//! Runs the built binary against the fixture in tests/fixtures and temp files.

use std::path::{Path, PathBuf};
use std::process::Command;

const SDRF2DOT: &str = env!("CARGO_BIN_EXE_sdrf2dot");

fn fixture() -> PathBuf {
  Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/two_samples.sdrf.txt")
}

fn run_sdrf2dot(args: &[&str]) -> std::process::Output {
  run_sdrf2dot_with_env(args, &[])
}

/// Run sdrf2dot with extra env vars. Format and Graphviz overrides from the
/// caller's environment are cleared so flags are what the test sees.
fn run_sdrf2dot_with_env(args: &[&str], env_add: &[(&str, &str)]) -> std::process::Output {
  let mut cmd = Command::new(SDRF2DOT);
  cmd
    .args(args)
    .env_remove("SDRF_GRAPH_FORMAT")
    .env_remove("SDRF_GRAPH_GRAPHVIZ")
    .env("RUST_LOG", "warn");
  for (k, v) in env_add {
    cmd.env(k, v);
  }
  cmd.output().expect("run sdrf2dot")
}

fn stdout(out: &std::process::Output) -> String {
  String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr(out: &std::process::Output) -> String {
  String::from_utf8_lossy(&out.stderr).into_owned()
}

#[test]
fn prints_usage_without_args() {
  let out = run_sdrf2dot(&[]);
  assert!(!out.status.success());
  let err = stderr(&out);
  assert!(err.contains("Usage") || err.contains("usage"), "stderr: {}", err);
}

#[test]
fn exits_1_for_missing_file() {
  let out = run_sdrf2dot(&["/nonexistent/study.sdrf.txt"]);
  assert_eq!(out.status.code(), Some(1));
  assert!(stderr(&out).contains("Error"), "stderr: {}", stderr(&out));
  assert!(out.stdout.is_empty());
}

#[test]
fn exits_1_for_unsupported_extension() {
  let dir = tempfile::tempdir().expect("temp dir");
  let path = dir.path().join("study.ods");
  std::fs::write(&path, b"whatever").expect("write input");
  let out = run_sdrf2dot(&[path.to_str().expect("path")]);
  assert_eq!(out.status.code(), Some(1));
  assert!(stderr(&out).contains("unsupported"), "stderr: {}", stderr(&out));
}

#[test]
fn writes_dot_to_stdout() {
  let out = run_sdrf2dot(&[fixture().to_str().expect("path")]);
  assert!(out.status.success(), "stderr: {}", stderr(&out));
  let dot = stdout(&out);
  assert!(dot.starts_with("digraph two_samples_sdrf {\n"));
  assert!(dot.ends_with("}\n"));
  assert!(dot.contains(
    "  \"Source|src1\" [shape = box, label=\"Source|src1\\n(organism:Homo sapiens)\"] ;\n"
  ));
  assert!(dot.contains("  \"Sample|S1\" [shape = box, URL=\"http://example.org/S1\"] ;\n"));
  assert!(dot.contains("  \"Extract|E2\" [shape = box, label=\"Extract|E2\\n(Array:A-AFFY-1)\"] ;\n"));
  assert!(dot.contains(
    "  \"Source|src1\" -> \"growth\\n(temperature:37C)\\nSource|src1\" [arrowhead = none] ;\n"
  ));
  assert!(dot.contains("  \"Extract|E1\" -> \"File|raw1.cel\" ;\n"));
  assert!(!dot.contains("rankdir"));
}

#[test]
fn output_flag_writes_file() {
  let dir = tempfile::tempdir().expect("temp dir");
  let target = dir.path().join("study.dot");
  let out = run_sdrf2dot(&[
    "-o",
    target.to_str().expect("path"),
    fixture().to_str().expect("path"),
  ]);
  assert!(out.status.success(), "stderr: {}", stderr(&out));
  assert!(out.stdout.is_empty());
  let written = std::fs::read_to_string(&target).expect("read output");
  assert!(written.contains("\"Sample|S2\""));
}

#[test]
fn no_edge_labels_draws_direct_edges() {
  let out = run_sdrf2dot(&["--no-edge-labels", fixture().to_str().expect("path")]);
  assert!(out.status.success(), "stderr: {}", stderr(&out));
  let dot = stdout(&out);
  assert!(dot.contains("  \"Source|src1\" -> \"Sample|S1\" ;\n"));
  assert!(dot.contains("  \"Sample|S2\" -> \"Extract|E2\" ;\n"));
  assert!(!dot.contains("shape = none"));
}

#[test]
fn layout_lr_sets_rankdir() {
  let out = run_sdrf2dot(&["--layout", "lr", fixture().to_str().expect("path")]);
  assert!(out.status.success(), "stderr: {}", stderr(&out));
  assert!(stdout(&out).contains("  graph [rankdir = LR];\n"));
}

#[test]
fn sheet_filter_mismatch_fails() {
  let out = run_sdrf2dot(&["--sheet", "nothing-like-this", fixture().to_str().expect("path")]);
  assert_eq!(out.status.code(), Some(1));
  assert!(stderr(&out).contains("no sheet name contains"), "stderr: {}", stderr(&out));
}

#[test]
fn invalid_format_fails() {
  let out = run_sdrf2dot(&["--format", "../svg", fixture().to_str().expect("path")]);
  assert_eq!(out.status.code(), Some(1));
  assert!(stderr(&out).contains("invalid output format"), "stderr: {}", stderr(&out));
}

#[cfg(unix)]
fn fake_graphviz(dir: &Path) -> PathBuf {
  use std::os::unix::fs::PermissionsExt;
  let path = dir.join("fake-dot");
  std::fs::write(&path, "#!/bin/sh\ncat >/dev/null\necho \"<svg format=$1/>\"\n").expect("write script");
  std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).expect("chmod");
  path
}

#[cfg(unix)]
#[test]
fn rendered_format_goes_through_graphviz() {
  let dir = tempfile::tempdir().expect("temp dir");
  let graphviz = fake_graphviz(dir.path());
  let out = run_sdrf2dot(&[
    "--format",
    "svg",
    "--graphviz",
    graphviz.to_str().expect("path"),
    fixture().to_str().expect("path"),
  ]);
  assert!(out.status.success(), "stderr: {}", stderr(&out));
  assert_eq!(stdout(&out).trim(), "<svg format=-Tsvg/>");
}

#[cfg(unix)]
#[test]
fn env_vars_override_flags() {
  let dir = tempfile::tempdir().expect("temp dir");
  let graphviz = fake_graphviz(dir.path());
  let out = run_sdrf2dot_with_env(
    &["--format", "dot", fixture().to_str().expect("path")],
    &[
      ("SDRF_GRAPH_FORMAT", "png"),
      ("SDRF_GRAPH_GRAPHVIZ", graphviz.to_str().expect("path")),
    ],
  );
  assert!(out.status.success(), "stderr: {}", stderr(&out));
  assert_eq!(stdout(&out).trim(), "<svg format=-Tpng/>");
}

#[test]
fn failing_graphviz_exits_1() {
  let dir = tempfile::tempdir().expect("temp dir");
  let missing = dir.path().join("no-such-dot");
  let out = run_sdrf2dot(&[
    "--format",
    "svg",
    "--graphviz",
    missing.to_str().expect("path"),
    fixture().to_str().expect("path"),
  ]);
  assert_eq!(out.status.code(), Some(1));
  assert!(stderr(&out).contains("render failed"), "stderr: {}", stderr(&out));
}
