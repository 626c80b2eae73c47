//! Tests for `row_walker`.

use crate::classifier::classify_header;
use crate::row_walker::{RowState, RowSummary, walk_row};
use crate::types::{ColumnTag, GraphModel};

fn strings(cells: &[&str]) -> Vec<String> {
  cells.iter().map(|c| c.to_string()).collect()
}

fn walk(header: &[&str], rows: &[&[&str]]) -> (GraphModel, Vec<RowSummary>) {
  let columns = classify_header(&strings(header));
  let mut model = GraphModel::new();
  let summaries: Vec<RowSummary> = rows
    .iter()
    .map(|r| walk_row(&columns, &strings(r), &mut model))
    .collect();
  (model, summaries)
}

fn label_of<'a>(model: &'a GraphModel, from: &str, to: &str) -> Option<&'a str> {
  model
    .adjacency()
    .get(from)
    .and_then(|t| t.get(to))
    .map(String::as_str)
}

#[test]
fn duplicate_pair_takes_last_row_label() {
  let (model, summaries) = walk(
    &["Sample Name", "Protocol REF", "Parameter Value [duration]", "Extract Name"],
    &[
      &["S1", "Extraction", "30min", "E1"],
      &["S1", "Extraction", "45min", "E1"],
    ],
  );
  let ids: Vec<&str> = model.node_ids().into_iter().collect();
  assert_eq!(ids, vec!["Sample|S1", "Extract|E1"]);
  assert_eq!(
    label_of(&model, "Sample|S1", "Extract|E1"),
    Some("Extraction\n(duration:45min)")
  );
  assert_eq!(model.edge_count(), 1);
  assert!(summaries.iter().all(|s| s.edges == 1 && !s.dangling));
}

#[test]
fn array_design_annotates_without_edge() {
  let (model, _) = walk(&["Hybridization Name", "Array Design REF"], &[&["H1", "ArrayX"]]);
  let ids: Vec<&str> = model.node_ids().into_iter().collect();
  assert_eq!(ids, vec!["Hybridization|H1"]);
  assert_eq!(model.edge_count(), 0);
  assert!(model.label("Hybridization|H1").unwrap().contains("(Array:ArrayX)"));
}

#[test]
fn array_design_fragment_added_once_per_value() {
  let (model, _) = walk(
    &["Hybridization Name", "Array Design REF", "Array Design File"],
    &[&["H1", "A1", "A1"], &["H1", "A1", "A2"]],
  );
  assert_eq!(
    model.label("Hybridization|H1"),
    Some("Hybridization|H1\n(Array:A1)\n(Array:A2)")
  );
}

#[test]
fn link_after_node_without_chain_attaches_to_node() {
  let (model, _) = walk(
    &["Array Data File", "Comment [ArrayExpress FTP file]"],
    &[&["raw.cel", "ftp://example.org/raw.cel"]],
  );
  assert_eq!(model.url("File|raw.cel"), Some("ftp://example.org/raw.cel"));
}

#[test]
fn link_inside_chain_attaches_to_edge_label() {
  let (model, _) = walk(
    &["Sample Name", "Protocol REF", "Comment [URI]", "Extract Name"],
    &[&["S1", "P-1", "http://proto/1", "E1"]],
  );
  assert_eq!(model.url("P-1"), Some("http://proto/1"));
  assert_eq!(model.url("Sample|S1"), None);
}

#[test]
fn parameter_after_link_reassociates_url() {
  let (model, _) = walk(
    &[
      "Sample Name",
      "Protocol REF",
      "Comment [URI]",
      "Parameter Value [temp]",
      "Extract Name",
    ],
    &[&["S1", "P-1", "http://proto/1", "37C", "E1"]],
  );
  assert_eq!(model.url("P-1\n(temp:37C)"), Some("http://proto/1"));
  assert_eq!(
    label_of(&model, "Sample|S1", "Extract|E1"),
    Some("P-1\n(temp:37C)")
  );
}

#[test]
fn parameter_without_protocol_is_noop() {
  let (model, summaries) = walk(
    &["Sample Name", "Parameter Value [x]", "Extract Name"],
    &[&["S1", "1", "E1"]],
  );
  assert_eq!(label_of(&model, "Sample|S1", "Extract|E1"), Some(""));
  assert!(!summaries[0].dangling);
}

#[test]
fn characteristic_first_value_wins() {
  let (model, _) = walk(
    &["Source Name", "Characteristics [organism]", "Characteristics [organism]"],
    &[&["src", "human", "mouse"]],
  );
  assert_eq!(model.label("Source|src"), Some("Source|src\n(organism:human)"));
}

#[test]
fn characteristic_before_node_is_skipped() {
  let (model, _) = walk(
    &["Characteristics [organism]", "Source Name"],
    &[&["human", "src"]],
  );
  assert_eq!(model.label("Source|src"), None);
}

#[test]
fn multi_protocol_chain_joined_by_line_break() {
  let (model, _) = walk(
    &["Sample Name", "Protocol REF", "Protocol REF", "Extract Name"],
    &[&["S1", "Grow", "Harvest", "E1"]],
  );
  assert_eq!(
    label_of(&model, "Sample|S1", "Extract|E1"),
    Some("Grow\nHarvest")
  );
}

#[test]
fn edges_contributed_equal_node_cells_minus_one() {
  let header = [
    "Source Name",
    "Protocol REF",
    "Sample Name",
    "Protocol REF",
    "Extract Name",
    "Labeled Extract Name",
  ];
  let (_, summaries) = walk(
    &header,
    &[
      &["src", "p1", "s", "p2", "e", "le"],
      &["src", "p1", "s", "", "", ""],
      &["src", "", "", "", "e", ""],
    ],
  );
  assert_eq!(summaries[0].edges, 3);
  assert_eq!(summaries[1].edges, 1);
  assert_eq!(summaries[2].edges, 1);
}

#[test]
fn dangling_chain_is_dropped_and_counted() {
  let (model, summaries) = walk(
    &["Sample Name", "Protocol REF", "Extract Name", "Protocol REF"],
    &[&["S1", "P1", "E1", "Orphan"], &["S2", "P1", "E2", ""]],
  );
  assert!(summaries[0].dangling);
  assert!(!summaries[1].dangling);
  assert_eq!(model.dangling_chains(), 1);
  assert_eq!(model.rows_walked(), 2);
  assert_eq!(model.edge_count(), 2);
}

#[test]
fn whitespace_cells_are_absent_and_values_trimmed() {
  let (model, summaries) = walk(
    &["Sample Name", "Protocol REF", "Extract Name"],
    &[&[" S1 ", "   ", "E1"]],
  );
  assert_eq!(label_of(&model, "Sample|S1", "Extract|E1"), Some(""));
  assert_eq!(summaries[0].edges, 1);
}

#[test]
fn short_rows_are_padded_by_absence() {
  let (model, _) = walk(&["Sample Name", "Protocol REF", "Extract Name"], &[&["S1"]]);
  assert_eq!(model.node_ids().len(), 1);
}

#[test]
fn step_transitions_are_observable() {
  let mut model = GraphModel::new();
  let sample = ColumnTag::Node {
    kind: "Sample".to_string(),
  };
  let state = RowState::new()
    .step(&sample, "S1", &mut model)
    .step(&ColumnTag::Edge, "P1", &mut model)
    .step(&ColumnTag::Link, "http://p1", &mut model);
  assert_eq!(state.current_node(), Some("Sample|S1"));
  assert_eq!(state.protocol_chain(), &["P1".to_string()]);
  assert_eq!(state.pending_edge_url(), Some("http://p1"));

  let extract = ColumnTag::Node {
    kind: "Extract".to_string(),
  };
  let state = state.step(&extract, "E1", &mut model);
  assert!(state.protocol_chain().is_empty());
  assert_eq!(state.pending_edge_url(), None);
  assert_eq!(
    state.finish(&mut model),
    RowSummary {
      edges: 1,
      dangling: false
    }
  );
  assert_eq!(model.url("P1"), Some("http://p1"));
}

#[test]
fn link_before_any_node_is_forgotten_at_next_node() {
  let (model, _) = walk(
    &["Comment [URI]", "Sample Name", "Extract Name"],
    &[&["http://lost", "S1", "E1"]],
  );
  assert_eq!(model.url("Sample|S1"), None);
  assert_eq!(model.url(""), None);
}
