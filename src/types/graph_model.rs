//! Accumulated graph: adjacency, display labels and URLs.

use std::collections::{HashMap, HashSet};

use indexmap::{IndexMap, IndexSet};

/// Marker joining protocol chain entries and label fragments.
///
/// The model keeps raw cell text; the DOT writer turns this into `\n`.
pub const LINE_BREAK: &str = "\n";

/// Builds the node identifier `<kind>|<value>`.
pub fn node_id(kind: &str, value: &str) -> String {
  format!("{}|{}", kind, value)
}

/// Graph accumulated from every walked row of one conversion.
///
/// Maps only grow while rows are walked. Keys of the label and URL maps are
/// node identifiers or edge labels.
#[derive(Debug, Clone, Default)]
pub struct GraphModel {
  adjacency: IndexMap<String, IndexMap<String, String>>,
  labels: HashMap<String, String>,
  label_keys: HashMap<String, HashSet<String>>,
  urls: HashMap<String, String>,
  dangling_chains: usize,
  rows_walked: usize,
}

impl GraphModel {
  pub fn new() -> Self {
    Self::default()
  }

  /// Registers `id` as a source key so it renders even without edges.
  pub fn add_node(&mut self, id: &str) {
    if !self.adjacency.contains_key(id) {
      self.adjacency.insert(id.to_string(), IndexMap::new());
    }
  }

  /// Records `from -> to` labelled `label`. An existing pair keeps its
  /// position and takes the new label; the replaced label is returned.
  pub fn add_edge(&mut self, from: &str, to: &str, label: &str) -> Option<String> {
    self
      .adjacency
      .entry(from.to_string())
      .or_default()
      .insert(to.to_string(), label.to_string())
  }

  /// Appends `\n(key:value)` to the label of `id` unless `key` was already
  /// recorded for it. Returns whether the fragment was appended.
  pub fn annotate(&mut self, id: &str, key: &str, value: &str) -> bool {
    self.append_fragment(id, key.to_string(), &format!("({}:{})", key, value))
  }

  /// Appends `\n(Array:value)` once per distinct array design value.
  pub fn annotate_array_design(&mut self, id: &str, value: &str) -> bool {
    let fragment = format!("(Array:{})", value);
    self.append_fragment(id, fragment.clone(), &fragment)
  }

  fn append_fragment(&mut self, id: &str, dedupe_key: String, fragment: &str) -> bool {
    let seen = self.label_keys.entry(id.to_string()).or_default();
    if !seen.insert(dedupe_key) {
      return false;
    }
    let label = self
      .labels
      .entry(id.to_string())
      .or_insert_with(|| id.to_string());
    label.push_str(LINE_BREAK);
    label.push_str(fragment);
    true
  }

  /// Associates `url` with a node id or edge label; a later call replaces it.
  pub fn set_url(&mut self, key: &str, url: &str) {
    self.urls.insert(key.to_string(), url.to_string());
  }

  pub fn adjacency(&self) -> &IndexMap<String, IndexMap<String, String>> {
    &self.adjacency
  }

  pub fn label(&self, key: &str) -> Option<&str> {
    self.labels.get(key).map(String::as_str)
  }

  pub fn url(&self, key: &str) -> Option<&str> {
    self.urls.get(key).map(String::as_str)
  }

  /// Distinct node ids in first-occurrence order of the adjacency scan.
  pub fn node_ids(&self) -> IndexSet<&str> {
    let mut ids = IndexSet::new();
    for (from, targets) in &self.adjacency {
      ids.insert(from.as_str());
      for to in targets.keys() {
        ids.insert(to.as_str());
      }
    }
    ids
  }

  /// Number of distinct ordered node pairs.
  pub fn edge_count(&self) -> usize {
    self.adjacency.values().map(IndexMap::len).sum()
  }

  /// Rows whose protocol chain had no closing node column.
  pub fn dangling_chains(&self) -> usize {
    self.dangling_chains
  }

  pub fn rows_walked(&self) -> usize {
    self.rows_walked
  }

  pub(crate) fn record_row(&mut self, dangling: bool) {
    self.rows_walked += 1;
    if dangling {
      self.dangling_chains += 1;
    }
  }
}
