//! DOT serialization of a [GraphModel].
//!
//! Output shape:
//!
//! ```text
//! digraph sdrf {
//!   graph [rankdir = LR];
//!   "Sample|S1" [shape = box, URL="...", label="..."] ;
//!   "Extraction\nSample|S1" [shape = none, label="Extraction"] ;
//!   "Sample|S1" -> "Extraction\nSample|S1" [arrowhead = none] ;
//!   "Extraction\nSample|S1" -> "Extract|E1" ;
//! }
//! ```
//!
//! Nodes and edges appear once each, in first-occurrence order of the
//! adjacency scan, so rendering the same model twice gives identical text.

use crate::types::{ConvertOptions, GraphModel, LINE_BREAK, Layout};
use indexmap::{IndexMap, IndexSet};
use std::fmt;
use tracing::instrument;

const DEFAULT_GRAPH_NAME: &str = "sdrf";

/// Renders a model to DOT text.
#[derive(Debug, Clone)]
pub struct DotWriter {
  graph_name: String,
  layout: Layout,
  edge_labels: bool,
}

impl Default for DotWriter {
  fn default() -> Self {
    Self {
      graph_name: DEFAULT_GRAPH_NAME.to_string(),
      layout: Layout::Tb,
      edge_labels: true,
    }
  }
}

impl DotWriter {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn from_options(options: &ConvertOptions) -> Self {
    let writer = Self::new()
      .with_layout(options.layout)
      .with_edge_labels(options.edge_labels);
    match &options.graph_name {
      Some(name) => writer.with_graph_name(name),
      None => writer,
    }
  }

  /// Graph name; characters outside `[A-Za-z0-9_]` are replaced by `_`.
  pub fn with_graph_name(mut self, name: &str) -> Self {
    let cleaned: String = name
      .chars()
      .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
      .collect();
    self.graph_name = if cleaned.is_empty() {
      DEFAULT_GRAPH_NAME.to_string()
    } else if cleaned.starts_with(|c: char| c.is_ascii_digit()) {
      format!("_{}", cleaned)
    } else {
      cleaned
    };
    self
  }

  pub fn with_layout(mut self, layout: Layout) -> Self {
    self.layout = layout;
    self
  }

  /// When false, protocol chains are not drawn: nodes connect directly.
  pub fn with_edge_labels(mut self, on: bool) -> Self {
    self.edge_labels = on;
    self
  }

  #[instrument(level = "trace", skip(self, model))]
  pub fn render(&self, model: &GraphModel) -> String {
    DotGraph::plan(self, model).to_string()
  }
}

/// Identifier of the label node drawn for `label` leaving `from`.
pub(crate) fn pseudo_node_id(label: &str, from: &str) -> String {
  let first_line = from.split(LINE_BREAK).next().unwrap_or(from);
  format!("{}{}{}", label, LINE_BREAK, first_line)
}

/// Escapes raw model text for a double-quoted DOT string. Line breaks become
/// `\n` and backslashes are doubled, so Graphviz never sees `\N`-style
/// escapes coming from cell values.
pub(crate) fn escape(text: &str) -> String {
  let mut out = String::with_capacity(text.len());
  for c in text.chars() {
    match c {
      '"' => out.push_str("\\\""),
      '\\' => out.push_str("\\\\"),
      '\n' => out.push_str("\\n"),
      '\r' => {}
      c => out.push(c),
    }
  }
  out
}

struct NodeDecl<'a> {
  id: &'a str,
  shape: &'static str,
  url: Option<&'a str>,
  label: Option<&'a str>,
}

impl fmt::Display for NodeDecl<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "  \"{}\" [shape = {}", escape(self.id), self.shape)?;
    if let Some(url) = self.url {
      write!(f, ", URL=\"{}\"", escape(url))?;
    }
    if let Some(label) = self.label {
      write!(f, ", label=\"{}\"", escape(label))?;
    }
    writeln!(f, "] ;")
  }
}

/// De-duplicated declarations and edges, ready to print.
struct DotGraph<'a> {
  name: &'a str,
  layout: Layout,
  nodes: Vec<NodeDecl<'a>>,
  /// Pseudo-node id -> edge label it stands for.
  label_nodes: IndexMap<String, &'a str>,
  /// (from, to) -> draw an arrowhead.
  edges: IndexMap<(String, String), bool>,
  model: &'a GraphModel,
}

impl<'a> DotGraph<'a> {
  fn plan(writer: &'a DotWriter, model: &'a GraphModel) -> Self {
    let ids: IndexSet<&str> = model.node_ids();
    let nodes = ids
      .into_iter()
      .map(|id| NodeDecl {
        id,
        shape: "box",
        url: model.url(id),
        label: model.label(id),
      })
      .collect();

    let mut label_nodes = IndexMap::new();
    let mut edges = IndexMap::new();
    for (from, targets) in model.adjacency() {
      for (to, label) in targets {
        if writer.edge_labels && !label.is_empty() {
          let pseudo = pseudo_node_id(label, from);
          label_nodes
            .entry(pseudo.clone())
            .or_insert(label.as_str());
          edges
            .entry((from.clone(), pseudo.clone()))
            .or_insert(false);
          edges.entry((pseudo, to.clone())).or_insert(true);
        } else {
          edges.entry((from.clone(), to.clone())).or_insert(true);
        }
      }
    }

    Self {
      name: &writer.graph_name,
      layout: writer.layout,
      nodes,
      label_nodes,
      edges,
      model,
    }
  }
}

impl fmt::Display for DotGraph<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "digraph {} {{", self.name)?;
    if self.layout == Layout::Lr {
      writeln!(f, "  graph [rankdir = LR];")?;
    }
    for node in &self.nodes {
      write!(f, "{}", node)?;
    }
    for (id, &label) in &self.label_nodes {
      let decl = NodeDecl {
        id,
        shape: "none",
        url: self.model.url(label),
        label: Some(self.model.label(label).unwrap_or(label)),
      };
      write!(f, "{}", decl)?;
    }
    for ((from, to), arrowhead) in &self.edges {
      write!(f, "  \"{}\" -> \"{}\"", escape(from), escape(to))?;
      if *arrowhead {
        writeln!(f, " ;")?;
      } else {
        writeln!(f, " [arrowhead = none] ;")?;
      }
    }
    writeln!(f, "}}")
  }
}
