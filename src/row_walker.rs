//! Row walker: folds one SDRF row, cell by cell, into the [GraphModel].
//!
//! Per-row state is carried in [RowState]. Each non-empty cell is dispatched
//! on its column's [ColumnTag]:
//!
//! - node cells close the open protocol chain into an edge from the previous node
//! - protocol cells push onto the chain, parameter cells annotate its last entry
//! - characteristic and array design cells annotate the current node
//! - link cells attach to the current node, or to the open chain

use crate::types::{ColumnTag, GraphModel, LINE_BREAK, node_id};
use tracing::{debug, trace};

/// What one row added to the model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowSummary {
  /// Edges recorded (including ones that replaced an existing pair's label).
  pub edges: usize,
  /// True when protocols after the last node column were dropped.
  pub dangling: bool,
}

/// State carried across the cells of one row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowState {
  current_node: Option<String>,
  protocol_chain: Vec<String>,
  pending_edge_url: Option<String>,
  edges: usize,
}

impl RowState {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn current_node(&self) -> Option<&str> {
    self.current_node.as_deref()
  }

  pub fn protocol_chain(&self) -> &[String] {
    &self.protocol_chain
  }

  pub fn pending_edge_url(&self) -> Option<&str> {
    self.pending_edge_url.as_deref()
  }

  /// Edge label of the open chain.
  pub fn chain_label(&self) -> String {
    self.protocol_chain.join(LINE_BREAK)
  }

  /// Applies one non-empty cell and returns the next state.
  pub fn step(mut self, tag: &ColumnTag, value: &str, model: &mut GraphModel) -> Self {
    match tag {
      ColumnTag::ArrayDesign => {
        if let Some(node) = &self.current_node {
          model.annotate_array_design(node, value);
        }
      }
      ColumnTag::Node { kind } => {
        let next = node_id(kind, value);
        model.add_node(&next);
        if let Some(prev) = &self.current_node {
          let label = self.chain_label();
          if let Some(old) = model.add_edge(prev, &next, &label)
            && old != label
          {
            debug!(from = %prev, to = %next, old = %old, new = %label, "edge label replaced");
          }
          if let Some(url) = &self.pending_edge_url
            && !label.is_empty()
          {
            model.set_url(&label, url);
          }
          self.edges += 1;
        }
        self.current_node = Some(next);
        self.protocol_chain.clear();
        self.pending_edge_url = None;
      }
      ColumnTag::Characteristic { key } => match &self.current_node {
        Some(node) => {
          model.annotate(node, key, value);
        }
        None => trace!(key = %key, "characteristic before any node column; skipped"),
      },
      ColumnTag::Edge => self.protocol_chain.push(value.to_string()),
      ColumnTag::Parameter { key } => {
        if let Some(last) = self.protocol_chain.last_mut() {
          last.push_str(LINE_BREAK);
          last.push_str(&format!("({}:{})", key, value));
          if let Some(url) = &self.pending_edge_url {
            model.set_url(&self.chain_label(), url);
          }
        }
      }
      ColumnTag::Link => match &self.current_node {
        Some(node) if self.protocol_chain.is_empty() => model.set_url(node, value),
        _ => {
          self.pending_edge_url = Some(value.to_string());
          if !self.protocol_chain.is_empty() {
            model.set_url(&self.chain_label(), value);
          }
        }
      },
      ColumnTag::Ignore => {}
    }
    self
  }

  /// Ends the row. An open chain has no target node and is dropped.
  pub fn finish(self, model: &mut GraphModel) -> RowSummary {
    let dangling = !self.protocol_chain.is_empty();
    if dangling {
      debug!(
        node = ?self.current_node,
        chain = %self.chain_label(),
        "protocol chain without a following node column dropped"
      );
    }
    model.record_row(dangling);
    RowSummary {
      edges: self.edges,
      dangling,
    }
  }
}

/// Walks one data row against the sheet's classified header.
///
/// Empty and whitespace-only cells are skipped; values are trimmed.
pub fn walk_row(columns: &[ColumnTag], row: &[String], model: &mut GraphModel) -> RowSummary {
  columns
    .iter()
    .zip(row)
    .filter_map(|(tag, cell)| {
      let value = cell.trim();
      (!value.is_empty()).then_some((tag, value))
    })
    .fold(RowState::new(), |state, (tag, value)| {
      state.step(tag, value, model)
    })
    .finish(model)
}
