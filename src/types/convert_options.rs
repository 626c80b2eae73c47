//! Options shared by the CLI and the HTTP service.

use serde::Deserialize;

use super::{Layout, OutputFormat};

/// How a document is turned into output bytes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
  /// Only sheets whose name contains this substring are walked.
  pub sheet: Option<String>,
  pub format: OutputFormat,
  pub layout: Layout,
  /// Render protocol chains as intermediate label nodes.
  pub edge_labels: bool,
  /// DOT graph name, usually the input file stem. `sdrf` when absent.
  pub graph_name: Option<String>,
}

impl Default for ConvertOptions {
  fn default() -> Self {
    Self {
      sheet: None,
      format: OutputFormat::dot(),
      layout: Layout::Tb,
      edge_labels: true,
      graph_name: None,
    }
  }
}
