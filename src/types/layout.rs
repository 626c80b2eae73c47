//! Graph layout direction.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::Error;

/// Rank direction of the rendered graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
  /// Graphviz default (top to bottom); no directive is emitted.
  #[default]
  #[serde(alias = "TB")]
  Tb,
  /// Left to right: emits `graph [rankdir = LR];`.
  #[serde(alias = "LR")]
  Lr,
}

impl FromStr for Layout {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "tb" | "top-to-bottom" => Ok(Layout::Tb),
      "lr" | "left-to-right" => Ok(Layout::Lr),
      other => Err(Error::InvalidOption(format!(
        "unknown layout '{}' (expected lr or tb)",
        other
      ))),
    }
  }
}

impl fmt::Display for Layout {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Layout::Tb => write!(f, "tb"),
      Layout::Lr => write!(f, "lr"),
    }
  }
}
