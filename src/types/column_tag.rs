//! Semantic tag assigned to one SDRF header column.

use std::fmt;

/// What a header column contributes to the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnTag {
  /// `Array Design REF` / `Array Design File`: annotates the current node.
  ArrayDesign,
  /// A named entity column; `kind` is the entity prefix used in node ids.
  Node { kind: String },
  /// Key/value annotation on the current node.
  Characteristic { key: String },
  /// A protocol step between two node columns.
  Edge,
  /// Key/value annotation on the last protocol of the chain.
  Parameter { key: String },
  /// URI / URL / FTP column.
  Link,
  Ignore,
}

impl fmt::Display for ColumnTag {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ColumnTag::ArrayDesign => write!(f, "array_design"),
      ColumnTag::Node { kind } => write!(f, "node({})", kind),
      ColumnTag::Characteristic { key } => write!(f, "characteristic({})", key),
      ColumnTag::Edge => write!(f, "edge"),
      ColumnTag::Parameter { key } => write!(f, "parameter({})", key),
      ColumnTag::Link => write!(f, "link"),
      ColumnTag::Ignore => write!(f, "ignore"),
    }
  }
}
