//! Error type shared by the readers, the graph builder and the renderers.

use std::path::PathBuf;

/// Errors that abort a conversion.
///
/// Expected-absent data (empty cells, unknown columns, dangling protocol
/// chains) never produces one of these.
#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("I/O error: {0}")]
  Io(#[from] std::io::Error),

  #[error("cannot read workbook {path}: {message}")]
  Document { path: PathBuf, message: String },

  #[error("cannot read delimited file: {0}")]
  Delimited(#[from] csv::Error),

  #[error("unsupported document type: {0}")]
  UnsupportedDocument(String),

  #[error("no sheet name contains '{filter}' (sheets: {available})")]
  NoMatchingSheet { filter: String, available: String },

  #[error("sheet '{0}' has no header row")]
  MissingHeader(String),

  #[error("render failed: {0}")]
  Render(String),

  #[error("invalid option: {0}")]
  InvalidOption(String),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
  /// True when the error was caused by the caller's input rather than the host.
  pub fn is_input_error(&self) -> bool {
    !matches!(self, Error::Io(_) | Error::Render(_))
  }
}
