//! Output format: DOT text or anything the external renderer produces.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::Error;

/// Output format name, passed to Graphviz as `-T<format>` unless it is `dot`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct OutputFormat(String);

impl OutputFormat {
  pub fn dot() -> Self {
    Self("dot".to_string())
  }

  /// True when the DOT text is the output and no renderer runs.
  pub fn is_dot(&self) -> bool {
    self.0 == "dot" || self.0 == "gv"
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  /// MIME type for the service response.
  pub fn content_type(&self) -> &'static str {
    if self.is_dot() {
      return "text/vnd.graphviz";
    }
    let base = self.0.split(':').next().unwrap_or_default();
    match base {
      "svg" => "image/svg+xml",
      "png" => "image/png",
      "jpg" | "jpeg" => "image/jpeg",
      "gif" => "image/gif",
      "pdf" => "application/pdf",
      "json" => "application/json",
      "plain" | "canon" | "xdot" => "text/plain; charset=utf-8",
      _ => "application/octet-stream",
    }
  }
}

impl Default for OutputFormat {
  fn default() -> Self {
    Self::dot()
  }
}

impl FromStr for OutputFormat {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let s = s.trim().to_ascii_lowercase();
    let valid = !s.is_empty()
      && !s.starts_with(':')
      && s
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == ':' || c == '_');
    if valid {
      Ok(Self(s))
    } else {
      Err(Error::InvalidOption(format!("invalid output format '{}'", s)))
    }
  }
}

impl TryFrom<String> for OutputFormat {
  type Error = Error;

  fn try_from(value: String) -> Result<Self, Self::Error> {
    value.parse()
  }
}

impl fmt::Display for OutputFormat {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}
