//! Header classification: maps an SDRF column name to a [ColumnTag].
//!
//! Rules are ordered; the first match wins. Matching is case-sensitive.

use crate::types::ColumnTag;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::instrument;

static ARRAY_DESIGN: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"Array Design (File|REF)").expect("valid array design pattern"));

static BRACKET_KEY: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"\[\s*([^\]]*?)\s*\]").expect("valid bracket key pattern"));

/// Classifies one header string.
pub fn classify(header: &str) -> ColumnTag {
  if ARRAY_DESIGN.is_match(header) {
    return ColumnTag::ArrayDesign;
  }
  if !header.contains("Protocol")
    && (header.contains("Name") || header.contains("File") || header.contains("Data"))
  {
    return ColumnTag::Node {
      kind: entity_kind(header),
    };
  }
  if header.contains("Characteristic") {
    return ColumnTag::Characteristic {
      key: bracket_key(header),
    };
  }
  if header.contains("Protocol") {
    return ColumnTag::Edge;
  }
  if header.contains("Parameter") {
    return ColumnTag::Parameter {
      key: bracket_key(header),
    };
  }
  if header.contains("URI") || header.contains("URL") || header.contains("FTP") {
    return ColumnTag::Link;
  }
  ColumnTag::Ignore
}

/// Classifies every header cell of a sheet once.
#[instrument(level = "trace", skip(header))]
pub fn classify_header(header: &[String]) -> Vec<ColumnTag> {
  header.iter().map(|h| classify(h.trim())).collect()
}

/// Entity prefix for a node column: `Sample Name` -> `Sample`,
/// `Array Data File` -> `File`, `Derived Data` -> `Data`.
pub(crate) fn entity_kind(header: &str) -> String {
  if header.contains("Name") {
    let mut kind = header.to_string();
    // Removing one occurrence can splice a new one together ("NNameame").
    while kind.contains("Name") {
      kind = kind.replace("Name", "");
    }
    return kind.trim().to_string();
  }
  if header.contains("File") {
    return "File".to_string();
  }
  "Data".to_string()
}

/// Text inside the first `[...]`, or the trimmed header when there is none.
pub(crate) fn bracket_key(header: &str) -> String {
  BRACKET_KEY
    .captures(header)
    .and_then(|c| c.get(1))
    .map(|m| m.as_str().to_string())
    .unwrap_or_else(|| header.trim().to_string())
}
