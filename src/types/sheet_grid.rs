//! One sheet's resolved cell values.

/// Rectangular-ish grid of cell strings; row 0 is the header.
///
/// Rows may be shorter than the header; missing cells count as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetGrid {
  pub name: String,
  pub rows: Vec<Vec<String>>,
}

impl SheetGrid {
  pub fn new(name: impl Into<String>, rows: Vec<Vec<String>>) -> Self {
    Self {
      name: name.into(),
      rows,
    }
  }

  /// Convenience constructor from string slices (handy for fixtures).
  pub fn from_strs(name: impl Into<String>, rows: &[&[&str]]) -> Self {
    let rows = rows
      .iter()
      .map(|r| r.iter().map(|c| c.to_string()).collect())
      .collect();
    Self::new(name, rows)
  }

  pub fn header(&self) -> Option<&[String]> {
    self.rows.first().map(Vec::as_slice)
  }

  /// Rows after the header.
  pub fn data_rows(&self) -> impl Iterator<Item = &[String]> {
    self.rows.iter().skip(1).map(Vec::as_slice)
  }
}
