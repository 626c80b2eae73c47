//! Tab- or comma-separated SDRF text files: a single sheet named after the file.

use super::SheetSource;
use crate::error::{Error, Result};
use crate::types::SheetGrid;
use std::io::Read;
use std::path::Path;
use tracing::instrument;

/// A delimited file read eagerly into one sheet.
#[derive(Debug, Clone)]
pub struct DelimitedSheet {
  grid: SheetGrid,
}

impl DelimitedSheet {
  /// Reads `path`; the sheet is named after the file stem.
  #[instrument(level = "trace")]
  pub fn open(path: &Path, delimiter: u8) -> Result<Self> {
    let name = path
      .file_stem()
      .and_then(|s| s.to_str())
      .unwrap_or("sheet")
      .to_string();
    let file = std::fs::File::open(path)?;
    Self::from_reader(name, file, delimiter)
  }

  pub fn from_reader(name: impl Into<String>, reader: impl Read, delimiter: u8) -> Result<Self> {
    let mut csv = csv::ReaderBuilder::new()
      .delimiter(delimiter)
      .has_headers(false)
      .flexible(true)
      // Tab-separated SDRF carries bare double quotes inside values.
      .quoting(delimiter != b'\t')
      .from_reader(reader);
    let mut rows = Vec::new();
    for record in csv.records() {
      let record = record?;
      rows.push(record.iter().map(str::to_string).collect::<Vec<_>>());
    }
    if let Some(first) = rows.first_mut().and_then(|r: &mut Vec<String>| r.first_mut())
      && let Some(stripped) = first.strip_prefix('\u{feff}')
    {
      *first = stripped.to_string();
    }
    Ok(Self {
      grid: SheetGrid::new(name, rows),
    })
  }
}

impl SheetSource for DelimitedSheet {
  fn sheet_names(&self) -> Vec<String> {
    vec![self.grid.name.clone()]
  }

  fn read_sheet(&mut self, name: &str) -> Result<SheetGrid> {
    if name == self.grid.name {
      Ok(self.grid.clone())
    } else {
      Err(Error::NoMatchingSheet {
        filter: name.to_string(),
        available: self.grid.name.clone(),
      })
    }
  }
}
