//! Sheet grid sources: where header and row cells come from.
//!
//! A [SheetSource] lists sheet names and yields one resolved [SheetGrid] per
//! sheet. Workbooks are read with calamine, SDRF text files with csv.

mod delimited;
mod xlsx;

use crate::error::{Error, Result};
use crate::types::SheetGrid;
use std::path::Path;
use tracing::instrument;

pub use delimited::DelimitedSheet;
pub use xlsx::XlsxWorkbook;

/// Anything that can hand out sheets by name.
pub trait SheetSource {
  /// Sheet names in document order.
  fn sheet_names(&self) -> Vec<String>;

  /// Reads one sheet. Cell values are already resolved to text.
  fn read_sheet(&mut self, name: &str) -> Result<SheetGrid>;
}

impl SheetSource for Vec<SheetGrid> {
  fn sheet_names(&self) -> Vec<String> {
    self.iter().map(|s| s.name.clone()).collect()
  }

  fn read_sheet(&mut self, name: &str) -> Result<SheetGrid> {
    self
      .iter()
      .find(|s| s.name == name)
      .cloned()
      .ok_or_else(|| Error::NoMatchingSheet {
        filter: name.to_string(),
        available: self.sheet_names().join(", "),
      })
  }
}

/// Opens `path` with the reader matching its extension.
///
/// - `.xlsx` / `.xlsm`: workbook
/// - `.tsv` / `.txt` / `.sdrf`: tab-separated
/// - `.csv`: comma-separated
#[instrument(level = "trace")]
pub fn open_document(path: &Path) -> Result<Box<dyn SheetSource>> {
  let ext = path
    .extension()
    .and_then(|e| e.to_str())
    .map(str::to_ascii_lowercase)
    .unwrap_or_default();
  match ext.as_str() {
    "xlsx" | "xlsm" => Ok(Box::new(XlsxWorkbook::open(path)?)),
    "tsv" | "txt" | "sdrf" => Ok(Box::new(DelimitedSheet::open(path, b'\t')?)),
    "csv" => Ok(Box::new(DelimitedSheet::open(path, b',')?)),
    "" => Err(Error::UnsupportedDocument(format!(
      "{} has no file extension",
      path.display()
    ))),
    other => Err(Error::UnsupportedDocument(format!(".{}", other))),
  }
}
