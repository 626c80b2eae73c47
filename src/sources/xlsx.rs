//! Office Open XML workbook reader (calamine).

use super::SheetSource;
use crate::error::{Error, Result};
use crate::types::SheetGrid;
use calamine::{Reader, Xlsx, XlsxError, open_workbook};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// A workbook opened from disk. Shared strings are resolved by calamine.
pub struct XlsxWorkbook {
  path: PathBuf,
  workbook: Xlsx<BufReader<File>>,
}

impl XlsxWorkbook {
  #[instrument(level = "trace")]
  pub fn open(path: &Path) -> Result<Self> {
    let workbook: Xlsx<BufReader<File>> =
      open_workbook(path).map_err(|e: XlsxError| Error::Document {
        path: path.to_path_buf(),
        message: e.to_string(),
      })?;
    Ok(Self {
      path: path.to_path_buf(),
      workbook,
    })
  }
}

impl SheetSource for XlsxWorkbook {
  fn sheet_names(&self) -> Vec<String> {
    self.workbook.sheet_names()
  }

  fn read_sheet(&mut self, name: &str) -> Result<SheetGrid> {
    let range = self
      .workbook
      .worksheet_range(name)
      .map_err(|e| Error::Document {
        path: self.path.clone(),
        message: format!("sheet '{}': {}", name, e),
      })?;
    let rows: Vec<Vec<String>> = range
      .rows()
      .map(|row| row.iter().map(|cell| cell.to_string()).collect())
      .collect();
    debug!(sheet = %name, rows = rows.len(), "read worksheet");
    Ok(SheetGrid::new(name, rows))
  }
}
