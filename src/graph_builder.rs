//! Builds one [GraphModel] from every selected sheet of a document.
//!
//! Sheets are walked in document order and rows in sheet order. Node ids are
//! shared across sheets, so the same sample links up between them.

use crate::classifier::classify_header;
use crate::error::{Error, Result};
use crate::row_walker::walk_row;
use crate::sources::SheetSource;
use crate::types::{GraphModel, SheetGrid};
use tracing::{debug, info, instrument};

/// Per-sheet counters reported after walking a sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetSummary {
  pub name: String,
  pub rows: usize,
  pub edges: usize,
  pub dangling_chains: usize,
}

/// Owns the model for the duration of one conversion.
#[derive(Debug, Default)]
pub struct GraphBuilder {
  model: GraphModel,
}

impl GraphBuilder {
  pub fn new() -> Self {
    Self::default()
  }

  /// Walks every data row of `sheet`. Fails if the sheet has no header row.
  #[instrument(level = "trace", skip(self, sheet), fields(sheet = %sheet.name))]
  pub fn add_sheet(&mut self, sheet: &SheetGrid) -> Result<SheetSummary> {
    let header = sheet
      .header()
      .ok_or_else(|| Error::MissingHeader(sheet.name.clone()))?;
    let columns = classify_header(header);
    debug!(
      sheet = %sheet.name,
      columns = %columns.iter().map(ToString::to_string).collect::<Vec<_>>().join(", "),
      "classified header"
    );

    let mut summary = SheetSummary {
      name: sheet.name.clone(),
      ..SheetSummary::default()
    };
    for row in sheet.data_rows() {
      let row_summary = walk_row(&columns, row, &mut self.model);
      summary.rows += 1;
      summary.edges += row_summary.edges;
      if row_summary.dangling {
        summary.dangling_chains += 1;
      }
    }
    Ok(summary)
  }

  /// Walks the sheets of `source` whose name contains `filter` (all sheets
  /// when `filter` is `None`). A filter that selects nothing is an error.
  #[instrument(level = "trace", skip(self, source))]
  pub fn add_source(
    &mut self,
    source: &mut dyn SheetSource,
    filter: Option<&str>,
  ) -> Result<Vec<SheetSummary>> {
    let names = source.sheet_names();
    let selected: Vec<&String> = names
      .iter()
      .filter(|name| filter.is_none_or(|f| name.contains(f)))
      .collect();
    if selected.is_empty() {
      return Err(Error::NoMatchingSheet {
        filter: filter.unwrap_or_default().to_string(),
        available: names.join(", "),
      });
    }

    let mut summaries = Vec::with_capacity(selected.len());
    for name in selected {
      let grid = source.read_sheet(name)?;
      let summary = self.add_sheet(&grid)?;
      info!(
        sheet = %summary.name,
        rows = summary.rows,
        edges = summary.edges,
        dangling_chains = summary.dangling_chains,
        "sheet walked"
      );
      summaries.push(summary);
    }
    Ok(summaries)
  }

  pub fn finish(self) -> GraphModel {
    self.model
  }
}

/// Convenience: a fresh builder over `source`, returning the finished model.
pub fn build_model(source: &mut dyn SheetSource, filter: Option<&str>) -> Result<GraphModel> {
  let mut builder = GraphBuilder::new();
  builder.add_source(source, filter)?;
  Ok(builder.finish())
}
