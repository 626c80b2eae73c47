//! End-to-end conversion: document on disk -> DOT text -> optional rendering.
//!
//! Used by both the `sdrf2dot` CLI and the HTTP service. Each call builds a
//! fresh [GraphModel](crate::types::GraphModel); nothing is cached.

use crate::dot_writer::DotWriter;
use crate::error::Result;
use crate::graph_builder::build_model;
use crate::renderer::Renderer;
use crate::sources::{SheetSource, open_document};
use crate::types::ConvertOptions;
use std::path::Path;
use tracing::{info, instrument};

/// Builds the DOT text for every selected sheet of `source`.
#[instrument(level = "trace", skip(source, options))]
pub fn to_dot(source: &mut dyn SheetSource, options: &ConvertOptions) -> Result<String> {
  let model = build_model(source, options.sheet.as_deref())?;
  info!(
    nodes = model.node_ids().len(),
    edges = model.edge_count(),
    rows = model.rows_walked(),
    dangling_chains = model.dangling_chains(),
    "graph model built"
  );
  Ok(DotWriter::from_options(options).render(&model))
}

/// Converts the document at `path` into output bytes.
///
/// With the `dot` format the DOT text is returned as is; any other format is
/// handed to `renderer`.
#[instrument(level = "trace", skip(options, renderer))]
pub fn convert(path: &Path, options: &ConvertOptions, renderer: &dyn Renderer) -> Result<Vec<u8>> {
  let mut source = open_document(path)?;
  let dot = to_dot(source.as_mut(), options)?;
  if options.format.is_dot() {
    return Ok(dot.into_bytes());
  }
  renderer.render(&dot, &options.format)
}
