//! # sdrf-graph
//!
//! Turns SDRF (Sample and Data Relationship Format) sheets into Graphviz DOT
//! graphs of how sources, samples, extracts and data files relate.
//!
//! ## Architecture
//!
//! Conversion is a straight pipeline:
//!
//! - `sources` reads a workbook or delimited file into [SheetGrid]s.
//! - `classifier` tags every header column ([ColumnTag]).
//! - `row_walker` folds one data row into the shared [GraphModel].
//! - `graph_builder` drives the walker over every selected sheet.
//! - `dot_writer` serializes the model as DOT text.
//! - `renderer` optionally pipes that text through Graphviz.
//!
//! `convert` ties the stages together for the `sdrf2dot` CLI and the HTTP
//! service in `server`.

pub mod classifier;
pub mod convert;
pub mod dot_writer;
pub mod error;
pub mod graph_builder;
pub mod renderer;
pub mod row_walker;
#[cfg(test)]
mod row_walker_test;
pub mod server;
pub mod sources;
pub mod types;

pub use classifier::{classify, classify_header};
pub use convert::{convert, to_dot};
pub use dot_writer::DotWriter;
pub use error::{Error, Result};
pub use graph_builder::{GraphBuilder, SheetSummary, build_model};
pub use renderer::{GraphvizRenderer, Renderer};
pub use row_walker::{RowState, RowSummary, walk_row};
pub use sources::{SheetSource, open_document};
pub use types::{ColumnTag, ConvertOptions, GraphModel, Layout, OutputFormat, SheetGrid};
