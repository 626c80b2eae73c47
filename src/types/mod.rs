//! Data types flowing through the conversion: column tags, sheet grids, the
//! accumulated graph model and the user-facing options.

mod column_tag;
mod convert_options;
mod graph_model;
mod layout;
mod output_format;
mod sheet_grid;

pub use column_tag::ColumnTag;
pub use convert_options::ConvertOptions;
pub use graph_model::{GraphModel, LINE_BREAK, node_id};
pub use layout::Layout;
pub use output_format::OutputFormat;
pub use sheet_grid::SheetGrid;
