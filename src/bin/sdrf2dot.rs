//! CLI: convert an SDRF workbook or text file into a Graphviz graph.
//!
//! Usage: `sdrf2dot [OPTIONS] <input>`
//! Example: sdrf2dot --format svg -o study.svg E-MTAB-1234.sdrf.xlsx
//!
//! DOT text goes to stdout unless `--output` is given. Log lines go to stderr.
//!
//! Set RUST_LOG=sdrf_graph=debug to see row-level decisions.

use clap::{Parser, ValueEnum};
use sdrf_graph::renderer::DEFAULT_GRAPHVIZ;
use sdrf_graph::{ConvertOptions, GraphvizRenderer, Layout, OutputFormat, convert};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Graph direction as accepted on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum LayoutArg {
  Tb,
  Lr,
}

impl From<LayoutArg> for Layout {
  fn from(l: LayoutArg) -> Self {
    match l {
      LayoutArg::Tb => Layout::Tb,
      LayoutArg::Lr => Layout::Lr,
    }
  }
}

/// Convert an SDRF sheet into a Graphviz graph.
#[derive(Parser, Debug)]
#[command(name = "sdrf2dot")]
#[command(
  after_help = r#"Environment variables (override --format and --graphviz when set):
  SDRF_GRAPH_FORMAT     Output format (dot, svg, png, pdf, ...).
  SDRF_GRAPH_GRAPHVIZ   Graphviz program used for non-dot formats (default: dot).

Examples:
  sdrf2dot E-MTAB-1234.sdrf.txt > study.dot
  sdrf2dot --sheet SDRF --layout lr --format svg -o study.svg study.xlsx"#
)]
struct Args {
  /// Only convert sheets whose name contains this text (case-sensitive)
  #[arg(long, value_name = "NAME")]
  sheet: Option<String>,

  /// Output format. "dot" writes DOT text; anything else is rendered by Graphviz
  #[arg(long, value_name = "FORMAT", default_value = "dot")]
  format: String,

  /// Graph direction: top-to-bottom or left-to-right
  #[arg(long, value_enum, default_value = "tb")]
  layout: LayoutArg,

  /// Draw plain edges instead of protocol label nodes
  #[arg(long)]
  no_edge_labels: bool,

  /// Graphviz program used for rendering
  #[arg(long, value_name = "PATH", default_value = DEFAULT_GRAPHVIZ)]
  graphviz: PathBuf,

  /// Write output here instead of stdout
  #[arg(short, long, value_name = "FILE")]
  output: Option<PathBuf>,

  /// SDRF workbook (.xlsx, .xlsm) or delimited file (.tsv, .txt, .sdrf, .csv)
  #[arg(value_name = "input")]
  input: PathBuf,
}

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_writer(io::stderr)
    .init();

  let args = Args::parse();

  // Env vars override flags.
  let format_text = env::var("SDRF_GRAPH_FORMAT").unwrap_or_else(|_| args.format.clone());
  let graphviz = env::var("SDRF_GRAPH_GRAPHVIZ")
    .map(PathBuf::from)
    .unwrap_or_else(|_| args.graphviz.clone());

  let format: OutputFormat = match format_text.parse() {
    Ok(f) => f,
    Err(e) => {
      eprintln!("Error: {}", e);
      process::exit(1);
    }
  };

  let options = ConvertOptions {
    sheet: args.sheet.clone(),
    format,
    layout: args.layout.into(),
    edge_labels: !args.no_edge_labels,
    graph_name: args
      .input
      .file_stem()
      .map(|s| s.to_string_lossy().into_owned()),
  };
  let renderer = GraphvizRenderer::new(graphviz);
  info!(input = %args.input.display(), format = %options.format, layout = %options.layout, graphviz = %renderer.program().display(), "options (env or flags)");

  let bytes = match convert(&args.input, &options, &renderer) {
    Ok(b) => b,
    Err(e) => {
      eprintln!("Error: {}", e);
      process::exit(1);
    }
  };

  let written = match &args.output {
    Some(path) => fs::write(path, &bytes),
    None => io::stdout().lock().write_all(&bytes),
  };
  if let Err(e) = written {
    eprintln!("Error writing output: {}", e);
    process::exit(1);
  }
}
