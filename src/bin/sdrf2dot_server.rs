//! HTTP service: `POST /convert` turns an uploaded SDRF file into DOT or an
//! image, `GET /health` answers "ok".
//!
//! Usage: `sdrf2dot_server [--bind ADDR] [--graphviz PATH]`
//!
//! Set RUST_LOG=sdrf_graph=debug,tower_http=debug for request-level logs.

use clap::Parser;
use sdrf_graph::GraphvizRenderer;
use sdrf_graph::renderer::DEFAULT_GRAPHVIZ;
use sdrf_graph::server::{AppState, router};
use std::env;
use std::path::PathBuf;
use std::process;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_BIND: &str = "127.0.0.1:8080";

/// Serve SDRF to Graphviz conversion over HTTP.
#[derive(Parser, Debug)]
#[command(name = "sdrf2dot_server")]
#[command(
  after_help = r#"Environment variables (override --bind and --graphviz when set):
  SDRF_GRAPH_BIND       Listen address (default: 127.0.0.1:8080).
  SDRF_GRAPH_GRAPHVIZ   Graphviz program used for non-dot formats (default: dot)."#
)]
struct Args {
  /// Address to listen on
  #[arg(long, value_name = "ADDR", default_value = DEFAULT_BIND)]
  bind: String,

  /// Graphviz program used for rendering
  #[arg(long, value_name = "PATH", default_value = DEFAULT_GRAPHVIZ)]
  graphviz: PathBuf,
}

async fn shutdown_signal() {
  if let Err(e) = tokio::signal::ctrl_c().await {
    error!(error = %e, "cannot listen for ctrl-c");
  }
  info!("shutting down");
}

#[tokio::main]
async fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  let args = Args::parse();
  let bind = env::var("SDRF_GRAPH_BIND").unwrap_or_else(|_| args.bind.clone());
  let graphviz = env::var("SDRF_GRAPH_GRAPHVIZ")
    .map(PathBuf::from)
    .unwrap_or_else(|_| args.graphviz.clone());

  let listener = match TcpListener::bind(&bind).await {
    Ok(l) => l,
    Err(e) => {
      eprintln!("Error binding {}: {}", bind, e);
      process::exit(1);
    }
  };
  let renderer = GraphvizRenderer::new(graphviz);
  info!(bind = %bind, graphviz = %renderer.program().display(), "sdrf2dot_server listening");

  let app = router(AppState::new(renderer));
  if let Err(e) = axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await
  {
    eprintln!("Server error: {}", e);
    process::exit(1);
  }
}
