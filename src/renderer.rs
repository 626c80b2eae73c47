//! External rendering: pipe DOT text through Graphviz to get an image.
//!
//! The DOT text is written to the child's stdin from a scoped thread while
//! stdout is read to the end, so programs that stream output as they read
//! cannot fill the pipe and stall. The child is always waited for, including
//! when the write fails.

use crate::error::{Error, Result};
use crate::types::OutputFormat;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;
use tracing::{debug, instrument};

/// Default Graphviz layout program.
pub const DEFAULT_GRAPHVIZ: &str = "dot";

/// Turns DOT text into bytes of the requested format.
pub trait Renderer {
  fn render(&self, dot: &str, format: &OutputFormat) -> Result<Vec<u8>>;
}

/// Runs a Graphviz program as `<program> -T<format>`.
#[derive(Debug, Clone)]
pub struct GraphvizRenderer {
  program: PathBuf,
}

impl Default for GraphvizRenderer {
  fn default() -> Self {
    Self::new(DEFAULT_GRAPHVIZ)
  }
}

impl GraphvizRenderer {
  pub fn new(program: impl Into<PathBuf>) -> Self {
    Self {
      program: program.into(),
    }
  }

  pub fn program(&self) -> &Path {
    &self.program
  }
}

impl Renderer for GraphvizRenderer {
  #[instrument(level = "trace", skip(self, dot), fields(program = %self.program.display()))]
  fn render(&self, dot: &str, format: &OutputFormat) -> Result<Vec<u8>> {
    let mut child = Command::new(&self.program)
      .arg(format!("-T{}", format))
      .stdin(Stdio::piped())
      .stdout(Stdio::piped())
      .stderr(Stdio::null())
      .spawn()
      .map_err(|e| Error::Render(format!("spawn {}: {}", self.program.display(), e)))?;

    let stdin = child.stdin.take();
    let (written, output) = thread::scope(|s| {
      // Dropping the handle closes stdin so the child sees EOF.
      let writer = s.spawn(move || match stdin {
        Some(mut stdin) => stdin.write_all(dot.as_bytes()),
        None => Ok(()),
      });
      let output = child.wait_with_output();
      (writer.join(), output)
    });
    let output =
      output.map_err(|e| Error::Render(format!("wait {}: {}", self.program.display(), e)))?;
    let written = written
      .map_err(|_| Error::Render(format!("stdin writer for {} panicked", self.program.display())))?;

    if !output.status.success() {
      let msg = output
        .status
        .code()
        .map(|c| format!("{} exited with status {}", self.program.display(), c))
        .unwrap_or_else(|| format!("{} killed by signal", self.program.display()));
      return Err(Error::Render(msg));
    }
    written.map_err(|e| Error::Render(format!("write to {}: {}", self.program.display(), e)))?;
    if output.stdout.is_empty() {
      return Err(Error::Render(format!(
        "{} produced no output",
        self.program.display()
      )));
    }
    debug!(bytes = output.stdout.len(), format = %format, "rendered");
    Ok(output.stdout)
  }
}
