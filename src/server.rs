//! HTTP front end: `POST /convert` takes a multipart upload and answers with
//! DOT text or a rendered image.
//!
//! Form fields: `file` (required), `sheet`, `format`, `layout`, `edge_labels`,
//! `graph_name`. The same options may be given as query parameters; form
//! fields win. Without a graph name, the uploaded file's stem is used.
//!
//! Every request writes its upload to its own temporary file, which is removed
//! when the conversion finishes or fails.

use crate::convert::convert;
use crate::error::Error;
use crate::renderer::Renderer;
use crate::types::ConvertOptions;
use axum::Router;
use axum::body::Bytes;
use axum::extract::{DefaultBodyLimit, Multipart, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info, instrument, warn};

/// Largest accepted request body.
pub const MAX_UPLOAD_BYTES: usize = 64 * 1024 * 1024;

/// Suffix used when the upload has no usable extension.
const DEFAULT_SUFFIX: &str = ".xlsx";

/// Shared, read-only service state.
#[derive(Clone)]
pub struct AppState {
  renderer: Arc<dyn Renderer + Send + Sync>,
}

impl AppState {
  pub fn new(renderer: impl Renderer + Send + Sync + 'static) -> Self {
    Self {
      renderer: Arc::new(renderer),
    }
  }
}

/// Builds the service router.
pub fn router(state: AppState) -> Router {
  Router::new()
    .route("/health", get(health))
    .route("/convert", post(convert_upload))
    .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

/// Request failure mapped onto an HTTP status.
#[derive(Debug)]
pub enum ApiError {
  BadRequest(String),
  Conversion(Error),
  Internal(String),
}

impl From<Error> for ApiError {
  fn from(e: Error) -> Self {
    ApiError::Conversion(e)
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match self {
      ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
      ApiError::Conversion(e) if e.is_input_error() => (StatusCode::BAD_REQUEST, e.to_string()),
      ApiError::Conversion(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
      ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
    };
    if status.is_server_error() {
      error!(status = %status, error = %message, "conversion request failed");
    } else {
      warn!(status = %status, error = %message, "conversion request rejected");
    }
    (status, message).into_response()
  }
}

async fn health() -> &'static str {
  "ok"
}

/// Parses a checkbox-style form value.
pub(crate) fn parse_flag(value: &str) -> Result<bool, Error> {
  match value.trim().to_ascii_lowercase().as_str() {
    "true" | "1" | "on" | "yes" => Ok(true),
    "false" | "0" | "off" | "no" => Ok(false),
    other => Err(Error::InvalidOption(format!(
      "edge_labels must be true or false, got '{}'",
      other
    ))),
  }
}

/// Temp file suffix taken from the uploaded file name, so the reader can be
/// chosen by extension.
pub(crate) fn upload_suffix(file_name: &str) -> String {
  Path::new(file_name)
    .extension()
    .and_then(|e| e.to_str())
    .filter(|e| !e.is_empty() && e.chars().all(|c| c.is_ascii_alphanumeric()))
    .map(|e| format!(".{}", e.to_ascii_lowercase()))
    .unwrap_or_else(|| DEFAULT_SUFFIX.to_string())
}

fn bad_multipart(e: axum::extract::multipart::MultipartError) -> ApiError {
  ApiError::BadRequest(format!("invalid multipart data: {}", e))
}

#[instrument(level = "trace", skip_all)]
async fn convert_upload(
  State(state): State<AppState>,
  Query(mut options): Query<ConvertOptions>,
  mut multipart: Multipart,
) -> Result<Response, ApiError> {
  let mut upload: Option<(String, Bytes)> = None;

  while let Some(field) = multipart.next_field().await.map_err(bad_multipart)? {
    let name = field.name().unwrap_or_default().to_string();
    match name.as_str() {
      "file" => {
        let file_name = field.file_name().unwrap_or("upload").to_string();
        let bytes = field.bytes().await.map_err(bad_multipart)?;
        upload = Some((file_name, bytes));
      }
      "sheet" => {
        let text = field.text().await.map_err(bad_multipart)?;
        let text = text.trim();
        options.sheet = (!text.is_empty()).then(|| text.to_string());
      }
      "format" => options.format = field.text().await.map_err(bad_multipart)?.parse()?,
      "layout" => options.layout = field.text().await.map_err(bad_multipart)?.parse()?,
      "edge_labels" => {
        options.edge_labels = parse_flag(&field.text().await.map_err(bad_multipart)?)?
      }
      "graph_name" => {
        let text = field.text().await.map_err(bad_multipart)?;
        let text = text.trim();
        options.graph_name = (!text.is_empty()).then(|| text.to_string());
      }
      other => debug!(field = %other, "ignoring unknown form field"),
    }
  }

  let (file_name, bytes) =
    upload.ok_or_else(|| ApiError::BadRequest("missing 'file' field".to_string()))?;
  info!(file = %file_name, bytes = bytes.len(), format = %options.format, "converting upload");

  if options.graph_name.is_none() {
    options.graph_name = Path::new(&file_name)
      .file_stem()
      .and_then(|s| s.to_str())
      .map(str::to_string);
  }
  let suffix = upload_suffix(&file_name);
  let content_type = options.format.content_type();
  let renderer = Arc::clone(&state.renderer);
  let output = tokio::task::spawn_blocking(move || -> Result<Vec<u8>, Error> {
    let mut input = tempfile::Builder::new()
      .prefix("sdrf-upload-")
      .suffix(&suffix)
      .tempfile()?;
    input.write_all(&bytes)?;
    input.flush()?;
    convert(input.path(), &options, renderer.as_ref())
  })
  .await
  .map_err(|e| ApiError::Internal(format!("conversion task failed: {}", e)))??;

  Ok(([(header::CONTENT_TYPE, content_type)], output).into_response())
}
