//! HTTP request handlers
//!
//! Implements handlers for all catalog endpoints. Filesystem work runs on
//! the blocking thread pool.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Path as UrlPath, Query, Request, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tower::ServiceExt;
use tower_http::services::ServeFile;

use crate::content::{get_all_stream_content, get_dir_stream_content, get_iter, DirListing, TreeListing};
use crate::error::CatalogError;
use crate::state::AppState;
use crate::subtitle::{srt_to_vtt, SRT_EXTENSION, VTT_EXTENSION};

use super::STREAM_ROUTE_PREFIX;

/// HTTP error type
#[derive(Debug)]
pub enum HttpError {
    NotFound(String),
    Forbidden(String),
    Unprocessable(String),
    InternalError(String),
}

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            HttpError::Unprocessable(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            HttpError::InternalError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(ErrorBody { detail })).into_response()
    }
}

impl From<CatalogError> for HttpError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotListed { .. } => HttpError::NotFound(err.to_string()),
            CatalogError::Io(ref e) if e.kind() == std::io::ErrorKind::NotFound => {
                HttpError::NotFound(err.to_string())
            }
            CatalogError::MalformedSubtitle { .. } => HttpError::Unprocessable(err.to_string()),
            _ => HttpError::InternalError(err.to_string()),
        }
    }
}

/// Run blocking filesystem work off the async executor
async fn blocking<T, F>(f: F) -> Result<T, HttpError>
where
    F: FnOnce() -> Result<T, CatalogError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| HttpError::InternalError(e.to_string()))?
        .map_err(HttpError::from)
}

fn resolve(state: &AppState, relative: &str) -> Result<PathBuf, HttpError> {
    state
        .resolve(relative)
        .ok_or_else(|| HttpError::Forbidden(format!("'{}' is outside the media library", relative)))
}

/// Query string carrying a library-relative file path
#[derive(Debug, Deserialize)]
pub struct FileQuery {
    pub file: String,
}

/// Playback view of a single media file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileView {
    /// Bare filename
    pub media_title: String,
    /// Library-relative path to fetch from `/media`
    pub media: String,
    /// Previous sibling in natural order
    pub previous: Option<String>,
    /// Next sibling in natural order
    pub next: Option<String>,
    /// Library-relative WebVTT track to fetch from `/track`
    pub track: Option<String>,
}

/// Response of the `/stream` endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StreamView {
    Directory(DirListing),
    File(FileView),
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "OK"
}

/// Version endpoint
pub async fn version_check() -> &'static str {
    concat!("media-catalog v", env!("CARGO_PKG_VERSION"))
}

/// Whole-library listing endpoint
/// GET /home
pub async fn home(State(state): State<Arc<AppState>>) -> Result<Json<TreeListing>, HttpError> {
    let source = state.media_source().to_path_buf();
    let formats = state.file_formats().clone();
    let listing = blocking(move || get_all_stream_content(&source, &formats)).await?;
    Ok(Json(listing))
}

/// Find or produce the WebVTT track for a media file.
///
/// An existing `.vtt` wins; otherwise a sibling `.srt` is converted.
fn subtitle_track(target: &Path, relative: &str) -> Option<String> {
    let vtt = target.with_extension(VTT_EXTENSION);
    let srt = target.with_extension(SRT_EXTENSION);
    let track = Path::new(relative)
        .with_extension(VTT_EXTENSION)
        .to_string_lossy()
        .into_owned();

    if vtt.exists() {
        return Some(track);
    }
    if !srt.exists() {
        return None;
    }
    match srt_to_vtt(&srt) {
        Ok(true) => Some(track),
        Ok(false) => {
            tracing::warn!("Subtitle conversion produced no output for {:?}", srt);
            None
        }
        Err(e) => {
            tracing::error!("Failed to convert {:?} to WebVTT: {}", srt, e);
            None
        }
    }
}

fn stream_view(state: &AppState, target: PathBuf, relative: String) -> Result<StreamView, CatalogError> {
    if target.is_dir() {
        let prefix = Path::new(STREAM_ROUTE_PREFIX).join(&relative);
        let listing = get_dir_stream_content(&target, prefix, state.file_formats())?;
        return Ok(StreamView::Directory(listing));
    }

    let nav = get_iter(&target, state.file_formats())?;
    let media_title = target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let track = subtitle_track(&target, &relative);
    Ok(StreamView::File(FileView {
        media_title,
        media: relative,
        previous: nav.previous,
        next: nav.next,
        track,
    }))
}

/// Directory listing or file playback view
/// GET /stream/{*media_path}
pub async fn stream(
    State(state): State<Arc<AppState>>,
    UrlPath(media_path): UrlPath<String>,
) -> Result<Json<StreamView>, HttpError> {
    let target = resolve(&state, &media_path)?;
    if !target.exists() {
        return Err(HttpError::NotFound(format!("'{}' was not found", media_path)));
    }
    tracing::debug!("Stream requested: {}", media_path);

    let relative = media_path.trim_start_matches('/').to_string();
    let view = blocking(move || stream_view(&state, target, relative)).await?;
    Ok(Json(view))
}

/// Media file endpoint, honours range requests
/// GET /media?file=...
pub async fn media(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FileQuery>,
    request: Request,
) -> Result<Response, HttpError> {
    let target = resolve(&state, &query.file)?;
    if !target.is_file() {
        return Err(HttpError::NotFound(format!("'{}' was not found", query.file)));
    }
    tracing::info!("Streaming {}", query.file);

    let response = ServeFile::new(&target)
        .oneshot(request)
        .await
        .map_err(|e| HttpError::InternalError(e.to_string()))?;
    Ok(response.map(Body::new))
}

/// Subtitle track endpoint
/// GET /track?file=...
pub async fn track(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FileQuery>,
) -> Result<Response, HttpError> {
    let target = resolve(&state, &query.file)?;
    tracing::debug!("Track file lookup: {:?}", target);

    let content = tokio::fs::read_to_string(&target)
        .await
        .map_err(|_| HttpError::NotFound(format!("'{}' was not found", query.file)))?;

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    Ok((headers, content).into_response())
}
