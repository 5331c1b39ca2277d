//! Test fixtures for integration tests
//!
//! Builds a small media library on disk and a router serving it.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use tempfile::TempDir;
use tower::util::ServiceExt;

use crate::config::{MediaConfig, ServerConfig};
use crate::content::FileFormats;
use crate::http::create_router;
use crate::state::AppState;

pub const SAMPLE_SRT: &str = "1\n00:00:01,000 --> 00:00:02,000\nHello\n\n2\n00:00:02,500 --> 00:00:04,000\nWorld\n";

/// A media library in a temporary directory
pub struct TestLibrary {
    pub dir: TempDir,
}

impl TestLibrary {
    /// Layout:
    ///
    /// ```text
    /// intro.mp4
    /// .hidden.mp4
    /// notes.txt
    /// show/ep1.mp4  show/ep2.mp4  show/ep2.srt  show/ep10.mp4
    /// show/extras/behind.mov
    /// cache__/junk.mp4
    /// ```
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let lib = Self { dir };
        for rel in [
            "intro.mp4",
            ".hidden.mp4",
            "notes.txt",
            "show/ep1.mp4",
            "show/ep2.mp4",
            "show/ep10.mp4",
            "show/extras/behind.mov",
            "cache__/junk.mp4",
        ] {
            lib.write(rel, "");
        }
        lib.write("show/ep2.srt", SAMPLE_SRT);
        lib
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, rel: &str, content: &str) {
        let path = self.root().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    pub fn formats() -> FileFormats {
        FileFormats::new([".mp4", ".mov"])
    }

    pub fn router(&self) -> Router {
        let config = ServerConfig {
            media: MediaConfig {
                source: self.root().to_path_buf(),
                file_formats: Self::formats(),
            },
            ..Default::default()
        };
        create_router(Arc::new(AppState::new(config)))
    }
}

/// Issue a GET against the router
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Issue a GET and decode the JSON body, asserting the status first
pub async fn get_json<T: serde::de::DeserializeOwned>(app: Router, uri: &str, status: StatusCode) -> T {
    let response = get(app, uri).await;
    assert_eq!(response.status(), status, "GET {}", uri);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
