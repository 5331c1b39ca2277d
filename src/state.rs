//! Application state management
//!
//! The catalog keeps no per-request state: every listing is computed fresh
//! from the filesystem. AppState only carries the configuration and maps
//! request paths onto the media library.

use std::path::{Component, Path, PathBuf};

use crate::config::ServerConfig;
use crate::content::FileFormats;

/// Application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    /// Server configuration
    pub config: ServerConfig,
}

impl AppState {
    /// Create a new AppState with the given configuration
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Create AppState with default configuration
    pub fn with_defaults() -> Self {
        Self::new(ServerConfig::default())
    }

    pub fn media_source(&self) -> &Path {
        &self.config.media.source
    }

    pub fn file_formats(&self) -> &FileFormats {
        &self.config.media.file_formats
    }

    /// Map a request-relative path onto the media library.
    ///
    /// Returns `None` for paths that could leave the library root
    /// (`..`, absolute paths, drive prefixes).
    pub fn resolve(&self, relative: &str) -> Option<PathBuf> {
        let relative = Path::new(relative.trim_start_matches('/'));
        let contained = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        contained.then(|| self.media_source().join(relative))
    }
}
