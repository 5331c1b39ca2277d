use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the media catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A directory or file could not be read or written
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The root of a recursive walk could not be read
    #[error("Directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    /// The requested file is absent from its own directory listing
    #[error("'{name}' is not listed in {directory:?} for the accepted formats")]
    NotListed { name: String, directory: PathBuf },

    /// A subtitle block has no timecode line
    #[error("Malformed subtitle block #{block}: expected at least 2 lines, found {lines}")]
    MalformedSubtitle { block: usize, lines: usize },

    /// A listing could not be serialized into a snapshot file
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Server configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, CatalogError>;
