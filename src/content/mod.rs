//! Media content discovery
//!
//! This module turns directory trees into caller-facing listings:
//! - Natural ordering of filenames
//! - Single-directory and recursive listings filtered by accepted formats
//! - Previous/next sibling lookup for playback navigation
//! - Timestamped JSON snapshots of listings

pub mod listing;
pub mod natural;
pub mod navigator;
pub mod snapshot;

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub use listing::{get_all_stream_content, get_dir_stream_content};
pub use natural::{natural_cmp, natural_sort_key, Token};
pub use navigator::get_iter;
pub use snapshot::{persist_all_stream_content, persist_dir_stream_content};

/// Logical prefix under which recursive listings are presented
pub const STREAM_PREFIX: &str = "stream";

/// Set of accepted file extensions, each including its leading `.`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileFormats(BTreeSet<String>);

impl FileFormats {
    pub fn new<I, S>(formats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(formats.into_iter().map(Into::into).collect())
    }

    /// Whether the final suffix of `name` is one of the accepted formats.
    pub fn accepts(&self, name: &str) -> bool {
        suffix(name).is_some_and(|ext| self.0.contains(ext))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for FileFormats {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Final suffix of a bare filename including its `.`, e.g. `.mp4`.
///
/// A name whose only `.` is the leading one, or that ends in `.`, has none.
pub fn suffix(name: &str) -> Option<&str> {
    let idx = name.rfind('.')?;
    if idx == 0 || idx + 1 == name.len() {
        return None;
    }
    Some(&name[idx..])
}

/// Hidden (`.`) and reserved (`_`) names never show up in listings
pub fn is_excluded(name: &str) -> bool {
    name.starts_with('_') || name.starts_with('.')
}

/// A listed file or directory
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileEntry {
    /// Bare filename, or relative directory path for directory entries
    pub name: String,
    /// Caller-facing logical path
    pub path: String,
}

impl FileEntry {
    pub fn new(prefix: impl AsRef<Path>, name: impl Into<String>) -> Self {
        let name = name.into();
        let path = prefix.as_ref().join(&name).to_string_lossy().into_owned();
        Self { name, path }
    }
}

/// Result of listing one directory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirListing {
    pub files: Vec<FileEntry>,
}

/// Result of listing a whole media tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeListing {
    /// Matching files directly under the root
    pub files: Vec<FileEntry>,
    /// Subdirectories holding at least one matching file
    pub directories: Vec<FileEntry>,
}

/// Neighbours of a file within its directory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Navigation {
    pub previous: Option<String>,
    pub next: Option<String>,
}
