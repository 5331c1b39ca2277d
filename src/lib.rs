//! Media catalog
//!
//! Lists media files in a library tree in natural order, finds the
//! previous/next file for playback navigation, and converts SubRip
//! captions to WebVTT. The `http` module serves all of it as a JSON API.

pub mod config;
pub mod config_file;
pub mod content;
pub mod error;
pub mod http;
pub mod state;
pub mod subtitle;

#[cfg(test)]
pub(crate) mod integration;

pub use content::{
    get_all_stream_content, get_dir_stream_content, get_iter, persist_all_stream_content,
    persist_dir_stream_content, DirListing, FileEntry, FileFormats, Navigation, TreeListing,
};
pub use error::{CatalogError, Result};
pub use subtitle::srt_to_vtt;
