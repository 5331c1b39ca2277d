//! Listing snapshots
//!
//! Same listings as [`super::listing`], written to a timestamp-named JSON
//! file instead of being returned. The file name is what callers get back.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use serde::Serialize;

use super::listing::{get_all_stream_content, get_dir_stream_content};
use super::FileFormats;
use crate::error::Result;

const DIR_SNAPSHOT_PREFIX: &str = "temp_dir";
const ALL_SNAPSHOT_PREFIX: &str = "temp_all";
const TIMESTAMP_FORMAT: &str = "%d-%m-%Y_%H:%M:%S";

fn snapshot_path(dir: &Path, prefix: &str) -> PathBuf {
    let stamp = Local::now().format(TIMESTAMP_FORMAT);
    dir.join(format!("{prefix}_{stamp}.json"))
}

fn write_snapshot<T: Serialize>(dir: &Path, prefix: &str, payload: &T) -> Result<PathBuf> {
    let path = snapshot_path(dir, prefix);
    let content = serde_json::to_string(payload)?;
    fs::write(&path, content)?;
    tracing::debug!("Wrote listing snapshot {:?}", path);
    Ok(path)
}

/// Single-directory listing persisted under `out_dir`
pub fn persist_dir_stream_content_in<P, S>(
    out_dir: &Path,
    parent: P,
    subdir: S,
    file_formats: &FileFormats,
) -> Result<PathBuf>
where
    P: AsRef<Path>,
    S: AsRef<Path>,
{
    let listing = get_dir_stream_content(parent, subdir, file_formats)?;
    write_snapshot(out_dir, DIR_SNAPSHOT_PREFIX, &listing)
}

/// Recursive listing persisted under `out_dir`
pub fn persist_all_stream_content_in<P: AsRef<Path>>(
    out_dir: &Path,
    video_source: P,
    file_formats: &FileFormats,
) -> Result<PathBuf> {
    let listing = get_all_stream_content(video_source, file_formats)?;
    write_snapshot(out_dir, ALL_SNAPSHOT_PREFIX, &listing)
}

/// Single-directory listing persisted to `temp_dir_<timestamp>.json` in the
/// current working directory.
pub fn persist_dir_stream_content<P, S>(parent: P, subdir: S, file_formats: &FileFormats) -> Result<PathBuf>
where
    P: AsRef<Path>,
    S: AsRef<Path>,
{
    let cwd = std::env::current_dir()?;
    persist_dir_stream_content_in(&cwd, parent, subdir, file_formats)
}

/// Recursive listing persisted to `temp_all_<timestamp>.json` in the
/// current working directory.
pub fn persist_all_stream_content<P: AsRef<Path>>(video_source: P, file_formats: &FileFormats) -> Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    persist_all_stream_content_in(&cwd, video_source, file_formats)
}
