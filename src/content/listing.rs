//! Directory listings
//!
//! Both listings hide `.`/`_` names, keep only accepted formats, and return
//! their entries in natural order.

use std::fs;
use std::path::Path;

use walkdir::{DirEntry, WalkDir};

use super::natural::sort_naturally;
use super::{is_excluded, DirListing, FileEntry, FileFormats, TreeListing, STREAM_PREFIX};
use crate::error::Result;

/// Marker suffix for directories excluded from the recursive listing
pub const RESERVED_DIR_SUFFIX: &str = "__";

/// List matching files directly inside `parent`.
///
/// Each entry's `path` is `subdir` joined with the filename. Only the
/// extension is checked, so a directory named like a media file is listed
/// as one.
pub fn get_dir_stream_content<P, S>(parent: P, subdir: S, file_formats: &FileFormats) -> Result<DirListing>
where
    P: AsRef<Path>,
    S: AsRef<Path>,
{
    let parent = parent.as_ref();
    let subdir = subdir.as_ref();

    let mut files = Vec::new();
    for entry in fs::read_dir(parent)? {
        let entry = entry?;
        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            tracing::debug!("Skipping non UTF-8 entry {:?}", entry.path());
            continue;
        };
        if is_excluded(&name) || !file_formats.accepts(&name) {
            continue;
        }
        files.push(FileEntry::new(subdir, name));
    }
    sort_naturally(&mut files, |f| f.name.as_str());

    tracing::debug!("Listed {:?}: {} files", parent, files.len());
    Ok(DirListing { files })
}

/// Whether a directory path carries the reserved `__` marker.
///
/// Checked before descending, so the directory and everything below it
/// are left out.
pub fn is_reserved_dir(path: &Path) -> bool {
    path.as_os_str()
        .to_string_lossy()
        .trim_end_matches(std::path::MAIN_SEPARATOR)
        .ends_with(RESERVED_DIR_SUFFIX)
}

fn descend_into(entry: &DirEntry) -> bool {
    !(entry.file_type().is_dir() && is_reserved_dir(entry.path()))
}

/// Walk `video_source` and list what it holds.
///
/// Matching files directly under the root land in `files`; every
/// subdirectory holding at least one matching file appears once in
/// `directories`, named by its path relative to the root.
pub fn get_all_stream_content<P: AsRef<Path>>(video_source: P, file_formats: &FileFormats) -> Result<TreeListing> {
    let root = video_source.as_ref();
    let mut listing = TreeListing::default();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(descend_into);

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => return Err(e.into()),
            Err(e) => {
                tracing::warn!("Skipping unreadable path under {:?}: {}", root, e);
                continue;
            }
        };
        if entry.depth() == 0 || entry.path().is_dir() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            tracing::debug!("Skipping non UTF-8 entry {:?}", entry.path());
            continue;
        };
        if is_excluded(name) || !file_formats.accepts(name) {
            continue;
        }

        if entry.depth() == 1 {
            listing.files.push(FileEntry::new(STREAM_PREFIX, name));
            continue;
        }

        let Some(relative) = entry
            .path()
            .parent()
            .and_then(|dir| dir.strip_prefix(root).ok())
            .and_then(Path::to_str)
        else {
            continue;
        };
        let dir_entry = FileEntry::new(STREAM_PREFIX, relative);
        if !listing.directories.contains(&dir_entry) {
            listing.directories.push(dir_entry);
        }
    }

    sort_naturally(&mut listing.files, |f| f.name.as_str());
    sort_naturally(&mut listing.directories, |d| d.name.as_str());

    tracing::debug!(
        "Walked {:?}: {} files, {} directories",
        root,
        listing.files.len(),
        listing.directories.len()
    );
    Ok(listing)
}
