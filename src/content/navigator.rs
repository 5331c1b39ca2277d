//! Previous/next lookup among a file's siblings

use std::fs;
use std::path::Path;

use super::natural::sort_naturally;
use super::{FileFormats, Navigation};
use crate::error::{CatalogError, Result};

/// Find the files immediately before and after `filepath` in its directory.
///
/// Siblings are the accepted-format entries of the parent directory in
/// natural order. Unlike the listings, hidden and `_` names are not
/// filtered out here. A file that is not itself in that sequence (for
/// example because its extension is not accepted) is an error.
pub fn get_iter<P: AsRef<Path>>(filepath: P, file_formats: &FileFormats) -> Result<Navigation> {
    let filepath = filepath.as_ref();
    let parent = match filepath.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let not_listed = || CatalogError::NotListed {
        name: filepath.to_string_lossy().into_owned(),
        directory: parent.to_path_buf(),
    };
    let name = filepath
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(not_listed)?;

    let mut siblings = Vec::new();
    for entry in fs::read_dir(parent)? {
        let entry = entry?;
        if let Some(sibling) = entry.file_name().to_str() {
            if file_formats.accepts(sibling) {
                siblings.push(sibling.to_owned());
            }
        }
    }
    sort_naturally(&mut siblings, String::as_str);

    let idx = siblings
        .iter()
        .position(|s| s == name)
        .ok_or_else(not_listed)?;

    let previous = idx
        .checked_sub(1)
        .map(|i| siblings[i].clone())
        .filter(|prev| prev != name);
    let next = siblings.get(idx + 1).cloned();

    tracing::debug!(
        "Navigation for {:?}: previous={:?}, next={:?}",
        filepath,
        previous,
        next
    );
    Ok(Navigation { previous, next })
}
