//! Catalog listing from a source root
//!
//! Listing is a pure read. A missing root means "nothing available" and yields
//! an empty catalog rather than an error.

use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use super::manifest;
use crate::domain::CatalogEntry;

/// Immediate children of `root`, sorted by file name, hidden entries skipped
fn children(root: &Path) -> Vec<DirEntry> {
    if !root.is_dir() {
        debug!(root = %root.display(), "catalog root missing");
        return Vec::new();
    }

    WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                warn!(root = %root.display(), error = %err, "skipping unreadable catalog entry");
                None
            }
        })
        .filter(|entry| !entry.file_name().to_string_lossy().starts_with('.'))
        .collect()
}

/// List bundle directories under `root`
pub fn list_bundles(root: &Path) -> Vec<CatalogEntry> {
    let mut entries: Vec<CatalogEntry> = children(root)
        .into_iter()
        .filter(|entry| entry.file_type().is_dir())
        .map(|entry| {
            let name = entry.file_name().to_string_lossy().into_owned();
            let description = manifest::read_description(entry.path());
            CatalogEntry::bundle(name, entry.into_path(), description)
        })
        .collect();

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    entries
}

/// List command files under `root`, named by file stem
///
/// Two files sharing a stem would share a name; the first in file-name order
/// is kept and the rest are skipped with a warning.
pub fn list_files(root: &Path) -> Vec<CatalogEntry> {
    let mut seen = HashSet::new();
    let mut entries: Vec<CatalogEntry> = children(root)
        .into_iter()
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| {
            let path = entry.into_path();
            let stem = path.file_stem()?.to_string_lossy().into_owned();
            let extension = path
                .extension()
                .map(|ext| ext.to_string_lossy().into_owned());
            if !seen.insert(stem.clone()) {
                warn!(path = %path.display(), "duplicate command name, skipping");
                return None;
            }
            Some(CatalogEntry::file(stem, path, extension))
        })
        .collect();

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    entries
}
