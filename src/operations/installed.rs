//! Listing what is already installed for a platform

use std::fmt;
use std::path::Path;

use walkdir::WalkDir;

/// Where an installed bundle came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// A bundle of the same name exists in the source root
    Repository,
    /// Installed by something else
    External,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Repository => f.write_str("This repository"),
            Origin::External => f.write_str("External"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledBundle {
    pub name: String,
    pub origin: Origin,
}

/// Bundles under `target_root`, sorted by name
///
/// Returns `None` when the target root does not exist.
pub fn list_installed(target_root: &Path, skills_dir: &Path) -> Option<Vec<InstalledBundle>> {
    if !target_root.is_dir() {
        return None;
    }

    let installed = WalkDir::new(target_root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_dir())
        .map(|e| {
            let name = e.file_name().to_string_lossy().to_string();
            let origin = if skills_dir.join(&name).is_dir() {
                Origin::Repository
            } else {
                Origin::External
            };
            InstalledBundle { name, origin }
        })
        .collect();

    Some(installed)
}
