//! Installed-state resolution
//!
//! Status is derived from the file system on every call and never cached.

use std::path::Path;

use crate::domain::{CatalogEntry, InstallState};

/// Whether `entry` is present under `target_root`
///
/// Bundles are checked as `<root>/<name>`, files as `<root>/<stem>.<ext>`.
/// A missing target (or target root) is simply `NotInstalled`.
pub fn resolve_status(entry: &CatalogEntry, target_root: &Path) -> InstallState {
    if entry.target_path(target_root).exists() {
        InstallState::Installed
    } else {
        InstallState::NotInstalled
    }
}
