//! Install execution for catalog entries
//!
//! This module handles:
//! - Copying a bundle directory or a command file into a platform's target root
//! - Replacing any previous install (last write wins, no merge, no backup)
//! - Converting every file-system failure into an [`InstallOutcome`]
//!
//! [`install_entry`] is the only place where IO errors become outcomes; callers
//! above it never see a file-system error.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

pub mod file_ops;
pub mod status;

use crate::catalog::{self, CatalogAccess};
use crate::config::SourceLayout;
use crate::domain::{CatalogEntry, EntryKind, InstallOutcome, InstallState};
use crate::error::InstallError;
use crate::platform::Platform;

/// Installs entries from one source layout into one platform
#[derive(Debug, Clone)]
pub struct Installer {
    layout: SourceLayout,
    platform: Platform,
    home: PathBuf,
}

impl Installer {
    pub fn new(layout: SourceLayout, platform: Platform, home: impl Into<PathBuf>) -> Self {
        Self {
            layout,
            platform,
            home: home.into(),
        }
    }

    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    pub fn layout(&self) -> &SourceLayout {
        &self.layout
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Same sources, different target platform
    pub fn for_platform(&self, platform: Platform) -> Self {
        Self {
            layout: self.layout.clone(),
            platform,
            home: self.home.clone(),
        }
    }

    pub fn catalog_root(&self, kind: EntryKind) -> PathBuf {
        self.layout.catalog_root(kind, &self.platform)
    }

    pub fn target_root(&self, kind: EntryKind) -> PathBuf {
        self.platform.target_root(&self.home, kind)
    }
}

impl CatalogAccess for Installer {
    fn list(&self, kind: EntryKind) -> Vec<CatalogEntry> {
        let root = self.catalog_root(kind);
        match kind {
            EntryKind::Bundle => catalog::list_bundles(&root),
            EntryKind::File => catalog::list_files(&root),
        }
    }

    fn resolve_status(&self, entry: &CatalogEntry) -> InstallState {
        status::resolve_status(entry, &self.target_root(entry.kind))
    }

    fn install(&self, entry: &CatalogEntry) -> InstallOutcome {
        install_entry(
            entry,
            &self.catalog_root(entry.kind),
            &self.target_root(entry.kind),
        )
    }
}

/// Install one entry, replacing any existing target
pub fn install_entry(
    entry: &CatalogEntry,
    catalog_root: &Path,
    target_root: &Path,
) -> InstallOutcome {
    let Some(target) = entry.contained_target(target_root) else {
        debug!(name = %entry.name, "name is not a plain file name");
        return InstallOutcome::failed(
            &entry.name,
            InstallError::source_entry_missing(&entry.source_path),
        );
    };

    if !catalog_root.is_dir() {
        debug!(root = %catalog_root.display(), "source directory missing");
        return InstallOutcome::failed(
            &entry.name,
            InstallError::source_root_missing(catalog_root),
        );
    }

    let source = &entry.source_path;
    let present = match entry.kind {
        EntryKind::Bundle => source.is_dir(),
        EntryKind::File => source.is_file(),
    };
    if !present {
        debug!(source = %source.display(), "source entry missing");
        return InstallOutcome::failed(&entry.name, InstallError::source_entry_missing(source));
    }

    match replace_target(entry, &target) {
        Ok(()) => {
            info!(name = %entry.name, target = %target.display(), "installed");
            InstallOutcome::succeeded(&entry.name)
        }
        Err(failure) => {
            debug!(
                name = %entry.name,
                path = %failure.path.display(),
                error = %failure.error,
                "install failed"
            );
            InstallOutcome::failed(
                &entry.name,
                InstallError::from_io(&failure.path, &failure.error),
            )
        }
    }
}

fn replace_target(entry: &CatalogEntry, target: &Path) -> file_ops::FsResult<()> {
    if file_ops::remove_existing(target)? {
        info!(name = %entry.name, "overwriting existing install");
    }

    match entry.kind {
        EntryKind::Bundle => {
            file_ops::ensure_parent_dir(target)?;
            let copied = file_ops::copy_dir_recursive(&entry.source_path, target)?;
            debug!(name = %entry.name, files = copied, "copied bundle");
        }
        EntryKind::File => file_ops::copy_file(&entry.source_path, target)?,
    }
    Ok(())
}
