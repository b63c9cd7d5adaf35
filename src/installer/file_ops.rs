//! Basic file operations for installs
//!
//! This module handles low-level file operations:
//! - Directory creation (ensure_parent_dir)
//! - Removing a previous install (remove_existing)
//! - Recursive directory copy (copy_dir_recursive) and single file copy (copy_file)
//!
//! Every failure carries the path it happened on so the caller can report it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

/// An IO error together with the path that produced it
#[derive(Debug)]
pub struct FsFailure {
    pub path: PathBuf,
    pub error: io::Error,
}

impl FsFailure {
    fn at(path: &Path) -> impl FnOnce(io::Error) -> Self + '_ {
        move |error| Self {
            path: path.to_path_buf(),
            error,
        }
    }
}

pub type FsResult<T> = std::result::Result<T, FsFailure>;

/// Ensure parent directory exists for a path
pub fn ensure_parent_dir(path: &Path) -> FsResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(FsFailure::at(parent))?;
    }
    Ok(())
}

/// Remove whatever occupies `target` (directory tree, file or symlink)
///
/// Returns whether anything was removed.
pub fn remove_existing(target: &Path) -> FsResult<bool> {
    let Ok(meta) = fs::symlink_metadata(target) else {
        return Ok(false);
    };

    debug!(target = %target.display(), "removing previous install");
    if meta.is_dir() {
        fs::remove_dir_all(target).map_err(FsFailure::at(target))?;
    } else {
        fs::remove_file(target).map_err(FsFailure::at(target))?;
    }
    Ok(true)
}

/// Copy a directory tree, creating `dst` and any missing parents
///
/// Returns the number of files copied.
pub fn copy_dir_recursive(src: &Path, dst: &Path) -> FsResult<usize> {
    fs::create_dir_all(dst).map_err(FsFailure::at(dst))?;

    let mut copied = 0;
    for entry in WalkDir::new(src).min_depth(1).follow_links(true) {
        let entry = entry.map_err(|e| FsFailure {
            path: e.path().unwrap_or(src).to_path_buf(),
            error: e.into(),
        })?;
        let relative = entry.path().strip_prefix(src).unwrap_or(entry.path());
        let target = dst.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(FsFailure::at(&target))?;
        } else {
            fs::copy(entry.path(), &target).map_err(FsFailure::at(&target))?;
            copied += 1;
        }
    }

    Ok(copied)
}

/// Copy a single file, creating missing parent directories first
///
/// `fs::copy` carries the permission bits over with the content.
pub fn copy_file(src: &Path, dst: &Path) -> FsResult<()> {
    ensure_parent_dir(dst)?;
    fs::copy(src, dst).map_err(FsFailure::at(dst))?;
    Ok(())
}
