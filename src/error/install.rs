//! Per-item install failures
//!
//! These are reported through `InstallOutcome::error` so a caller can branch on
//! the cause without a batch ever being aborted.

use std::path::Path;

use thiserror::Error;

/// Why a single install attempt failed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InstallError {
    /// The catalog root for this kind of entry does not exist at all
    #[error("Source directory does not exist: {path}")]
    SourceRootMissing { path: String },

    /// The catalog root exists but the entry is gone from it
    #[error("Source entry does not exist: {path}")]
    SourceEntryMissing { path: String },

    #[error("Permission denied: {path}: {reason}")]
    PermissionDenied { path: String, reason: String },

    #[error("Copy failed: {path}: {reason}")]
    CopyFailed { path: String, reason: String },
}

impl InstallError {
    pub fn source_root_missing(path: &Path) -> Self {
        Self::SourceRootMissing {
            path: path.display().to_string(),
        }
    }

    pub fn source_entry_missing(path: &Path) -> Self {
        Self::SourceEntryMissing {
            path: path.display().to_string(),
        }
    }

    /// Classify an IO error raised while touching `path`
    pub fn from_io(path: &Path, err: &std::io::Error) -> Self {
        let path = path.display().to_string();
        let reason = err.to_string();
        if err.kind() == std::io::ErrorKind::PermissionDenied {
            Self::PermissionDenied { path, reason }
        } else {
            Self::CopyFailed { path, reason }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_permission_denied_is_classified() {
        let err = Error::new(ErrorKind::PermissionDenied, "nope");
        let install_err = InstallError::from_io(Path::new("/target/skill"), &err);
        assert!(matches!(install_err, InstallError::PermissionDenied { .. }));
        assert!(install_err.to_string().contains("/target/skill"));
    }

    #[test]
    fn test_other_io_errors_are_copy_failures() {
        let err = Error::other("disk full");
        let install_err = InstallError::from_io(Path::new("/target/skill"), &err);
        assert!(matches!(install_err, InstallError::CopyFailed { .. }));
    }

    #[test]
    fn test_missing_variants_mention_path() {
        let root = InstallError::source_root_missing(Path::new("/repo/skills"));
        let entry = InstallError::source_entry_missing(Path::new("/repo/skills/alpha"));
        assert!(matches!(root, InstallError::SourceRootMissing { .. }));
        assert_ne!(root, entry);
        assert!(root.to_string().contains("/repo/skills"));
        assert!(entry.to_string().contains("/repo/skills/alpha"));
    }
}
