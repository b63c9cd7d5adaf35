//! Source and target location configuration
//!
//! The source root is the repository checkout that holds the catalog:
//!
//! ```text
//! <source>/
//!   skills/<bundle>/SKILL.md     one directory per bundle
//!   commands/<set>/<name>.md     one file per command, grouped by command set
//!   prompts/CLAUDE.md            global prompt files
//!   platforms.jsonc              optional platform overrides
//! ```
//!
//! The target home is the directory platform directories (`.claude`, ...) live in.

use std::path::{Path, PathBuf};

use crate::domain::EntryKind;
use crate::error::{Result, SkillsetError};
use crate::platform::Platform;

pub const SKILLS_DIR: &str = "skills";
pub const COMMANDS_DIR: &str = "commands";
pub const PROMPTS_DIR: &str = "prompts";

/// Read-only locations inside the source repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLayout {
    root: PathBuf,
}

impl SourceLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve the source root from an explicit path or the current directory
    pub fn resolve(explicit: Option<PathBuf>) -> Result<Self> {
        match explicit {
            Some(path) => Ok(Self::new(path)),
            None => std::env::current_dir()
                .map(Self::new)
                .map_err(|e| SkillsetError::IoError {
                    message: format!("Failed to get current directory: {e}"),
                }),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn skills_dir(&self) -> PathBuf {
        self.root.join(SKILLS_DIR)
    }

    /// Command files for a platform's command set
    pub fn commands_dir(&self, platform: &Platform) -> PathBuf {
        self.root.join(COMMANDS_DIR).join(platform.command_set())
    }

    pub fn prompts_dir(&self) -> PathBuf {
        self.root.join(PROMPTS_DIR)
    }

    /// Catalog root for one kind of entry
    pub fn catalog_root(&self, kind: EntryKind, platform: &Platform) -> PathBuf {
        match kind {
            EntryKind::Bundle => self.skills_dir(),
            EntryKind::File => self.commands_dir(platform),
        }
    }
}

/// Resolve the target home from an explicit path or the user's home directory
pub fn resolve_home(explicit: Option<PathBuf>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path),
        None => dirs::home_dir().ok_or(SkillsetError::HomeNotFound),
    }
}
