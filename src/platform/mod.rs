//! Target platform definitions
//!
//! This module handles:
//! - Platform definitions (where bundles, commands and prompts land)
//! - Platform registration and lookup (via PlatformRegistry)
//! - Loading user and repository overrides (via PlatformLoader)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub mod loader;
pub mod registry;

pub use loader::PlatformLoader;
pub use registry::PlatformRegistry;

use crate::domain::EntryKind;

fn default_bundles_dir() -> String {
    "skills".to_string()
}

fn default_commands_dir() -> String {
    "commands".to_string()
}

/// A supported AI coding platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platform {
    /// Platform identifier (e.g., "claude", "codex", "gemini")
    pub id: String,

    /// Display name for the platform
    pub name: String,

    /// Directory under the home directory (e.g., ".claude")
    pub directory: String,

    /// Subdirectory receiving bundles
    #[serde(default = "default_bundles_dir")]
    pub bundles: String,

    /// Subdirectory receiving command files
    #[serde(default = "default_commands_dir")]
    pub commands: String,

    /// Which `commands/<set>/` source directory feeds this platform; defaults to the id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command_set: Option<String>,

    /// Global prompt file name, if the platform has one (e.g., "CLAUDE.md")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_file: Option<String>,
}

impl Platform {
    /// Create a new platform with the default `skills`/`commands` layout
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        directory: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            directory: directory.into(),
            bundles: default_bundles_dir(),
            commands: default_commands_dir(),
            command_set: None,
            prompt_file: None,
        }
    }

    pub fn with_commands_dir(mut self, dir: impl Into<String>) -> Self {
        self.commands = dir.into();
        self
    }

    pub fn with_command_set(mut self, set: impl Into<String>) -> Self {
        self.command_set = Some(set.into());
        self
    }

    pub fn with_prompt_file(mut self, file: impl Into<String>) -> Self {
        self.prompt_file = Some(file.into());
        self
    }

    /// Name of the command source set
    pub fn command_set(&self) -> &str {
        self.command_set.as_deref().unwrap_or(&self.id)
    }

    /// Get the platform directory path
    pub fn base_path(&self, home: &Path) -> PathBuf {
        home.join(&self.directory)
    }

    /// Target root for one kind of entry
    pub fn target_root(&self, home: &Path, kind: EntryKind) -> PathBuf {
        let sub = match kind {
            EntryKind::Bundle => &self.bundles,
            EntryKind::File => &self.commands,
        };
        self.base_path(home).join(sub)
    }

    pub fn prompt_path(&self, home: &Path) -> Option<PathBuf> {
        self.prompt_file
            .as_ref()
            .map(|file| self.base_path(home).join(file))
    }
}

/// Get default platform definitions
pub fn default_platforms() -> Vec<Platform> {
    registry::default_platforms()
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_platform_new_defaults() {
        let platform = Platform::new("test", "Test Platform", ".test");
        assert_eq!(platform.id, "test");
        assert_eq!(platform.bundles, "skills");
        assert_eq!(platform.commands, "commands");
        assert_eq!(platform.command_set(), "test");
        assert!(platform.prompt_file.is_none());
    }

    #[test]
    fn test_target_roots() {
        let platform = Platform::new("codex", "Codex", ".codex").with_commands_dir("prompts");
        let home = Path::new("/home/u");
        assert_eq!(
            platform.target_root(home, EntryKind::Bundle),
            PathBuf::from("/home/u/.codex/skills")
        );
        assert_eq!(
            platform.target_root(home, EntryKind::File),
            PathBuf::from("/home/u/.codex/prompts")
        );
        assert!(platform.prompt_path(home).is_none());
    }

    #[test]
    fn test_prompt_path() {
        let platform = Platform::new("claude", "Claude", ".claude").with_prompt_file("CLAUDE.md");
        assert_eq!(
            platform.prompt_path(Path::new("/h")),
            Some(PathBuf::from("/h/.claude/CLAUDE.md"))
        );
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let json = r#"{"id":"qwen","name":"Qwen","directory":".qwen"}"#;
        let platform: Platform = serde_json::from_str(json).unwrap();
        assert_eq!(platform.bundles, "skills");
        assert_eq!(platform.commands, "commands");
        assert_eq!(platform.command_set(), "qwen");
    }
}
