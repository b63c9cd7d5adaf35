//! Platform registry for managing platform definitions
//!
//! This module provides:
//! - Platform registration and lookup
//! - Default platform definitions

use std::collections::HashMap;

use super::Platform;
use crate::error::{Result, SkillsetError};

/// Registry of all known platforms, in definition order
pub struct PlatformRegistry {
    platforms: Vec<Platform>,
    by_id: HashMap<String, usize>,
}

impl PlatformRegistry {
    /// Create a new registry with the given platforms
    pub fn new(platforms: Vec<Platform>) -> Self {
        let by_id: HashMap<String, usize> = platforms
            .iter()
            .enumerate()
            .map(|(idx, p)| (p.id.to_lowercase(), idx))
            .collect();

        Self { platforms, by_id }
    }

    /// Get a platform by its ID (case-insensitive)
    pub fn get_by_id(&self, id: &str) -> Result<&Platform> {
        self.by_id
            .get(&id.to_lowercase())
            .and_then(|&idx| self.platforms.get(idx))
            .ok_or_else(|| SkillsetError::PlatformNotSupported {
                platform: id.to_string(),
                supported: self.ids().join(", "),
            })
    }

    /// Get all platforms in the registry
    pub fn all(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn ids(&self) -> Vec<String> {
        self.platforms.iter().map(|p| p.id.clone()).collect()
    }
}

impl Default for PlatformRegistry {
    fn default() -> Self {
        Self::new(default_platforms())
    }
}

/// Get default platform definitions
///
/// Codex reads commands as prompts and shares the Claude command set.
pub fn default_platforms() -> Vec<Platform> {
    vec![
        Platform::new("claude", "Claude", ".claude").with_prompt_file("CLAUDE.md"),
        Platform::new("codex", "Codex", ".codex")
            .with_commands_dir("prompts")
            .with_command_set("claude"),
        Platform::new("gemini", "Gemini", ".gemini"),
    ]
}
