//! Platform configuration loading and merging
//!
//! This module loads platform definitions from `platforms.jsonc` files and
//! merges them over the built-in definitions.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{Platform, default_platforms};
use crate::error::{Result, SkillsetError};

/// File name looked up in the source root and the user config directory
pub const PLATFORMS_FILE: &str = "platforms.jsonc";

/// Platform configuration loader
pub struct PlatformLoader {
    /// Repository holding skills/ and commands/
    source_root: PathBuf,
    /// Per-user config directory; `None` skips the global file
    config_dir: Option<PathBuf>,
}

impl PlatformLoader {
    /// Create a loader using `<config_dir>/skillset` for global overrides
    pub fn new(source_root: impl Into<PathBuf>) -> Self {
        Self {
            source_root: source_root.into(),
            config_dir: dirs::config_dir().map(|dir| dir.join("skillset")),
        }
    }

    /// Override (or disable) the global config directory
    #[cfg(test)]
    pub fn with_config_dir(mut self, config_dir: Option<PathBuf>) -> Self {
        self.config_dir = config_dir;
        self
    }

    /// Load platforms from multiple sources
    ///
    /// Priority order (later sources override earlier ones):
    /// 1. Built-in platforms
    /// 2. `platforms.jsonc` in the source root (if exists)
    /// 3. `platforms.jsonc` in the user config directory (if exists)
    pub fn load(&self) -> Result<Vec<Platform>> {
        let mut platforms = default_platforms();

        if let Some(repo_platforms) = Self::load_file(&self.source_root.join(PLATFORMS_FILE))? {
            platforms = Self::merge_platforms(platforms, repo_platforms);
        }

        if let Some(dir) = &self.config_dir {
            if let Some(global_platforms) = Self::load_file(&dir.join(PLATFORMS_FILE))? {
                platforms = Self::merge_platforms(platforms, global_platforms);
            }
        }

        Ok(platforms)
    }

    fn load_file(path: &Path) -> Result<Option<Vec<Platform>>> {
        if !path.exists() {
            return Ok(None);
        }
        debug!(path = %path.display(), "loading platform overrides");

        let content = fs::read_to_string(path).map_err(|e| SkillsetError::ConfigReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let json = strip_jsonc_comments(&content);
        parse_platforms_json(&json, &path.display().to_string()).map(Some)
    }

    /// Later platforms replace earlier ones with the same id; new ids are appended
    fn merge_platforms(base: Vec<Platform>, overrides: Vec<Platform>) -> Vec<Platform> {
        let mut merged = base;

        for platform in overrides {
            if let Some(pos) = merged.iter().position(|p| p.id == platform.id) {
                merged[pos] = platform;
            } else {
                merged.push(platform);
            }
        }

        merged
    }
}

/// Parse platforms JSON, accepting a bare array or `{ "platforms": [...] }`
fn parse_platforms_json(json: &str, path: &str) -> Result<Vec<Platform>> {
    let parse_err = |reason: String| SkillsetError::ConfigParseFailed {
        path: path.to_string(),
        reason,
    };

    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|e| parse_err(e.to_string()))?;

    let array = match value {
        serde_json::Value::Array(_) => value,
        serde_json::Value::Object(mut obj) => match obj.remove("platforms") {
            Some(list @ serde_json::Value::Array(_)) => list,
            Some(_) => return Err(parse_err("platforms field must be an array".to_string())),
            None => {
                return Err(parse_err(
                    "Expected array of platforms or object with 'platforms' key".to_string(),
                ));
            }
        },
        _ => {
            return Err(parse_err(
                "Expected array of platforms or object with 'platforms' key".to_string(),
            ));
        }
    };

    serde_json::from_value(array).map_err(|e| parse_err(e.to_string()))
}

/// Remove `//` and `/* */` comments outside of string literals
fn strip_jsonc_comments(content: &str) -> String {
    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();
    let mut in_string = false;
    let mut escaped = false;

    while let Some(c) = chars.next() {
        if in_string {
            result.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match (c, chars.peek()) {
            ('/', Some('/')) => {
                for next in chars.by_ref() {
                    if next == '\n' {
                        result.push('\n');
                        break;
                    }
                }
            }
            ('/', Some('*')) => {
                chars.next();
                let mut prev = '\0';
                for next in chars.by_ref() {
                    if prev == '*' && next == '/' {
                        break;
                    }
                    prev = next;
                }
            }
            ('"', _) => {
                in_string = true;
                result.push(c);
            }
            _ => result.push(c),
        }
    }

    result
}
