//! Global prompt file management
//!
//! A platform with a `prompt_file` keeps one global prompt under its home
//! directory. `update` replaces it from `prompts/<file>` in the source root
//! (backing up the old one first), `diff` compares the two.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tracing::{debug, info};

use crate::config::SourceLayout;
use crate::error::{Result, SkillsetError};
use crate::hash;
use crate::platform::Platform;

const BACKUP_TIMESTAMP: &str = "%Y%m%d_%H%M%S";

/// Local and global locations of a platform's prompt file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPaths {
    pub local: PathBuf,
    pub global: PathBuf,
}

impl PromptPaths {
    /// Fails when the platform has no prompt file or the local copy is missing
    pub fn resolve(platform: &Platform, layout: &SourceLayout, home: &Path) -> Result<Self> {
        let (Some(file), Some(global)) = (&platform.prompt_file, platform.prompt_path(home)) else {
            return Err(SkillsetError::PromptNotSupported {
                platform: platform.id.clone(),
            });
        };

        let local = layout.prompts_dir().join(file);
        if !local.is_file() {
            return Err(SkillsetError::PromptNotFound {
                path: local.display().to_string(),
            });
        }

        Ok(Self { local, global })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptUpdate {
    pub target: PathBuf,
    /// Where the previous global prompt was saved, if there was one
    pub backup: Option<PathBuf>,
}

/// Copy the local prompt over the global one, backing up the old file
pub fn update_prompt(paths: &PromptPaths) -> Result<PromptUpdate> {
    update_prompt_at(paths, Local::now())
}

pub fn update_prompt_at(paths: &PromptPaths, now: DateTime<Local>) -> Result<PromptUpdate> {
    let global = &paths.global;
    if let Some(parent) = global.parent() {
        fs::create_dir_all(parent).map_err(write_failed(parent))?;
    }

    let backup = if global.exists() {
        let backup = free_backup_path(global, now);
        debug!(backup = %backup.display(), "backing up global prompt");
        fs::copy(global, &backup).map_err(write_failed(&backup))?;
        Some(backup)
    } else {
        None
    };

    fs::copy(&paths.local, global).map_err(write_failed(global))?;
    info!(target = %global.display(), "global prompt updated");

    Ok(PromptUpdate {
        target: global.clone(),
        backup,
    })
}

/// `<file>.backup.<YYYYmmdd_HHMMSS>` next to the global prompt
pub fn backup_path(global: &Path, now: DateTime<Local>) -> PathBuf {
    let name = global
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    global.with_file_name(format!("{name}.backup.{}", now.format(BACKUP_TIMESTAMP)))
}

/// [`backup_path`], suffixed `.1`, `.2`, ... while that name is taken
fn free_backup_path(global: &Path, now: DateTime<Local>) -> PathBuf {
    let base = backup_path(global, now);
    let mut candidate = base.clone();
    let mut n = 1;
    while candidate.exists() {
        let mut name = base.as_os_str().to_os_string();
        name.push(format!(".{n}"));
        candidate = PathBuf::from(name);
        n += 1;
    }
    candidate
}

fn write_failed(path: &Path) -> impl FnOnce(std::io::Error) -> SkillsetError + '_ {
    move |e| SkillsetError::FileWriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

/// One line of a prompt diff
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffLine {
    /// Only in the global prompt
    Removed(String),
    /// Only in the local prompt
    Added(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptDiff {
    Identical,
    GlobalMissing,
    Changed(Vec<DiffLine>),
}

/// Compare the global prompt against the local one
pub fn diff_prompt(paths: &PromptPaths) -> Result<PromptDiff> {
    if !paths.global.is_file() {
        return Ok(PromptDiff::GlobalMissing);
    }
    if hash::same_content(&paths.local, &paths.global)? {
        return Ok(PromptDiff::Identical);
    }

    let global = read(&paths.global)?;
    let local = read(&paths.local)?;
    Ok(PromptDiff::Changed(diff_lines(&global, &local)))
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| SkillsetError::FileReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Changed lines between `old` and `new`, in file order
///
/// Lines common to both (longest common subsequence) are omitted.
pub fn diff_lines(old: &str, new: &str) -> Vec<DiffLine> {
    let old: Vec<&str> = old.lines().collect();
    let new: Vec<&str> = new.lines().collect();

    // lcs[i][j]: common subsequence length of old[i..] and new[j..]
    let mut lcs = vec![vec![0usize; new.len() + 1]; old.len() + 1];
    for i in (0..old.len()).rev() {
        for j in (0..new.len()).rev() {
            lcs[i][j] = if old[i] == new[j] {
                lcs[i + 1][j + 1] + 1
            } else {
                lcs[i + 1][j].max(lcs[i][j + 1])
            };
        }
    }

    let mut diff = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < old.len() && j < new.len() {
        if old[i] == new[j] {
            i += 1;
            j += 1;
        } else if lcs[i + 1][j] >= lcs[i][j + 1] {
            diff.push(DiffLine::Removed(old[i].to_string()));
            i += 1;
        } else {
            diff.push(DiffLine::Added(new[j].to_string()));
            j += 1;
        }
    }
    diff.extend(old[i..].iter().map(|l| DiffLine::Removed((*l).to_string())));
    diff.extend(new[j..].iter().map(|l| DiffLine::Added((*l).to_string())));
    diff
}
