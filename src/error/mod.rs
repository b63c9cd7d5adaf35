//! Error types and handling for Skillset
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Two error families live here:
//! - [`SkillsetError`]: command-level failures that abort the current command
//! - [`InstallError`]: per-item install failures, carried inside an
//!   [`InstallOutcome`](crate::domain::InstallOutcome) and never propagated

pub mod install;

pub use install::InstallError;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Skillset operations
#[derive(Error, Diagnostic, Debug)]
pub enum SkillsetError {
    // Platform errors
    #[error("Platform not supported: {platform}")]
    #[diagnostic(
        code(skillset::platform::not_supported),
        help("Supported platforms: {supported}")
    )]
    PlatformNotSupported { platform: String, supported: String },

    // Configuration errors
    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(skillset::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(skillset::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Could not determine home directory")]
    #[diagnostic(
        code(skillset::config::no_home),
        help("Set SKILLSET_HOME or pass --home to choose where platforms live")
    )]
    HomeNotFound,

    // Source errors
    #[error("Source directory not found: {path}")]
    #[diagnostic(
        code(skillset::source::not_found),
        help("Run from the repository root or pass --source / set SKILLSET_SOURCE")
    )]
    SourceNotFound { path: String },

    // Install errors
    #[error("{count} item(s) failed to install: {names}")]
    #[diagnostic(
        code(skillset::install::failed),
        help("Run with --verbose for the underlying file system errors")
    )]
    InstallFailed { count: usize, names: String },

    // Prompt errors
    #[error("Prompt management is not supported for platform '{platform}'")]
    #[diagnostic(
        code(skillset::prompt::not_supported),
        help("Only platforms with a prompt file (e.g. claude) support prompt commands")
    )]
    PromptNotSupported { platform: String },

    #[error("Local prompt file not found: {path}")]
    #[diagnostic(code(skillset::prompt::not_found))]
    PromptNotFound { path: String },

    // File system errors
    #[error("Failed to read file: {path}")]
    #[diagnostic(code(skillset::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(skillset::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(skillset::fs::io_error))]
    IoError { message: String },

    // Interactive errors
    #[error("Interactive prompt failed: {message}")]
    #[diagnostic(code(skillset::ui::prompt_failed))]
    PromptFailed { message: String },
}

impl From<std::io::Error> for SkillsetError {
    fn from(err: std::io::Error) -> Self {
        SkillsetError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for SkillsetError {
    fn from(err: serde_json::Error) -> Self {
        SkillsetError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for SkillsetError {
    fn from(err: inquire::InquireError) -> Self {
        SkillsetError::PromptFailed {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, SkillsetError>;
