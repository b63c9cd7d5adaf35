//! Command implementations for Skillset CLI

pub mod completions;
pub mod context;
pub mod install;
pub mod installed;
pub mod interactive;
pub mod list;
pub mod prompt;
pub mod version;

pub use context::GlobalOptions;
