//! Domain models for Skillset
//!
//! Plain data describing what can be installed and what happened when it was.
//! These types hold no file handles and perform no IO beyond path arithmetic.

pub mod entry;
pub mod outcome;

pub use entry::{CatalogEntry, EntryKind, InstallState, is_plain_name};
pub use outcome::{BatchResult, InstallOutcome};
