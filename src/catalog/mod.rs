//! Catalog listing and the catalog-access seam
//!
//! - [`reader`]: lists bundles and command files from a source root
//! - [`manifest`]: extracts bundle descriptions
//! - [`CatalogAccess`]: what the selection and batch layers need from a catalog

pub mod manifest;
pub mod reader;

pub use reader::{list_bundles, list_files};

use crate::domain::{CatalogEntry, EntryKind, InstallOutcome, InstallState};

/// Listing, status and install for one active platform
///
/// The batch orchestrator and the interactive session receive this explicitly
/// so tests can substitute an in-memory catalog.
pub trait CatalogAccess {
    /// Entries of one kind in ascending name order
    fn list(&self, kind: EntryKind) -> Vec<CatalogEntry>;

    /// Re-checked against the file system on every call
    fn resolve_status(&self, entry: &CatalogEntry) -> InstallState;

    /// Never fails: every failure is reported through the outcome
    fn install(&self, entry: &CatalogEntry) -> InstallOutcome;
}
