//! Batch installation
//!
//! One orchestration routine drives both "install selected" and "install all":
//! entries are processed in the order given, each exactly once, and a failure
//! never stops the run.

use tracing::debug;

use crate::catalog::CatalogAccess;
use crate::domain::{BatchResult, CatalogEntry, EntryKind, InstallOutcome};
use crate::selection::SelectionModel;

/// Install `entries` in order with `install`, reporting each outcome to `progress`
///
/// `progress` sees every outcome after it is recorded; it only observes.
pub fn install_batch<I, P>(entries: &[CatalogEntry], mut install: I, mut progress: P) -> BatchResult
where
    I: FnMut(&CatalogEntry) -> InstallOutcome,
    P: FnMut(&InstallOutcome),
{
    let mut result = BatchResult::default();

    for (i, entry) in entries.iter().enumerate() {
        debug!(name = %entry.name, current = i + 1, total = entries.len(), "batch item");
        let outcome = install(entry);
        result.record(&outcome);
        progress(&outcome);
    }

    result
}

/// Install every selected entry of `model`, then clear their selection
pub fn install_selected<C, P>(model: &mut SelectionModel, catalog: &C, progress: P) -> BatchResult
where
    C: CatalogAccess + ?Sized,
    P: FnMut(&InstallOutcome),
{
    let selected = model.selected_entries();
    let result = install_batch(&selected, |entry| catalog.install(entry), progress);
    model.clear_processed(&selected);
    result
}

/// Install the full unfiltered catalog of one kind
///
/// Which entries run does not depend on `model`; afterwards every processed
/// entry it tracks is unselected, as after [`install_selected`].
pub fn install_all<C, P>(
    model: &mut SelectionModel,
    catalog: &C,
    kind: EntryKind,
    progress: P,
) -> BatchResult
where
    C: CatalogAccess + ?Sized,
    P: FnMut(&InstallOutcome),
{
    let entries = catalog.list(kind);
    let result = install_batch(&entries, |entry| catalog.install(entry), progress);
    model.clear_processed(&entries);
    result
}
