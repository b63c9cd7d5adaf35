//! Install command implementation
//!
//! Installs named skills or commands (or the whole catalog with `--all`)
//! through the batch orchestrator and prints one line per item plus a summary.

use crate::catalog::CatalogAccess;
use crate::cli::InstallArgs;
use crate::commands::context::{CommandContext, GlobalOptions};
use crate::domain::{BatchResult, CatalogEntry, EntryKind, is_plain_name};
use crate::error::{Result, SkillsetError};
use crate::installer::Installer;
use crate::operations::install_batch;
use crate::ui::formatter::{MessageLevel, format_empty_state_message, styles};
use crate::ui::{LineProgressReporter, ProgressReporter, observe};
use tracing::debug;

/// Run install command
pub fn run(options: &GlobalOptions, args: InstallArgs) -> Result<()> {
    let ctx = CommandContext::open(options)?;
    ctx.require_source()?;

    let kind = if args.commands {
        EntryKind::File
    } else {
        EntryKind::Bundle
    };
    let installer = &ctx.installer;

    let entries = if args.all {
        installer.list(kind)
    } else {
        resolve_names(installer, kind, &args.names)
    };

    if entries.is_empty() {
        println!("{}", format_empty_state_message(kind));
        return Ok(());
    }

    println!(
        "{}",
        styles::header(format!(
            "Installing {} {} to {}",
            entries.len(),
            kind.plural(),
            installer.target_root(kind).display()
        ))
    );

    let mut reporter = LineProgressReporter;
    let result = install_batch(&entries, |entry| installer.install(entry), observe(&mut reporter));
    reporter.finish();

    summarize(&result)
}

/// Map names onto catalog entries
///
/// Unknown names still become entries, pointing at where the source would
/// be, so the installer reports them as missing instead of skipping them.
/// Path-like names are never joined onto the source root; they point at the
/// root itself and the installer rejects them.
fn resolve_names(installer: &Installer, kind: EntryKind, names: &[String]) -> Vec<CatalogEntry> {
    let catalog = installer.list(kind);
    let root = installer.catalog_root(kind);

    names
        .iter()
        .map(|name| {
            if let Some(entry) = catalog.iter().find(|entry| entry.name == *name) {
                return entry.clone();
            }
            let source = if is_plain_name(name) {
                root.join(name)
            } else {
                debug!(name = %name, "rejecting path-like name");
                root.clone()
            };
            match kind {
                EntryKind::Bundle => CatalogEntry::bundle(name, source, None),
                EntryKind::File => CatalogEntry::file(name, source, None),
            }
        })
        .collect()
}

fn summarize(result: &BatchResult) -> Result<()> {
    debug!(
        total = result.total(),
        failed = result.failure_count,
        "batch install finished"
    );
    let level = if result.all_succeeded() {
        MessageLevel::Success
    } else {
        MessageLevel::Warning
    };
    println!();
    println!(
        "{}",
        styles::level(
            level,
            format!(
                "Installed {}, failed {}",
                result.success_count, result.failure_count
            )
        )
    );

    if result.all_succeeded() {
        Ok(())
    } else {
        Err(SkillsetError::InstallFailed {
            count: result.failure_count,
            names: result.failed_names.join(", "),
        })
    }
}
