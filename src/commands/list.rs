//! List command implementation
//!
//! This command lists the skills (or commands) available in the source
//! repository, each with its install status for the active platform.

use crate::catalog::CatalogAccess;
use crate::cli::ListArgs;
use crate::commands::context::{CommandContext, GlobalOptions};
use crate::domain::{EntryKind, InstallState};
use crate::error::Result;
use crate::ui::formatter::{
    MessageLevel, format_empty_state_message, format_status_icon, styles,
};

/// Run list command
pub fn run(options: &GlobalOptions, args: ListArgs) -> Result<()> {
    let ctx = CommandContext::open(options)?;
    ctx.require_source()?;

    let kind = if args.commands {
        EntryKind::File
    } else {
        EntryKind::Bundle
    };
    list_entries(&ctx.installer, kind);
    Ok(())
}

fn list_entries<C: CatalogAccess>(catalog: &C, kind: EntryKind) {
    let entries = catalog.list(kind);
    if entries.is_empty() {
        println!("{}", format_empty_state_message(kind));
        return;
    }

    println!(
        "{}",
        styles::header(format!("Available {} ({}):", kind.plural(), entries.len()))
    );
    println!();

    let mut installed = 0;
    for entry in &entries {
        let state = catalog.resolve_status(entry);
        let icon = format_status_icon(state);
        let icon = match state {
            InstallState::Installed => {
                installed += 1;
                styles::level(MessageLevel::Success, icon)
            }
            InstallState::NotInstalled => styles::dim(icon),
        };
        println!("  {} {}", icon, styles::name(&entry.name));
        if let Some(description) = &entry.description {
            println!("      {description}");
        }
    }

    println!();
    println!("{installed} of {} installed", entries.len());
}
