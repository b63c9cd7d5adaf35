//! Installed command implementation
//!
//! Lists skill directories present in the platform's target directory and
//! whether each one comes from this repository.

use crate::commands::context::{CommandContext, GlobalOptions};
use crate::domain::EntryKind;
use crate::error::Result;
use crate::operations::installed::{Origin, list_installed};
use crate::ui::formatter::{MessageLevel, format_message, styles};

/// Run installed command
pub fn run(options: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::open(options)?;
    let installer = &ctx.installer;
    let target_root = installer.target_root(EntryKind::Bundle);

    println!(
        "{}",
        styles::header(format!("Installed skills ({}):", installer.platform().name))
    );

    let Some(installed) = list_installed(&target_root, &installer.layout().skills_dir()) else {
        let text = format!("No skills directory found: {}", target_root.display());
        println!(
            "{}",
            styles::level(MessageLevel::Warning, format_message(MessageLevel::Warning, &text))
        );
        return Ok(());
    };

    if installed.is_empty() {
        println!(
            "{}",
            styles::level(
                MessageLevel::Warning,
                format_message(MessageLevel::Warning, "No skills installed.")
            )
        );
        return Ok(());
    }

    for bundle in &installed {
        let origin = match bundle.origin {
            Origin::Repository => styles::level(MessageLevel::Success, bundle.origin.to_string()),
            Origin::External => styles::dim(bundle.origin.to_string()),
        };
        println!(" • {} ({})", styles::name(&bundle.name), origin);
    }

    Ok(())
}
