//! Prompt command implementation

use crate::cli::{PromptArgs, PromptSubcommand};
use crate::commands::context::{CommandContext, GlobalOptions};
use crate::error::Result;
use crate::operations::prompt::{
    DiffLine, PromptDiff, PromptPaths, diff_prompt, update_prompt,
};
use crate::ui::formatter::{MessageLevel, format_message, styles};

/// Run prompt command
pub fn run(options: &GlobalOptions, args: PromptArgs) -> Result<()> {
    let ctx = CommandContext::open(options)?;
    let installer = &ctx.installer;
    let paths = PromptPaths::resolve(installer.platform(), installer.layout(), installer.home())?;

    match args.command {
        PromptSubcommand::Update => update(&paths),
        PromptSubcommand::Diff => diff(&paths),
    }
}

fn print(level: MessageLevel, text: &str) {
    println!("{}", styles::level(level, format_message(level, text)));
}

fn update(paths: &PromptPaths) -> Result<()> {
    let update = update_prompt(paths)?;
    if let Some(backup) = &update.backup {
        print(
            MessageLevel::Info,
            &format!("Backed up previous prompt to {}", backup.display()),
        );
    }
    print(
        MessageLevel::Success,
        &format!("Updated {}", update.target.display()),
    );
    Ok(())
}

fn diff(paths: &PromptPaths) -> Result<()> {
    match diff_prompt(paths)? {
        PromptDiff::GlobalMissing => print(
            MessageLevel::Warning,
            &format!("Global prompt does not exist: {}", paths.global.display()),
        ),
        PromptDiff::Identical => print(
            MessageLevel::Success,
            "Global prompt is identical to the repository copy",
        ),
        PromptDiff::Changed(lines) => {
            println!(
                "{}",
                styles::level(MessageLevel::Error, format!("--- {}", paths.global.display()))
            );
            println!(
                "{}",
                styles::level(MessageLevel::Success, format!("+++ {}", paths.local.display()))
            );
            for line in lines {
                match line {
                    DiffLine::Removed(text) => {
                        println!("{}", styles::level(MessageLevel::Error, format!("-{text}")));
                    }
                    DiffLine::Added(text) => {
                        println!("{}", styles::level(MessageLevel::Success, format!("+{text}")));
                    }
                }
            }
        }
    }
    Ok(())
}
