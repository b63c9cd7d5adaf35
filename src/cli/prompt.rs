use clap::{Parser, Subcommand};

/// Arguments for prompt command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Replace the global CLAUDE.md (old one is backed up):\n    skillset prompt update\n\n\
                  Compare the global CLAUDE.md with the repository copy:\n    skillset prompt diff")]
pub struct PromptArgs {
    #[command(subcommand)]
    pub command: PromptSubcommand,
}

/// Prompt subcommands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptSubcommand {
    /// Copy the repository prompt over the global one
    Update,

    /// Show how the global prompt differs from the repository prompt
    Diff,
}
