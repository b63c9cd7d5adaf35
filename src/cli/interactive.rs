use clap::Parser;

/// Arguments for the interactive command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Browse and install skills:\n    skillset interactive\n\n\
                  Browse commands for Codex:\n    skillset interactive --commands -p codex")]
pub struct InteractiveArgs {
    /// Start on commands instead of skills
    #[arg(long, short = 'c')]
    pub commands: bool,
}
