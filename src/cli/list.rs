use clap::Parser;

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List skills in the source repository:\n    skillset list\n\n\
                  List commands for Gemini:\n    skillset list --commands -p gemini")]
pub struct ListArgs {
    /// List commands instead of skills
    #[arg(long, short = 'c')]
    pub commands: bool,
}
