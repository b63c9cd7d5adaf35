//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - list: List command arguments
//! - install: Install command arguments
//! - interactive: Interactive session arguments
//! - prompt: Prompt command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod install;
pub mod interactive;
pub mod list;
pub mod prompt;

pub use completions::CompletionsArgs;
pub use install::InstallArgs;
pub use interactive::InteractiveArgs;
pub use list::ListArgs;
pub use prompt::{PromptArgs, PromptSubcommand};

/// Skillset - skill and command installer for AI coding platforms
#[derive(Parser, Debug)]
#[command(
    name = "skillset",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Install skills and commands into AI coding platforms",
    long_about = "Skillset copies skill directories and command files from a source repository \
                  into the configuration directories of AI coding platforms (Claude, Codex, Gemini, ...), \
                  either by name or through an interactive selection session.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  skillset list                        \x1b[90m# Skills with install status\x1b[0m\n   \
                  skillset install pdf-tools           \x1b[90m# Install one skill for Claude\x1b[0m\n   \
                  skillset install --all -p gemini     \x1b[90m# Install every skill for Gemini\x1b[0m\n   \
                  skillset installed                   \x1b[90m# What the platform already has\x1b[0m\n   \
                  skillset interactive                 \x1b[90m# Select, filter and install\x1b[0m\n   \
                  skillset prompt diff                 \x1b[90m# Compare global CLAUDE.md\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Source repository root (defaults to current directory)
    #[arg(long, short = 's', global = true, env = "SKILLSET_SOURCE")]
    pub source: Option<PathBuf>,

    /// Home directory holding the platform directories (defaults to your home)
    #[arg(long, global = true, env = "SKILLSET_HOME")]
    pub home: Option<PathBuf>,

    /// Target platform
    #[arg(long, short = 'p', global = true, default_value = "claude")]
    pub platform: String,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List available skills or commands with install status
    List(ListArgs),

    /// List skills installed for the platform
    Installed,

    /// Install skills or commands by name, or all of them
    Install(InstallArgs),

    /// Select, filter and install interactively
    Interactive(InteractiveArgs),

    /// Manage the platform's global prompt file
    Prompt(PromptArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_cli_parsing_list() {
        let cli = Cli::try_parse_from(["skillset", "list"]).unwrap();
        match cli.command {
            Commands::List(args) => assert!(!args.commands),
            _ => panic!("Expected List command"),
        }
        assert_eq!(cli.platform, "claude");
    }

    #[test]
    fn test_cli_parsing_installed() {
        let cli = Cli::try_parse_from(["skillset", "installed", "-p", "codex"]).unwrap();
        assert!(matches!(cli.command, Commands::Installed));
        assert_eq!(cli.platform, "codex");
    }

    #[test]
    fn test_cli_parsing_prompt() {
        let cli = Cli::try_parse_from(["skillset", "prompt", "diff"]).unwrap();
        match cli.command {
            Commands::Prompt(args) => assert_eq!(args.command, PromptSubcommand::Diff),
            _ => panic!("Expected Prompt command"),
        }
    }

    #[test]
    fn test_cli_prompt_requires_subcommand() {
        assert!(Cli::try_parse_from(["skillset", "prompt"]).is_err());
    }

    #[test]
    fn test_cli_parsing_version() {
        let cli = Cli::try_parse_from(["skillset", "version"]).unwrap();
        assert!(matches!(cli.command, Commands::Version));
    }

    #[test]
    fn test_cli_global_options() {
        let cli = Cli::try_parse_from([
            "skillset",
            "-v",
            "-s",
            "/tmp/repo",
            "--home",
            "/tmp/home",
            "list",
            "--commands",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.source, Some(PathBuf::from("/tmp/repo")));
        assert_eq!(cli.home, Some(PathBuf::from("/tmp/home")));
    }

    #[test]
    fn test_cli_global_options_after_subcommand() {
        let cli = Cli::try_parse_from(["skillset", "interactive", "-p", "gemini", "-c"]).unwrap();
        assert_eq!(cli.platform, "gemini");
        match cli.command {
            Commands::Interactive(args) => assert!(args.commands),
            _ => panic!("Expected Interactive command"),
        }
    }

    #[test]
    fn test_cli_parsing_completions() {
        let cli = Cli::try_parse_from(["skillset", "completions", "bash"]).unwrap();
        match cli.command {
            Commands::Completions(args) => {
                assert_eq!(args.shell, "bash");
            }
            _ => panic!("Expected Completions command"),
        }
    }

    #[test]
    #[serial]
    fn test_cli_home_from_env() {
        let original = std::env::var("SKILLSET_HOME").ok();
        unsafe {
            std::env::set_var("SKILLSET_HOME", "/tmp/env-home");
        }

        let from_env = Cli::try_parse_from(["skillset", "installed"]).unwrap();
        let from_flag =
            Cli::try_parse_from(["skillset", "--home", "/tmp/flag-home", "installed"]).unwrap();

        unsafe {
            match original {
                Some(value) => std::env::set_var("SKILLSET_HOME", value),
                None => std::env::remove_var("SKILLSET_HOME"),
            }
        }
        assert_eq!(from_env.home, Some(PathBuf::from("/tmp/env-home")));
        assert_eq!(from_flag.home, Some(PathBuf::from("/tmp/flag-home")));
    }
}
