use clap::Parser;

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Install two skills:\n    skillset install pdf-tools code-review\n\n\
                   Install every skill for Codex:\n    skillset install --all -p codex\n\n\
                   Install a command:\n    skillset install --commands review\n\n\
                   Install from another checkout:\n    skillset install --all -s ~/src/skills-repo")]
pub struct InstallArgs {
    /// Names to install (directory names for skills, file stems for commands)
    #[arg(required_unless_present = "all", conflicts_with = "all")]
    pub names: Vec<String>,

    /// Install commands instead of skills
    #[arg(long, short = 'c')]
    pub commands: bool,

    /// Install everything in the catalog
    #[arg(long, short = 'a')]
    pub all: bool,
}

#[cfg(test)]
mod tests {
    use super::super::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn test_cli_parsing_install_names() {
        let cli = Cli::try_parse_from(["skillset", "install", "alpha", "beta"])
            .unwrap_or_else(|e| panic!("Failed to parse CLI arguments: {}", e));
        match cli.command {
            Commands::Install(args) => {
                assert_eq!(args.names, vec!["alpha", "beta"]);
                assert!(!args.commands);
                assert!(!args.all);
            }
            _ => panic!("Expected Install command"),
        }
    }

    #[test]
    fn test_cli_parsing_install_all_commands() {
        let cli = Cli::try_parse_from(["skillset", "install", "--all", "--commands"]).unwrap();
        match cli.command {
            Commands::Install(args) => {
                assert!(args.names.is_empty());
                assert!(args.commands);
                assert!(args.all);
            }
            _ => panic!("Expected Install command"),
        }
    }

    #[test]
    fn test_cli_install_requires_names_or_all() {
        assert!(Cli::try_parse_from(["skillset", "install"]).is_err());
    }

    #[test]
    fn test_cli_install_names_conflict_with_all() {
        assert!(Cli::try_parse_from(["skillset", "install", "alpha", "--all"]).is_err());
    }
}
