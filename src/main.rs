//! Skillset - skill and command installer
//!
//! Copies skill directories and command files from a source repository into
//! the configuration directories of AI coding platforms (Claude, Codex,
//! Gemini, ...), by name or through an interactive selection session.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod catalog;
mod cli;
mod commands;
mod config;
mod domain;
mod error;
mod hash;
mod installer;
mod operations;
mod platform;
mod selection;
mod ui;

use cli::{Cli, Commands};
use commands::GlobalOptions;

/// Environment variable holding a `tracing` filter directive
const LOG_ENV: &str = "SKILLSET_LOG";

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = GlobalOptions {
        source: cli.source,
        home: cli.home,
        platform: cli.platform,
    };

    let result = match cli.command {
        Commands::List(args) => commands::list::run(&options, args),
        Commands::Installed => commands::installed::run(&options),
        Commands::Install(args) => commands::install::run(&options, args),
        Commands::Interactive(args) => commands::interactive::run(&options, args),
        Commands::Prompt(args) => commands::prompt::run(&options, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
