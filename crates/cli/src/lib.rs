//! The `skillport` command-line application.
//!
//! Detects which AI coding agents are installed and copies `SKILL.md`
//! skills from a source directory into each agent's skill directory.

#![deny(unsafe_code)]

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use commands::*;
use tracing_subscriber::EnvFilter;

/// Parses arguments, initializes logging and dispatches the command.
pub fn run() -> Result<()> {
    skillport_state::apply_config_to_env()?;
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Detect { format } => handle_detect_command(format),
        Commands::List { source, format } => handle_list_command(source, format),
        Commands::Install {
            source,
            agents,
            skills,
            force,
            dry_run,
            interactive,
        } => handle_install_command(InstallArgs {
            source,
            agents,
            skills,
            force,
            dry_run,
            interactive,
        }),
        Commands::Uninstall {
            source,
            agents,
            skills,
            dry_run,
        } => handle_uninstall_command(source, agents, skills, dry_run),
        Commands::Status { source, format } => handle_status_command(source, format),
        Commands::Validate {
            source,
            format,
            errors_only,
        } => handle_validate_command(source, format, errors_only),
    }
}

/// Logs go to stderr so JSON on stdout stays parseable.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    // Ignore an already-installed subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
