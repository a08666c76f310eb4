use clap::{Parser, Subcommand, ValueEnum};
use skillport_agents::AgentKind;
use std::path::PathBuf;

/// Output format for commands that can emit JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Command-line interface for the `skillport` application.
#[derive(Debug, Parser)]
#[command(
    name = "skillport",
    version,
    about = "Install SKILL.md skills into Claude Code, GitHub Copilot, Cursor and OpenCode"
)]
pub struct Cli {
    /// Enables debug logging (overridden by `RUST_LOG`).
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

/// Available `skillport` commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Shows which agents are installed on this machine.
    Detect {
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Lists skills in the source directory.
    List {
        /// Skill source directory (overrides `SKILLPORT_SOURCE_DIR`).
        #[arg(long, value_name = "DIR")]
        source: Option<PathBuf>,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Installs skills into detected (or named) agents.
    Install {
        /// Skill source directory (overrides `SKILLPORT_SOURCE_DIR`).
        #[arg(long, value_name = "DIR")]
        source: Option<PathBuf>,
        /// Target agent (repeatable). Defaults to `SKILLPORT_AGENTS`, then every detected agent.
        #[arg(long = "agent", value_name = "KIND")]
        agents: Vec<AgentKind>,
        /// Only install the named skill (repeatable).
        #[arg(long = "skill", value_name = "NAME")]
        skills: Vec<String>,
        /// Replace installed skills that differ from the source.
        #[arg(long, default_value_t = false)]
        force: bool,
        /// Show what would be installed without writing anything.
        #[arg(long, default_value_t = false)]
        dry_run: bool,
        /// Pick target agents from a list of detected ones.
        #[arg(long, short = 'i', default_value_t = false)]
        interactive: bool,
    },
    /// Removes installed skills from agents.
    Uninstall {
        /// Skill source directory used when no `--skill` is given.
        #[arg(long, value_name = "DIR")]
        source: Option<PathBuf>,
        /// Target agent (repeatable). Defaults to `SKILLPORT_AGENTS`, then every detected agent.
        #[arg(long = "agent", value_name = "KIND")]
        agents: Vec<AgentKind>,
        /// Skill to remove (repeatable). Defaults to every skill in the source.
        #[arg(long = "skill", value_name = "NAME")]
        skills: Vec<String>,
        /// Show what would be removed without deleting anything.
        #[arg(long, default_value_t = false)]
        dry_run: bool,
    },
    /// Compares installed skills against the source for each detected agent.
    Status {
        /// Skill source directory (overrides `SKILLPORT_SOURCE_DIR`).
        #[arg(long, value_name = "DIR")]
        source: Option<PathBuf>,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Checks skill frontmatter in the source directory.
    Validate {
        /// Skill source directory (overrides `SKILLPORT_SOURCE_DIR`).
        #[arg(long, value_name = "DIR")]
        source: Option<PathBuf>,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Only show skills with errors.
        #[arg(long, default_value_t = false)]
        errors_only: bool,
    },
}
