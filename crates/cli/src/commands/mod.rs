//! Command handlers, one module per subcommand.

mod detect;
mod install;
mod list;
mod status;
mod uninstall;
mod validate;

pub(crate) use detect::handle_detect_command;
pub(crate) use install::{handle_install_command, InstallArgs};
pub(crate) use list::handle_list_command;
pub(crate) use status::handle_status_command;
pub(crate) use uninstall::handle_uninstall_command;
pub(crate) use validate::handle_validate_command;

use anyhow::{Context, Result};
use serde::Serialize;
use skillport_agents::{AgentKind, AgentRegistry};
use skillport_discovery::{load_skills, SkillSet};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Loads the skill source, logging anything that was skipped.
pub(crate) fn load_source(source: Option<PathBuf>) -> Result<SkillSet> {
    let dir = skillport_state::resolve_source_dir(source);
    debug!(source = %dir.display(), "Loading skill source");
    let set = load_skills(&dir)?;
    for dup in &set.duplicates {
        warn!(
            skill = %dup.name,
            kept = %dup.kept.display(),
            skipped = %dup.skipped.display(),
            "Duplicate skill name; keeping the first"
        );
    }
    for failure in &set.errors {
        warn!(path = %failure.path.display(), error = %failure.error, "Skipping unreadable skill");
    }
    Ok(set)
}

/// Picks target agents: explicit flags, then `SKILLPORT_AGENTS`, then
/// every detected agent.
pub(crate) fn resolve_targets(
    registry: &AgentRegistry,
    explicit: Vec<AgentKind>,
) -> Result<Vec<AgentKind>> {
    let mut targets = if !explicit.is_empty() {
        explicit
    } else {
        let from_env = skillport_state::env_agents();
        if from_env.is_empty() {
            registry.detected()
        } else {
            from_env
                .iter()
                .map(|s| s.parse::<AgentKind>())
                .collect::<Result<Vec<_>, _>>()
                .context("invalid SKILLPORT_AGENTS")?
        }
    };
    let mut seen = std::collections::HashSet::new();
    targets.retain(|k| seen.insert(*k));
    Ok(targets)
}

pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
