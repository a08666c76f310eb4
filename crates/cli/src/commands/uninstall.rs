use super::{load_source, resolve_targets};
use anyhow::{bail, Result};
use skillport_agents::{AgentKind, AgentRegistry};
use std::path::PathBuf;

/// Handle the `uninstall` command.
pub(crate) fn handle_uninstall_command(
    source: Option<PathBuf>,
    agents: Vec<AgentKind>,
    skills: Vec<String>,
    dry_run: bool,
) -> Result<()> {
    let names = if skills.is_empty() {
        load_source(source)?.names()
    } else {
        skills
    };
    if names.is_empty() {
        println!("Nothing to uninstall.");
        return Ok(());
    }

    let registry = AgentRegistry::new()?;
    let targets = resolve_targets(&registry, agents)?;
    if targets.is_empty() {
        bail!("no agents detected; pass --agent to choose one");
    }

    let summary = registry.uninstall_all(&targets, &names, dry_run)?;
    let verb = if dry_run { "to remove" } else { "removed" };
    print!("{}", summary.format_summary(verb));
    Ok(())
}
