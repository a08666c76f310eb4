use super::{load_source, resolve_targets};
use anyhow::{anyhow, bail, Result};
use inquire::MultiSelect;
use skillport_agents::{AgentKind, AgentRegistry, Detection, InstallOptions};
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::debug;

/// Arguments for the `install` command.
#[derive(Debug, Default)]
pub(crate) struct InstallArgs {
    pub source: Option<PathBuf>,
    pub agents: Vec<AgentKind>,
    pub skills: Vec<String>,
    pub force: bool,
    pub dry_run: bool,
    pub interactive: bool,
}

/// Handle the `install` command.
pub(crate) fn handle_install_command(args: InstallArgs) -> Result<()> {
    let set = load_source(args.source)?;
    let (skills, missing) = set.select(&args.skills);
    if !missing.is_empty() {
        bail!(
            "skill(s) not found in {}: {}",
            set.root.display(),
            missing.join(", ")
        );
    }

    let registry = AgentRegistry::new()?;
    let detections = registry.detect_all();
    let targets = if args.interactive {
        prompt_for_targets(&detections)?
    } else {
        resolve_targets(&registry, args.agents)?
    };
    ensure_installable(&targets, &detections)?;
    debug!(?targets, skills = skills.len(), "Installing skills");

    let options = InstallOptions {
        force: args.force || skillport_state::env_force(),
        dry_run: args.dry_run,
    };
    let summary = registry.install_all(&targets, &skills, &options)?;
    let verb = if args.dry_run {
        "to install"
    } else {
        "installed"
    };
    print!("{}", summary.format_summary(verb));
    Ok(())
}

/// Fails unless at least one target is both detected and supported.
fn ensure_installable(targets: &[AgentKind], detections: &[Detection]) -> Result<()> {
    if targets.is_empty() {
        bail!("no agents detected; install an agent or pass --agent");
    }
    let usable = detections
        .iter()
        .any(|d| targets.contains(&d.name) && d.detected && d.supported);
    if !usable {
        let names: Vec<_> = targets.iter().map(AgentKind::as_str).collect();
        bail!(
            "none of the target agents can receive skills: {}",
            names.join(", ")
        );
    }
    Ok(())
}

fn prompt_for_targets(detections: &[Detection]) -> Result<Vec<AgentKind>> {
    if !std::io::stdout().is_terminal() {
        return Err(anyhow!("--interactive requires a TTY"));
    }
    let candidates: Vec<&Detection> = detections
        .iter()
        .filter(|d| d.detected && d.supported)
        .collect();
    if candidates.is_empty() {
        bail!("no supported agents detected");
    }
    let items: Vec<String> = candidates
        .iter()
        .map(|d| format!("{} ({})", d.display_name, d.skill_path.display()))
        .collect();
    let defaults: Vec<usize> = (0..items.len()).collect();

    let selected = MultiSelect::new(
        "Select agents to install into (space to toggle, enter to confirm)",
        items.clone(),
    )
    .with_default(&defaults)
    .prompt()?;

    Ok(candidates
        .iter()
        .zip(items.iter())
        .filter(|(_, label)| selected.contains(label))
        .map(|(d, _)| d.name)
        .collect())
}
