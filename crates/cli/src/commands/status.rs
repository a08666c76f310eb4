use super::{load_source, print_json};
use crate::cli::OutputFormat;
use anyhow::Result;
use skillport_agents::{agent_status, AgentRegistry, AgentStatus, SkillState};
use std::path::PathBuf;

/// Handle the `status` command.
pub(crate) fn handle_status_command(source: Option<PathBuf>, format: OutputFormat) -> Result<()> {
    let set = load_source(source)?;
    let registry = AgentRegistry::new()?;

    let mut statuses = Vec::new();
    for kind in registry.detected() {
        let Some(adapter) = registry.get(kind) else {
            continue;
        };
        if !adapter.config().supported {
            continue;
        }
        statuses.push(agent_status(adapter, &set.skills)?);
    }

    match format {
        OutputFormat::Json => print_json(&statuses),
        OutputFormat::Text => {
            if statuses.is_empty() {
                println!("No supported agents detected.");
            } else {
                print!("{}", render_statuses(&statuses));
            }
            Ok(())
        }
    }
}

fn render_statuses(statuses: &[AgentStatus]) -> String {
    let mut out = String::new();
    for status in statuses {
        out.push_str(&format!(
            "{} ({}): {} installed, {} outdated, {} missing, {} unmanaged\n",
            status.display_name,
            status.skill_path.display(),
            status.count(SkillState::Current),
            status.count(SkillState::Outdated),
            status.count(SkillState::Missing),
            status.count(SkillState::Unmanaged),
        ));
        for skill in &status.skills {
            out.push_str(&format!("  {:<10} {}\n", skill.state.as_str(), skill.name));
        }
    }
    out
}
