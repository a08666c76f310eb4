//! Compares an agent's installed skills against a source set.

use crate::adapters::utils::sanitize_name;
use crate::adapters::AgentAdapter;
use crate::config::AgentKind;
use crate::install::matches_source;
use crate::Result;
use serde::Serialize;
use skillport_discovery::SkillPackage;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Where one skill stands for one agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillState {
    /// Installed copy matches the source.
    Current,
    /// Installed copy differs from the source.
    Outdated,
    /// Source skill is not installed.
    Missing,
    /// Installed skill with no source counterpart.
    Unmanaged,
}

impl SkillState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillState::Current => "installed",
            SkillState::Outdated => "outdated",
            SkillState::Missing => "missing",
            SkillState::Unmanaged => "unmanaged",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillStatus {
    pub name: String,
    pub state: SkillState,
}

/// Status of every skill for one agent.
#[derive(Debug, Clone, Serialize)]
pub struct AgentStatus {
    pub agent: AgentKind,
    pub display_name: String,
    pub skill_path: PathBuf,
    pub skills: Vec<SkillStatus>,
}

impl AgentStatus {
    pub fn count(&self, state: SkillState) -> usize {
        self.skills.iter().filter(|s| s.state == state).count()
    }
}

/// Classifies each source skill for `adapter`, then appends installed skills
/// the source does not know about.
pub fn agent_status(adapter: &dyn AgentAdapter, skills: &[SkillPackage]) -> Result<AgentStatus> {
    let config = adapter.config();
    let mut statuses = Vec::with_capacity(skills.len());
    let mut known = BTreeSet::new();

    for skill in skills {
        let rel = sanitize_name(&skill.name);
        known.insert(rel.clone());
        let dest = config.skill_path.join(&rel);
        let state = if rel.is_empty() || !dest.join(skillport_discovery::SKILL_FILE).is_file() {
            SkillState::Missing
        } else if matches_source(&dest, skill)? {
            SkillState::Current
        } else {
            SkillState::Outdated
        };
        statuses.push(SkillStatus {
            name: skill.name.clone(),
            state,
        });
    }

    for installed in adapter.installed_skills()? {
        if !known.contains(&installed.name) {
            statuses.push(SkillStatus {
                name: installed.name,
                state: SkillState::Unmanaged,
            });
        }
    }

    Ok(AgentStatus {
        agent: config.name,
        display_name: config.display_name.to_string(),
        skill_path: config.skill_path.clone(),
        skills: statuses,
    })
}
