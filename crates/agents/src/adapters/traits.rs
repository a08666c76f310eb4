//! Trait definition for agent adapters.

use super::utils::dir_is_readable;
use crate::config::{AgentConfig, AgentKind};
use crate::install::{self, InstallOptions, InstalledSkill};
use crate::report::InstallReport;
use crate::Result;
use skillport_discovery::SkillPackage;

#[cfg(test)]
use mockall::automock;

/// One AI coding agent that skills can be installed into.
///
/// Implementors only supply their descriptor; detection and the skill
/// directory operations are shared.
#[cfg_attr(test, automock)]
pub trait AgentAdapter: Send + Sync {
    /// Static descriptor for this agent.
    fn config(&self) -> &AgentConfig;

    /// Agent identifier (e.g., `claude-code`)
    fn name(&self) -> AgentKind {
        self.config().name
    }

    /// Returns true if the agent's skill directory exists and can be read.
    ///
    /// Every failure (missing, permission denied, not a directory) reads as
    /// "not detected". Never errors.
    fn detect(&self) -> bool {
        dir_is_readable(&self.config().skill_path)
    }

    /// Copy skills into the agent's skill directory.
    fn install(&self, skills: &[SkillPackage], options: &InstallOptions) -> Result<InstallReport> {
        install::install_skills(self.config(), skills, options)
    }

    /// Skills currently present in the agent's skill directory.
    fn installed_skills(&self) -> Result<Vec<InstalledSkill>> {
        install::installed_skills(self.config())
    }

    /// Remove skills by name.
    fn uninstall(&self, names: &[String], dry_run: bool) -> Result<InstallReport> {
        install::uninstall_skills(self.config(), names, dry_run)
    }
}
