//! GitHub Copilot adapter for `~/.copilot/skills`.
//!
//! Copilot CLI reads skills in the same `skills/<name>/SKILL.md` layout as
//! Claude Code. Only `~/.copilot/skills` is checked so the descriptor stays a
//! pure function of the home directory.

use super::traits::AgentAdapter;
use crate::config::{AgentConfig, AgentKind};
use crate::Result;
use std::path::Path;

/// Adapter for GitHub Copilot CLI.
pub struct GitHubCopilotAgent {
    config: AgentConfig,
}

impl GitHubCopilotAgent {
    /// Creates a GitHubCopilotAgent for `~/.copilot/skills`.
    pub fn new() -> Result<Self> {
        Ok(Self::with_home(&skillport_state::home_dir()?))
    }

    /// Creates a GitHubCopilotAgent under a custom home (for testing).
    pub fn with_home(home: &Path) -> Self {
        Self {
            config: AgentConfig::under_home(
                AgentKind::GithubCopilot,
                "GitHub Copilot",
                home,
                ".copilot/skills",
                true,
            ),
        }
    }
}

impl AgentAdapter for GitHubCopilotAgent {
    fn config(&self) -> &AgentConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn descriptor_is_fixed() {
        let cfg = GitHubCopilotAgent::with_home(Path::new("/home/dev"))
            .config()
            .clone();
        assert_eq!(cfg.name, AgentKind::GithubCopilot);
        assert_eq!(cfg.display_name, "GitHub Copilot");
        assert_eq!(cfg.skill_path, PathBuf::from("/home/dev/.copilot/skills"));
        assert!(cfg.supported);
    }

    #[test]
    fn xdg_config_dir_does_not_count() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(tmp.path().join(".config/copilot/skills")).unwrap();
        assert!(!GitHubCopilotAgent::with_home(tmp.path()).detect());
    }
}
