//! Static descriptors for the agents skillport knows about.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Identifies one supported agent product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AgentKind {
    /// Anthropic's Claude Code CLI.
    ClaudeCode,
    /// GitHub Copilot CLI.
    GithubCopilot,
    /// Cursor editor.
    Cursor,
    /// OpenCode terminal agent.
    Opencode,
}

impl AgentKind {
    /// Every kind, in registry order.
    pub const ALL: [AgentKind; 4] = [
        AgentKind::ClaudeCode,
        AgentKind::GithubCopilot,
        AgentKind::Cursor,
        AgentKind::Opencode,
    ];

    /// Stable identifier used on the command line and in config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentKind::ClaudeCode => "claude-code",
            AgentKind::GithubCopilot => "github-copilot",
            AgentKind::Cursor => "cursor",
            AgentKind::Opencode => "opencode",
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known agent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown agent '{0}' (expected one of: claude-code, github-copilot, cursor, opencode)")]
pub struct AgentParseError(pub String);

impl FromStr for AgentKind {
    type Err = AgentParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('_', "-");
        match key.as_str() {
            "claude-code" | "claude" => Ok(AgentKind::ClaudeCode),
            "github-copilot" | "copilot" => Ok(AgentKind::GithubCopilot),
            "cursor" => Ok(AgentKind::Cursor),
            "opencode" | "open-code" => Ok(AgentKind::Opencode),
            _ => Err(AgentParseError(s.to_string())),
        }
    }
}

/// Immutable description of where an agent lives on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgentConfig {
    /// Agent identifier.
    pub name: AgentKind,
    /// Human-readable product name.
    pub display_name: &'static str,
    /// Directory the agent loads skills from; its presence means the agent
    /// is installed.
    pub skill_path: PathBuf,
    /// Whether skillport installs into this agent.
    pub supported: bool,
}

impl AgentConfig {
    /// Builds a descriptor whose skill directory is `skills` under `home`.
    pub fn under_home(
        name: AgentKind,
        display_name: &'static str,
        home: &Path,
        skills: &str,
        supported: bool,
    ) -> Self {
        Self {
            name,
            display_name,
            skill_path: home.join(skills),
            supported,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_names_and_aliases() {
        assert_eq!("claude-code".parse(), Ok(AgentKind::ClaudeCode));
        assert_eq!("Claude".parse(), Ok(AgentKind::ClaudeCode));
        assert_eq!("copilot".parse(), Ok(AgentKind::GithubCopilot));
        assert_eq!("GITHUB_COPILOT".parse(), Ok(AgentKind::GithubCopilot));
        assert_eq!(" cursor ".parse(), Ok(AgentKind::Cursor));
        assert_eq!("opencode".parse(), Ok(AgentKind::Opencode));
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "codex".parse::<AgentKind>().unwrap_err();
        assert_eq!(err, AgentParseError("codex".into()));
        assert!(err.to_string().contains("unknown agent 'codex'"));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for kind in AgentKind::ALL {
            assert_eq!(kind.to_string().parse(), Ok(kind));
        }
    }

    #[test]
    fn serializes_as_kebab_case() {
        let json = serde_json::to_string(&AgentKind::GithubCopilot).unwrap();
        assert_eq!(json, "\"github-copilot\"");
    }

    #[test]
    fn under_home_joins_skill_path_to_home() {
        let cfg = AgentConfig::under_home(
            AgentKind::Opencode,
            "OpenCode",
            Path::new("/home/u"),
            ".config/opencode/skills",
            true,
        );
        assert_eq!(cfg.skill_path, PathBuf::from("/home/u/.config/opencode/skills"));
    }
}
