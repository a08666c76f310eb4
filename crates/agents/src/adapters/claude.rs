//! Claude Code adapter for `~/.claude/skills`.

use super::traits::AgentAdapter;
use crate::config::{AgentConfig, AgentKind};
use crate::Result;
use std::path::Path;

/// Adapter for Claude Code.
pub struct ClaudeCodeAgent {
    config: AgentConfig,
}

impl ClaudeCodeAgent {
    /// Creates a ClaudeCodeAgent for the current user's `~/.claude/skills`.
    pub fn new() -> Result<Self> {
        Ok(Self::with_home(&skillport_state::home_dir()?))
    }

    /// Creates a ClaudeCodeAgent under a custom home (for testing).
    pub fn with_home(home: &Path) -> Self {
        Self {
            config: AgentConfig::under_home(
                AgentKind::ClaudeCode,
                "Claude Code",
                home,
                ".claude/skills",
                true,
            ),
        }
    }
}

impl AgentAdapter for ClaudeCodeAgent {
    fn config(&self) -> &AgentConfig {
        &self.config
    }
}
