//! OpenCode adapter for `~/.config/opencode/skills`.

use super::traits::AgentAdapter;
use crate::config::{AgentConfig, AgentKind};
use crate::Result;
use std::path::Path;

/// Adapter for the OpenCode terminal agent.
pub struct OpenCodeAgent {
    config: AgentConfig,
}

impl OpenCodeAgent {
    /// Creates an OpenCodeAgent for `~/.config/opencode/skills`.
    pub fn new() -> Result<Self> {
        Ok(Self::with_home(&skillport_state::home_dir()?))
    }

    /// Creates an OpenCodeAgent under a custom home (for testing).
    pub fn with_home(home: &Path) -> Self {
        Self {
            config: AgentConfig::under_home(
                AgentKind::Opencode,
                "OpenCode",
                home,
                ".config/opencode/skills",
                true,
            ),
        }
    }
}

impl AgentAdapter for OpenCodeAgent {
    fn config(&self) -> &AgentConfig {
        &self.config
    }
}
