//! Cursor adapter.
//!
//! Cursor is detected through `~/.cursor/skills` but reads project rules
//! (`.mdc`) rather than `SKILL.md` directories, so it is reported as
//! unsupported and never written to.

use super::traits::AgentAdapter;
use crate::config::{AgentConfig, AgentKind};
use crate::Result;
use std::path::Path;

/// Adapter for the Cursor editor.
pub struct CursorAgent {
    config: AgentConfig,
}

impl CursorAgent {
    /// Creates a CursorAgent for `~/.cursor/skills`.
    pub fn new() -> Result<Self> {
        Ok(Self::with_home(&skillport_state::home_dir()?))
    }

    /// Creates a CursorAgent under a custom home (for testing).
    pub fn with_home(home: &Path) -> Self {
        Self {
            config: AgentConfig::under_home(
                AgentKind::Cursor,
                "Cursor",
                home,
                ".cursor/skills",
                false,
            ),
        }
    }
}

impl AgentAdapter for CursorAgent {
    fn config(&self) -> &AgentConfig {
        &self.config
    }
}
