//! Agent detection and skill installation for skillport.
//!
//! Each supported agent (Claude Code, GitHub Copilot, Cursor, OpenCode) is
//! described by an [`AgentConfig`] and driven through the [`AgentAdapter`]
//! trait. Detection checks that the agent's skill directory exists and
//! can be read; installation copies `SKILL.md` trees into that
//! directory.
//!
//! # Examples
//!
//! ```
//! use skillport_agents::{AgentKind, AgentRegistry, InstallOptions};
//! use std::fs;
//!
//! let home = tempfile::tempdir().unwrap();
//! fs::create_dir_all(home.path().join(".claude/skills")).unwrap();
//!
//! let registry = AgentRegistry::with_home(home.path());
//! assert_eq!(registry.detected(), vec![AgentKind::ClaudeCode]);
//!
//! let summary = registry
//!     .install_all(&[AgentKind::ClaudeCode], &[], &InstallOptions::default())
//!     .unwrap();
//! assert_eq!(summary.total_written(), 0);
//! ```

#![deny(unsafe_code)]

pub type Error = anyhow::Error;
pub type Result<T> = std::result::Result<T, Error>;

pub mod adapters;
pub mod config;
pub mod install;
pub mod registry;
pub mod report;
pub mod status;

pub use adapters::{
    sanitize_name, AgentAdapter, ClaudeCodeAgent, CursorAgent, GitHubCopilotAgent, OpenCodeAgent,
};
pub use config::{AgentConfig, AgentKind, AgentParseError};
pub use install::{InstallOptions, InstalledSkill};
pub use registry::{AgentRegistry, Detection, RegistryError};
pub use report::{AgentReport, InstallReport, InstallSummary, SkipReason};
pub use status::{agent_status, AgentStatus, SkillState, SkillStatus};
