//! Registry of known agents.
//!
//! The registry owns one adapter per [`AgentKind`] in registration order and
//! fans detection, installation and removal out across them.

use crate::adapters::{
    AgentAdapter, ClaudeCodeAgent, CursorAgent, GitHubCopilotAgent, OpenCodeAgent,
};
use crate::config::AgentKind;
use crate::install::InstallOptions;
use crate::report::{AgentReport, InstallReport, InstallSummary, SkipReason};
use crate::Result;
use rayon::prelude::*;
use serde::Serialize;
use skillport_discovery::SkillPackage;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Errors raised while building a registry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// An adapter for this agent is already registered.
    #[error("agent '{0}' is already registered")]
    Duplicate(AgentKind),
}

/// Result of probing one agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Detection {
    pub name: AgentKind,
    pub display_name: String,
    pub detected: bool,
    pub supported: bool,
    pub skill_path: PathBuf,
}

/// Ordered set of agent adapters, at most one per kind.
#[derive(Default)]
pub struct AgentRegistry {
    adapters: Vec<Box<dyn AgentAdapter>>,
}

impl AgentRegistry {
    /// Creates a registry with no adapters.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a registry with every built-in agent rooted at the user's home.
    pub fn new() -> Result<Self> {
        Ok(Self::with_home(&skillport_state::home_dir()?))
    }

    /// Creates a registry with every built-in agent rooted at `home`.
    pub fn with_home(home: &Path) -> Self {
        let adapters: Vec<Box<dyn AgentAdapter>> = vec![
            Box::new(ClaudeCodeAgent::with_home(home)),
            Box::new(GitHubCopilotAgent::with_home(home)),
            Box::new(CursorAgent::with_home(home)),
            Box::new(OpenCodeAgent::with_home(home)),
        ];
        Self { adapters }
    }

    /// Adds an adapter, rejecting a second adapter for the same kind.
    pub fn register(
        &mut self,
        adapter: Box<dyn AgentAdapter>,
    ) -> std::result::Result<(), RegistryError> {
        let kind = adapter.name();
        if self.get(kind).is_some() {
            return Err(RegistryError::Duplicate(kind));
        }
        self.adapters.push(adapter);
        Ok(())
    }

    /// Looks up the adapter for `kind`.
    pub fn get(&self, kind: AgentKind) -> Option<&dyn AgentAdapter> {
        self.adapters
            .iter()
            .find(|a| a.name() == kind)
            .map(|a| a.as_ref())
    }

    /// Iterates adapters in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn AgentAdapter> {
        self.adapters.iter().map(|a| a.as_ref())
    }

    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }

    /// Detects every agent concurrently; results keep registration order.
    pub fn detect_all(&self) -> Vec<Detection> {
        self.adapters
            .par_iter()
            .map(|adapter| {
                let config = adapter.config();
                Detection {
                    name: config.name,
                    display_name: config.display_name.to_string(),
                    detected: adapter.detect(),
                    supported: config.supported,
                    skill_path: config.skill_path.clone(),
                }
            })
            .collect()
    }

    /// Kinds of agents present on this machine, in registration order.
    pub fn detected(&self) -> Vec<AgentKind> {
        self.detect_all()
            .into_iter()
            .filter(|d| d.detected)
            .map(|d| d.name)
            .collect()
    }

    /// Installs `skills` into each target.
    ///
    /// Unsupported or undetected targets get a skip entry instead of an
    /// install. The first I/O failure aborts the run.
    pub fn install_all(
        &self,
        targets: &[AgentKind],
        skills: &[SkillPackage],
        options: &InstallOptions,
    ) -> Result<InstallSummary> {
        self.for_each_target(targets, |adapter| adapter.install(skills, options))
    }

    /// Removes the named skills from each target.
    pub fn uninstall_all(
        &self,
        targets: &[AgentKind],
        names: &[String],
        dry_run: bool,
    ) -> Result<InstallSummary> {
        self.for_each_target(targets, |adapter| adapter.uninstall(names, dry_run))
    }

    fn for_each_target<F>(&self, targets: &[AgentKind], mut op: F) -> Result<InstallSummary>
    where
        F: FnMut(&dyn AgentAdapter) -> Result<InstallReport>,
    {
        let mut summary = InstallSummary::default();
        for &kind in targets {
            let Some(adapter) = self.get(kind) else {
                debug!(agent = %kind, "No adapter registered; skipping");
                continue;
            };
            let config = adapter.config();
            let report = if !config.supported {
                InstallReport::skipped(SkipReason::UnsupportedAgent { agent: kind })
            } else if !adapter.detect() {
                InstallReport::skipped(SkipReason::NotDetected { agent: kind })
            } else {
                op(adapter)?
            };
            info!(
                agent = %kind,
                written = report.written.len(),
                skipped = report.skipped.len(),
                "Agent finished"
            );
            summary.agents.push(AgentReport {
                agent: kind,
                display_name: config.display_name.to_string(),
                skill_path: config.skill_path.clone(),
                report,
            });
        }
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MockAgentAdapter;
    use crate::config::AgentConfig;
    use std::fs;
    use tempfile::tempdir;

    fn mock(kind: AgentKind, detected: bool, supported: bool) -> MockAgentAdapter {
        let config = AgentConfig::under_home(
            kind,
            "Mock",
            Path::new("/nonexistent"),
            ".mock/skills",
            supported,
        );
        let mut adapter = MockAgentAdapter::new();
        adapter.expect_config().return_const(config);
        adapter.expect_name().return_const(kind);
        adapter.expect_detect().return_const(detected);
        adapter
    }

    #[test]
    fn built_in_agents_register_in_fixed_order() {
        let registry = AgentRegistry::with_home(Path::new("/home/dev"));
        let kinds: Vec<_> = registry.iter().map(|a| a.name()).collect();
        assert_eq!(kinds, AgentKind::ALL.to_vec());
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut registry = AgentRegistry::empty();
        registry
            .register(Box::new(mock(AgentKind::Cursor, false, false)))
            .unwrap();
        let err = registry
            .register(Box::new(mock(AgentKind::Cursor, true, false)))
            .unwrap_err();
        assert_eq!(err, RegistryError::Duplicate(AgentKind::Cursor));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn detect_all_reports_every_agent_in_order() {
        let tmp = tempdir().unwrap();
        fs::create_dir_all(tmp.path().join(".cursor/skills")).unwrap();
        fs::create_dir_all(tmp.path().join(".config/opencode/skills")).unwrap();
        // Agent home without a skill directory is not enough.
        fs::create_dir_all(tmp.path().join(".claude")).unwrap();

        let registry = AgentRegistry::with_home(tmp.path());
        let results = registry.detect_all();
        let flags: Vec<_> = results.iter().map(|d| (d.name, d.detected)).collect();
        assert_eq!(
            flags,
            vec![
                (AgentKind::ClaudeCode, false),
                (AgentKind::GithubCopilot, false),
                (AgentKind::Cursor, true),
                (AgentKind::Opencode, true),
            ]
        );
        assert_eq!(
            registry.detected(),
            vec![AgentKind::Cursor, AgentKind::Opencode]
        );
    }

    #[test]
    fn install_all_skips_unsupported_and_undetected_targets() {
        let mut registry = AgentRegistry::empty();
        registry
            .register(Box::new(mock(AgentKind::Cursor, true, false)))
            .unwrap();
        registry
            .register(Box::new(mock(AgentKind::Opencode, false, true)))
            .unwrap();

        let mut claude = mock(AgentKind::ClaudeCode, true, true);
        claude.expect_install().times(1).returning(|skills, _| {
            Ok(InstallReport {
                written: skills.iter().map(|s| s.name.clone()).collect(),
                ..Default::default()
            })
        });
        registry.register(Box::new(claude)).unwrap();

        let summary = registry
            .install_all(
                &[AgentKind::Cursor, AgentKind::Opencode, AgentKind::ClaudeCode],
                &[],
                &InstallOptions::default(),
            )
            .unwrap();

        assert_eq!(summary.agents.len(), 3);
        assert!(matches!(
            summary.agents[0].report.skipped[0],
            SkipReason::UnsupportedAgent { .. }
        ));
        assert!(matches!(
            summary.agents[1].report.skipped[0],
            SkipReason::NotDetected { .. }
        ));
        assert!(summary.agents[2].report.skipped.is_empty());
    }

    #[test]
    fn install_all_propagates_adapter_failure() {
        let mut adapter = mock(AgentKind::ClaudeCode, true, true);
        adapter
            .expect_install()
            .returning(|_, _| Err(anyhow::anyhow!("disk full")));
        let mut registry = AgentRegistry::empty();
        registry.register(Box::new(adapter)).unwrap();

        let err = registry
            .install_all(&[AgentKind::ClaudeCode], &[], &InstallOptions::default())
            .unwrap_err();
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn uninstall_all_ignores_unregistered_targets() {
        let registry = AgentRegistry::empty();
        let summary = registry
            .uninstall_all(&[AgentKind::ClaudeCode], &["x".into()], false)
            .unwrap();
        assert!(summary.agents.is_empty());
    }
}
