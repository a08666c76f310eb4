//! Reporting types for tracking what was installed and what was skipped.

use crate::config::AgentKind;
use serde::Serialize;
use std::path::PathBuf;

/// Reasons why an item was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum SkipReason {
    /// Installed copy already matches the source
    Unchanged { item: String },
    /// Installed copy differs and overwriting was not requested
    WouldOverwrite { item: String },
    /// Name has no characters left after sanitizing
    InvalidName { item: String },
    /// Nothing to remove
    NotInstalled { item: String },
    /// The agent does not load skill directories
    UnsupportedAgent { agent: AgentKind },
    /// The agent is not present on this machine
    NotDetected { agent: AgentKind },
}

impl SkipReason {
    /// Returns a human-readable description of the skip reason.
    pub fn description(&self) -> String {
        match self {
            Self::Unchanged { item } => format!("{} unchanged (same hash)", item),
            Self::WouldOverwrite { item } => {
                format!("{} already installed with different content", item)
            }
            Self::InvalidName { item } => format!("'{}' is not a usable skill name", item),
            Self::NotInstalled { item } => format!("{} is not installed", item),
            Self::UnsupportedAgent { agent } => {
                format!("{} does not support skill installation", agent)
            }
            Self::NotDetected { agent } => format!("{} was not detected", agent),
        }
    }

    /// Returns actionable guidance for the user.
    pub fn guidance(&self) -> Option<&'static str> {
        match self {
            Self::Unchanged { .. } | Self::NotInstalled { .. } => None,
            Self::WouldOverwrite { .. } => Some("Use --force to replace the installed copy"),
            Self::InvalidName { .. } => {
                Some("Rename the skill using letters, digits, '-' or '_'")
            }
            Self::UnsupportedAgent { .. } => Some("Pick a different --agent"),
            Self::NotDetected { .. } => Some("Install the agent first, then re-run"),
        }
    }
}

/// Outcome of an install or uninstall against one agent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InstallReport {
    /// Names of items written (or removed, for uninstall)
    pub written: Vec<String>,
    /// Items that were skipped with reasons
    pub skipped: Vec<SkipReason>,
    /// Non-fatal warnings
    pub warnings: Vec<String>,
    /// Nothing was touched on disk
    pub dry_run: bool,
}

impl InstallReport {
    /// Creates a report for a run that only records intent.
    pub fn dry_run() -> Self {
        Self {
            dry_run: true,
            ..Default::default()
        }
    }

    /// Creates a report holding a single skip.
    pub fn skipped(reason: SkipReason) -> Self {
        Self {
            skipped: vec![reason],
            ..Default::default()
        }
    }
}

/// Per-agent entry in an [`InstallSummary`].
#[derive(Debug, Clone, Serialize)]
pub struct AgentReport {
    pub agent: AgentKind,
    pub display_name: String,
    pub skill_path: PathBuf,
    pub report: InstallReport,
}

/// Outcome of an install or uninstall across several agents.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InstallSummary {
    pub agents: Vec<AgentReport>,
}

impl InstallSummary {
    /// Returns total items written across all agents.
    pub fn total_written(&self) -> usize {
        self.agents.iter().map(|a| a.report.written.len()).sum()
    }

    /// Returns total items skipped across all agents.
    pub fn total_skipped(&self) -> usize {
        self.agents.iter().map(|a| a.report.skipped.len()).sum()
    }

    /// Generates a formatted summary for display.
    pub fn format_summary(&self, verb: &str) -> String {
        let mut out = String::new();
        for entry in &self.agents {
            let report = &entry.report;
            out.push_str(&format!(
                "{} ({}): {} {}, {} skipped{}\n",
                entry.display_name,
                entry.skill_path.display(),
                report.written.len(),
                verb,
                report.skipped.len(),
                if report.dry_run { " (dry run)" } else { "" }
            ));
            for name in &report.written {
                out.push_str(&format!("  + {}\n", name));
            }
            for reason in &report.skipped {
                out.push_str(&format!("  - {}\n", reason.description()));
                if let Some(hint) = reason.guidance() {
                    out.push_str(&format!("    {}\n", hint));
                }
            }
            for warning in &report.warnings {
                out.push_str(&format!("  ! {}\n", warning));
            }
        }
        out
    }
}
