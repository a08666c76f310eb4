//! Configuration file support for skillport.
//!
//! Loads settings from `~/.skillport/config.toml` (or `$SKILLPORT_CONFIG`)
//! with the following precedence:
//! CLI arguments > Environment variables > Config file
//!
//! ## Configuration File Format
//!
//! ```toml
//! [install]
//! # Directory holding <skill>/SKILL.md folders
//! source_dir = "/home/me/team-skills"
//!
//! # Agents to install into when none are named on the command line
//! agents = ["claude-code", "opencode"]
//!
//! # Overwrite skills that differ from the source
//! force = false
//! ```

use crate::env::config_file;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Top-level configuration structure.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Install command configuration.
    #[serde(default)]
    pub install: InstallConfig,
}

/// Configuration for the install command.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InstallConfig {
    /// Skill source directory.
    pub source_dir: Option<PathBuf>,
    /// Default target agents.
    pub agents: Option<Vec<String>>,
    /// Overwrite differing skills.
    pub force: Option<bool>,
}

/// Loads the configuration file at `path` if it exists.
///
/// Returns `Ok(None)` if the file doesn't exist and `Err` if it exists but
/// fails to parse.
pub fn load_config_from(path: &Path) -> Result<Option<Config>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config: Config = toml::from_str(&content)
        .with_context(|| format!("failed to parse config file {}", path.display()))?;

    tracing::debug!(
        target: "skillport::config",
        path = %path.display(),
        "Loaded configuration file"
    );

    Ok(Some(config))
}

/// Loads the configuration file from its default location.
pub fn load_config() -> Result<Option<Config>> {
    match config_file() {
        Some(path) => load_config_from(&path),
        None => Ok(None),
    }
}

/// Applies configuration file settings to environment variables.
///
/// Only sets environment variables that are not already set, preserving
/// the precedence: CLI > ENV > config file. Call before parsing CLI
/// arguments so clap's `env` fallbacks see the values.
pub fn apply_config_to_env() -> Result<()> {
    if let Some(config) = load_config()? {
        apply_install_config_to_env(&config.install);
    }
    Ok(())
}

fn apply_install_config_to_env(install: &InstallConfig) {
    fn set_if_absent(key: &str, value: &str) {
        if std::env::var(key).is_err() {
            std::env::set_var(key, value);
            tracing::trace!(
                target: "skillport::config",
                key,
                "Set environment variable from config file"
            );
        }
    }

    if let Some(ref dir) = install.source_dir {
        set_if_absent("SKILLPORT_SOURCE_DIR", &dir.to_string_lossy());
    }

    if let Some(ref agents) = install.agents {
        set_if_absent("SKILLPORT_AGENTS", &agents.join(","));
    }

    if let Some(force) = install.force {
        set_if_absent("SKILLPORT_FORCE", if force { "true" } else { "false" });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillport_test_utils::{env_guard, set_env_var};
    use tempfile::tempdir;

    #[test]
    fn parse_minimal_config() {
        let config: Config = toml::from_str("[install]\n").unwrap();
        assert!(config.install.source_dir.is_none());
        assert!(config.install.agents.is_none());
    }

    #[test]
    fn parse_full_install_config() {
        let toml = r#"
            [install]
            source_dir = "/srv/skills"
            agents = ["claude-code", "cursor"]
            force = true
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.install.source_dir, Some(PathBuf::from("/srv/skills")));
        assert_eq!(
            config.install.agents.as_deref(),
            Some(&["claude-code".to_string(), "cursor".to_string()][..])
        );
        assert_eq!(config.install.force, Some(true));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<Config>("[install]\nsorce_dir = \"x\"\n").is_err());
    }

    #[test]
    fn load_missing_file_returns_none() {
        let tmp = tempdir().unwrap();
        let loaded = load_config_from(&tmp.path().join("config.toml")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn load_broken_file_is_error() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[install\n").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(err.to_string().contains("failed to parse config file"));
    }

    #[test]
    fn apply_config_respects_existing_env_vars() {
        let _g = env_guard();
        let _src = set_env_var("SKILLPORT_SOURCE_DIR", Some("/env/skills"));
        let _agents = set_env_var("SKILLPORT_AGENTS", None);

        apply_install_config_to_env(&InstallConfig {
            source_dir: Some(PathBuf::from("/config/skills")),
            agents: Some(vec!["opencode".into(), "claude-code".into()]),
            force: None,
        });

        assert_eq!(std::env::var("SKILLPORT_SOURCE_DIR").unwrap(), "/env/skills");
        assert_eq!(
            std::env::var("SKILLPORT_AGENTS").unwrap(),
            "opencode,claude-code"
        );
    }
}
