use anyhow::Result;
use std::path::PathBuf;

/// Source directory used when nothing else names one.
pub const DEFAULT_SOURCE_DIR: &str = "skills";

/// Returns the user's home directory.
pub fn home_dir() -> Result<PathBuf> {
    #[cfg(unix)]
    if let Ok(home) = std::env::var("HOME") {
        if !home.is_empty() {
            return Ok(PathBuf::from(home));
        }
    }
    dirs::home_dir().ok_or_else(|| anyhow::anyhow!("home directory not found"))
}

/// Returns the skill source directory from `SKILLPORT_SOURCE_DIR`.
pub fn env_source_dir() -> Option<PathBuf> {
    std::env::var("SKILLPORT_SOURCE_DIR")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .map(PathBuf::from)
}

/// Returns default install targets from `SKILLPORT_AGENTS` (comma-separated).
pub fn env_agents() -> Vec<String> {
    std::env::var("SKILLPORT_AGENTS")
        .map(|s| {
            s.split(',')
                .map(str::trim)
                .filter(|a| !a.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

/// Checks if `SKILLPORT_FORCE` environment variable is set to true.
pub fn env_force() -> bool {
    std::env::var("SKILLPORT_FORCE")
        .map(|s| s == "1" || s.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Returns the path to the config file.
///
/// `SKILLPORT_CONFIG` overrides the default `~/.skillport/config.toml`.
pub fn config_file() -> Option<PathBuf> {
    if let Ok(custom) = std::env::var("SKILLPORT_CONFIG") {
        return Some(PathBuf::from(custom));
    }
    home_dir()
        .ok()
        .map(|h| h.join(".skillport").join("config.toml"))
}

/// Picks the skill source directory: CLI flag, then environment (which
/// already carries any config file value), then `./skills`.
pub fn resolve_source_dir(cli: Option<PathBuf>) -> PathBuf {
    cli.or_else(env_source_dir)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE_DIR))
}
