//! Shared test utilities for skillport crates.
//!
//! This crate provides common test fixtures and utilities used across
//! multiple crates in the skillport workspace.

use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};

/// Serialize tests that mutate process-global state (env vars, cwd, etc).
///
/// Acquire this guard at the start of any test that modifies environment
/// variables to prevent race conditions between parallel tests.
pub fn env_guard() -> MutexGuard<'static, ()> {
    static TEST_SERIAL: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));
    TEST_SERIAL.lock().unwrap_or_else(|e| e.into_inner())
}

/// RAII guard for environment variables - restores original value on drop.
pub struct EnvVarGuard {
    key: &'static str,
    previous: Option<String>,
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        if let Some(v) = &self.previous {
            std::env::set_var(self.key, v);
        } else {
            std::env::remove_var(self.key);
        }
    }
}

/// Set an environment variable and return a guard that restores the original on drop.
///
/// # Example
/// ```
/// let _guard = skillport_test_utils::set_env_var("MY_VAR", Some("value"));
/// // MY_VAR is set to "value"
/// // When _guard drops, MY_VAR is restored to its original value
/// ```
pub fn set_env_var(key: &'static str, value: Option<&str>) -> EnvVarGuard {
    let previous = std::env::var(key).ok();
    if let Some(val) = value {
        std::env::set_var(key, val);
    } else {
        std::env::remove_var(key);
    }
    EnvVarGuard { key, previous }
}

/// A fake home directory plus a skill source directory.
///
/// The tempdir is automatically cleaned up when this struct is dropped.
pub struct TestFixture {
    pub tempdir: tempfile::TempDir,
    /// Directory to use as `$HOME`.
    pub home: PathBuf,
    /// Skill source directory (outside `home`).
    pub source: PathBuf,
}

impl TestFixture {
    /// Create a new fixture with empty `home/` and `source/` directories.
    ///
    /// Does NOT set HOME env var - use `home_guard()` for that.
    pub fn new() -> std::io::Result<Self> {
        let tempdir = tempfile::tempdir()?;
        let home = tempdir.path().join("home");
        let source = tempdir.path().join("source");

        std::fs::create_dir_all(&home)?;
        std::fs::create_dir_all(&source)?;

        Ok(Self {
            tempdir,
            home,
            source,
        })
    }

    /// Get the path that should be set as HOME.
    pub fn home_path(&self) -> &Path {
        &self.home
    }

    /// Create an RAII guard that sets HOME to this fixture's home directory.
    pub fn home_guard(&self) -> EnvVarGuard {
        set_env_var("HOME", Some(self.home.to_str().expect("utf-8 temp path")))
    }

    /// Create an agent's skill directory under home (e.g. `.claude/skills`)
    /// so that agent is detected. Returns the created path.
    pub fn install_agent_dir(&self, relative: &str) -> std::io::Result<PathBuf> {
        let dir = self.home.join(relative);
        std::fs::create_dir_all(&dir)?;
        Ok(dir)
    }

    /// Create a source skill with raw `SKILL.md` content.
    ///
    /// Returns the path to the skill directory.
    pub fn create_skill(&self, name: &str, content: &str) -> std::io::Result<PathBuf> {
        let skill_dir = self.source.join(name);
        std::fs::create_dir_all(&skill_dir)?;
        std::fs::write(skill_dir.join("SKILL.md"), content)?;
        Ok(skill_dir)
    }

    /// Create a source skill with standard frontmatter.
    pub fn create_skill_with_frontmatter(
        &self,
        name: &str,
        description: &str,
        body: &str,
    ) -> std::io::Result<PathBuf> {
        let content = format!(
            "---\nname: {}\ndescription: {}\n---\n{}",
            name, description, body
        );
        self.create_skill(name, &content)
    }
}
