//! Shared utility functions for agent adapters.

use crate::Result;
use anyhow::Context;
use std::fs;
use std::io::{self, Write};
use std::path::{Component, Path};
use tracing::debug;

/// Returns true if any path component is hidden (starts with a dot).
pub fn is_hidden_path(path: &Path) -> bool {
    path.components().any(|c| match c {
        Component::Normal(s) => s.to_string_lossy().starts_with('.'),
        _ => false,
    })
}

/// Returns true if `path` is relative and only walks downwards.
pub fn is_contained_relative(path: &Path) -> bool {
    path.components().all(|c| matches!(c, Component::Normal(_)))
        && path.components().next().is_some()
}

/// Sanitizes a skill name before it becomes a directory under the agent's
/// skill path.
///
/// Keeps forward slashes for nested skills (`category/my-skill`). Each
/// segment keeps only alphanumerics, `-` and `_`; empty, `.` and `..`
/// segments are dropped, so the result can never climb out of the skill
/// directory.
pub fn sanitize_name(name: &str) -> String {
    name.split(['/', '\\'])
        .filter(|segment| !segment.is_empty() && *segment != "." && *segment != "..")
        .map(|segment| {
            segment
                .chars()
                .filter(|c| c.is_alphanumeric() || *c == '-' || *c == '_')
                .collect::<String>()
        })
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// Checks that an agent directory exists and can be listed. Any failure counts as absent.
pub fn dir_is_readable(path: &Path) -> bool {
    debug!(path = %path.display(), "Checking agent directory");
    let outcome = fs::metadata(path).and_then(|meta| {
        if meta.is_dir() {
            fs::read_dir(path).map(|_| ())
        } else {
            Err(io::Error::other("not a directory"))
        }
    });
    match outcome {
        Ok(()) => {
            debug!(path = %path.display(), detected = true, "Agent directory check finished");
            true
        }
        Err(e) => {
            debug!(
                path = %path.display(),
                detected = false,
                error = %e,
                "Agent directory check finished"
            );
            false
        }
    }
}

/// Writes `content` to `path` through a temp file in the same directory, so
/// readers never observe a half-written file.
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    let dir = path
        .parent()
        .with_context(|| format!("no parent directory for {}", path.display()))?;
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temp file in {}", dir.display()))?;
    tmp.write_all(content)
        .with_context(|| format!("Failed to write temp file for {}", path.display()))?;
    tmp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
