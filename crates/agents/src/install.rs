//! Copying skills into, listing, and removing them from an agent's skill
//! directory. Every adapter shares this layout: `<skill_path>/<name>/SKILL.md`
//! plus the skill's companion files.

use crate::adapters::utils::{atomic_write, is_contained_relative, is_hidden_path, sanitize_name};
use crate::config::AgentConfig;
use crate::report::{InstallReport, SkipReason};
use crate::Result;
use anyhow::Context;
use serde::Serialize;
use skillport_discovery::{hash_content, hash_file, is_skill_dir, SkillPackage, SKILL_FILE};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Controls how [`install_skills`] treats existing copies.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstallOptions {
    /// Replace installed skills whose content differs from the source.
    pub force: bool,
    /// Report what would happen without touching the filesystem.
    pub dry_run: bool,
}

/// A skill found in an agent's skill directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstalledSkill {
    /// Directory path relative to the skill directory (e.g. `nested/foo`).
    pub name: String,
    /// Path to the installed `SKILL.md`.
    pub path: PathBuf,
    /// SHA-256 of the installed `SKILL.md`.
    pub hash: String,
}

/// Whether the installed copy matches what is on disk in the source.
pub(crate) fn matches_source(dest_dir: &Path, skill: &SkillPackage) -> Result<bool> {
    let skill_file = dest_dir.join(SKILL_FILE);
    let existing = fs::read(&skill_file)
        .with_context(|| format!("Failed to read existing skill: {}", skill_file.display()))?;
    if hash_content(&existing) != skill.hash {
        return Ok(false);
    }
    for module in &skill.modules {
        let path = dest_dir.join(&module.relative_path);
        match fs::read(&path) {
            Ok(content) if hash_content(&content) == module.hash => {}
            _ => return Ok(false),
        }
    }
    Ok(true)
}

fn write_skill(dest_dir: &Path, skill: &SkillPackage, report: &mut InstallReport) -> Result<()> {
    atomic_write(&dest_dir.join(SKILL_FILE), &skill.content)?;
    for module in &skill.modules {
        if !is_contained_relative(&module.relative_path) {
            report.warnings.push(format!(
                "{}: skipped module outside skill directory ({})",
                skill.name,
                module.relative_path.display()
            ));
            continue;
        }
        atomic_write(&dest_dir.join(&module.relative_path), &module.content)?;
    }
    Ok(())
}

/// Removes a skill's files from `dir`, leaving nested skills in place.
fn clear_skill_dir(dir: &Path) -> Result<()> {
    let mut dirs = Vec::new();
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| !(e.file_type().is_dir() && is_skill_dir(e.path())));
    for entry in walker {
        let entry = entry.with_context(|| format!("Failed to scan {}", dir.display()))?;
        if entry.file_type().is_dir() {
            dirs.push(entry.into_path());
        } else {
            fs::remove_file(entry.path())
                .with_context(|| format!("Failed to remove {}", entry.path().display()))?;
        }
    }
    // Deepest first; directories still holding nested skills stay.
    for sub in dirs.iter().rev() {
        let _ = fs::remove_dir(sub);
    }
    Ok(())
}

/// Installs `skills` into `config.skill_path`.
///
/// Skills whose installed copy already matches are skipped as unchanged;
/// differing copies are skipped unless `options.force` is set, in which case
/// the old files are removed first so stale companion files go away. Nested
/// skills inside the directory are left alone.
pub fn install_skills(
    config: &AgentConfig,
    skills: &[SkillPackage],
    options: &InstallOptions,
) -> Result<InstallReport> {
    let mut report = if options.dry_run {
        InstallReport::dry_run()
    } else {
        InstallReport::default()
    };

    for skill in skills {
        let safe_rel_dir = sanitize_name(&skill.name);
        if safe_rel_dir.is_empty() {
            report.skipped.push(SkipReason::InvalidName {
                item: skill.name.clone(),
            });
            continue;
        }

        let dest_dir = config.skill_path.join(&safe_rel_dir);
        let exists = dest_dir.join(SKILL_FILE).exists();

        if exists {
            if matches_source(&dest_dir, skill)? {
                report.skipped.push(SkipReason::Unchanged {
                    item: skill.name.clone(),
                });
                continue;
            }
            if !options.force {
                report.skipped.push(SkipReason::WouldOverwrite {
                    item: skill.name.clone(),
                });
                continue;
            }
        }

        if options.dry_run {
            report.written.push(skill.name.clone());
            continue;
        }

        if exists {
            debug!(agent = %config.name, path = %dest_dir.display(), "Replacing installed skill");
            clear_skill_dir(&dest_dir)?;
        }

        write_skill(&dest_dir, skill, &mut report)?;
        info!(agent = %config.name, skill = %skill.name, path = %dest_dir.display(), "Installed skill");
        report.written.push(skill.name.clone());
    }

    Ok(report)
}

/// Lists skills installed under `config.skill_path`.
///
/// A missing skill directory yields an empty list. Symlinks and hidden
/// paths are skipped.
pub fn installed_skills(config: &AgentConfig) -> Result<Vec<InstalledSkill>> {
    let skills_dir = &config.skill_path;
    if !skills_dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut skills = Vec::new();
    for entry in WalkDir::new(skills_dir)
        .min_depth(1)
        .max_depth(20)
        .follow_links(false)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!(
                    path = ?e.path(),
                    error = %e,
                    "Failed to read directory entry while scanning skills"
                );
                continue;
            }
        };
        if entry.file_type().is_symlink() || !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let Ok(rel) = path.strip_prefix(skills_dir) else {
            continue;
        };
        if is_hidden_path(rel) || entry.file_name() != SKILL_FILE {
            continue;
        }

        // ~/.claude/skills/nested/foo/SKILL.md -> "nested/foo"
        let name = rel
            .parent()
            .and_then(|p| p.to_str())
            .filter(|s| !s.is_empty())
            .map(|s| s.replace('\\', "/"))
            .unwrap_or_else(|| "unknown".to_string());

        skills.push(InstalledSkill {
            name,
            path: path.to_path_buf(),
            hash: hash_file(path)?,
        });
    }
    Ok(skills)
}

/// Removes empty directories between `dir` and `stop` (exclusive).
fn prune_empty_parents(mut dir: &Path, stop: &Path) {
    while dir != stop && dir.starts_with(stop) {
        if fs::remove_dir(dir).is_err() {
            break;
        }
        match dir.parent() {
            Some(parent) => dir = parent,
            None => break,
        }
    }
}

/// Removes the named skills from `config.skill_path`.
pub fn uninstall_skills(
    config: &AgentConfig,
    names: &[String],
    dry_run: bool,
) -> Result<InstallReport> {
    let mut report = if dry_run {
        InstallReport::dry_run()
    } else {
        InstallReport::default()
    };

    for name in names {
        let safe_rel_dir = sanitize_name(name);
        if safe_rel_dir.is_empty() {
            report
                .skipped
                .push(SkipReason::InvalidName { item: name.clone() });
            continue;
        }

        let dir = config.skill_path.join(&safe_rel_dir);
        if !dir.join(SKILL_FILE).is_file() {
            report
                .skipped
                .push(SkipReason::NotInstalled { item: name.clone() });
            continue;
        }

        if !dry_run {
            clear_skill_dir(&dir)?;
            prune_empty_parents(&dir, &config.skill_path);
            info!(agent = %config.name, skill = %name, "Removed skill");
        }
        report.written.push(name.clone());
    }

    Ok(report)
}
