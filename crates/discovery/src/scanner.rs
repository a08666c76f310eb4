use crate::frontmatter::parse_frontmatter;
use crate::types::{DuplicateInfo, LoadFailure, ModuleFile, SkillPackage, SkillSet};
use crate::Result;
use anyhow::{bail, Context};
use pathdiff::diff_paths;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// File name that marks a skill directory.
pub const SKILL_FILE: &str = "SKILL.md";

const MAX_SCAN_DEPTH: usize = 6;

/// Computes a SHA-256 hash of the given content, returning a lowercase hex string.
pub fn hash_content(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("{:x}", hasher.finalize())
}

/// Computes the SHA-256 hash of a file on disk.
pub fn hash_file(path: &Path) -> Result<String> {
    let data = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    Ok(hash_content(&data))
}

fn is_hidden_path(path: &Path) -> bool {
    path.components().any(|c| match c {
        Component::Normal(s) => s.to_string_lossy().starts_with('.'),
        _ => false,
    })
}

/// Whether `dir` holds its own `SKILL.md`, making it a separate skill.
pub fn is_skill_dir(dir: &Path) -> bool {
    dir.join(SKILL_FILE).is_file()
}

/// Collects companion files from a skill directory (files other than SKILL.md).
///
/// Hidden files and unreadable entries are skipped. Subdirectories with
/// their own `SKILL.md` belong to nested skills and are not descended into.
pub fn collect_module_files(skill_dir: &Path) -> Vec<ModuleFile> {
    let mut modules = Vec::new();

    let walker = WalkDir::new(skill_dir)
        .min_depth(1)
        .max_depth(10)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !(e.file_type().is_dir() && is_skill_dir(e.path())));

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                debug!(
                    error = %e,
                    path = ?e.path(),
                    "Skipping directory entry due to traversal error"
                );
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let Ok(rel_path) = path.strip_prefix(skill_dir) else {
            continue;
        };
        if rel_path == Path::new(SKILL_FILE) || is_hidden_path(rel_path) {
            continue;
        }

        match fs::read(path) {
            Ok(content) => {
                let hash = hash_content(&content);
                modules.push(ModuleFile {
                    relative_path: rel_path.to_path_buf(),
                    content,
                    hash,
                });
            }
            Err(e) => warn!(path = %path.display(), error = %e, "Skipping unreadable module file"),
        }
    }

    modules
}

/// Every non-hidden `SKILL.md` under `root`, sorted. Walk errors are logged.
pub(crate) fn skill_files(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .min_depth(1)
        .max_depth(MAX_SCAN_DEPTH)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| match e {
            Ok(e) => Some(e),
            Err(e) => {
                warn!(path = ?e.path(), error = %e, "Failed to read entry while scanning skills");
                None
            }
        })
        .filter(|e| e.file_type().is_file() && e.file_name() == SKILL_FILE)
        .map(|e| e.into_path())
        .filter(|p| !is_hidden_path(p.strip_prefix(root).unwrap_or(p)))
        .collect();
    files.sort();
    files
}

/// Name a skill would get from its location alone.
fn directory_name(path: &Path, root: &Path) -> String {
    path.parent()
        .and_then(|dir| diff_paths(dir, root))
        .and_then(|p| p.to_str().map(|s| s.replace('\\', "/")))
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| {
            root.file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("unknown")
                .to_string()
        })
}

fn load_package(path: &Path, root: &Path) -> Result<SkillPackage> {
    let content = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let text = String::from_utf8_lossy(&content);
    let parsed = parse_frontmatter(&text)?;
    let frontmatter = parsed.frontmatter.unwrap_or_default();

    let name = frontmatter
        .name
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| directory_name(path, root));

    let skill_dir = path.parent().unwrap_or(root);
    let hash = hash_content(&content);

    Ok(SkillPackage {
        name,
        description: frontmatter.description,
        version: frontmatter.version,
        source_path: path.to_path_buf(),
        content,
        hash,
        modules: collect_module_files(skill_dir),
    })
}

/// Loads every skill under `root`.
///
/// Each `SKILL.md` (up to six levels deep, hidden paths and symlinks
/// skipped) becomes one [`SkillPackage`]. When two files resolve to the same
/// name the first in path order wins and the other is recorded in
/// [`SkillSet::duplicates`]. Files that cannot be read or parsed are recorded
/// in [`SkillSet::errors`] instead of failing the whole scan.
pub fn load_skills(root: &Path) -> Result<SkillSet> {
    if !root.is_dir() {
        bail!("skill source directory not found: {}", root.display());
    }

    let mut set = SkillSet {
        root: root.to_path_buf(),
        ..Default::default()
    };
    let mut seen: HashMap<String, PathBuf> = HashMap::new();

    for path in skill_files(root) {
        let package = match load_package(&path, root) {
            Ok(p) => p,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Skipping skill that failed to load");
                set.errors.push(LoadFailure {
                    path,
                    error: format!("{e:#}"),
                });
                continue;
            }
        };

        if let Some(kept) = seen.get(&package.name) {
            debug!(name = %package.name, kept = %kept.display(), skipped = %path.display(), "Duplicate skill name");
            set.duplicates.push(DuplicateInfo {
                name: package.name,
                kept: kept.clone(),
                skipped: path,
            });
            continue;
        }

        seen.insert(package.name.clone(), path);
        set.skills.push(package);
    }

    debug!(
        root = %root.display(),
        skills = set.skills.len(),
        duplicates = set.duplicates.len(),
        errors = set.errors.len(),
        "Loaded skill source"
    );
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_hash_content() {
        let hash = hash_content(b"hello");
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(hash, hash_content(b"hello"));
        assert_ne!(hash, hash_content(b"hello!"));
    }

    #[test]
    fn test_is_hidden_path() {
        assert!(is_hidden_path(Path::new(".git/config")));
        assert!(is_hidden_path(Path::new("foo/.hidden/bar")));
        assert!(!is_hidden_path(Path::new("foo/bar/baz")));
    }

    #[test]
    fn name_falls_back_to_directory() {
        let tmp = tempdir().unwrap();
        write(&tmp.path().join("nested/foo/SKILL.md"), "# No frontmatter");

        let set = load_skills(tmp.path()).unwrap();
        assert_eq!(set.names(), vec!["nested/foo".to_string()]);
    }

    #[test]
    fn frontmatter_name_wins_over_directory() {
        let tmp = tempdir().unwrap();
        write(
            &tmp.path().join("dir-name/SKILL.md"),
            "---\nname: real-name\ndescription: d\nversion: 0.1.0\n---\n",
        );

        let set = load_skills(tmp.path()).unwrap();
        let skill = &set.skills[0];
        assert_eq!(skill.name, "real-name");
        assert_eq!(skill.description.as_deref(), Some("d"));
        assert_eq!(skill.version.as_deref(), Some("0.1.0"));
    }

    #[test]
    fn collects_modules_but_not_hidden_files() {
        let tmp = tempdir().unwrap();
        let dir = tmp.path().join("alpha");
        write(&dir.join("SKILL.md"), "---\nname: alpha\ndescription: a\n---\n");
        write(&dir.join("reference.md"), "ref");
        write(&dir.join("scripts/run.sh"), "echo hi");
        write(&dir.join(".cache/state"), "x");

        let modules = collect_module_files(&dir);
        let paths: Vec<_> = modules.iter().map(|m| m.relative_path.clone()).collect();
        assert_eq!(
            paths,
            vec![PathBuf::from("reference.md"), PathBuf::from("scripts/run.sh")]
        );
    }

    #[test]
    fn nested_skill_is_not_a_module_of_its_parent() {
        let tmp = tempdir().unwrap();
        write(&tmp.path().join("group/SKILL.md"), "---\nname: group\ndescription: g\n---\n");
        write(&tmp.path().join("group/notes.md"), "notes");
        write(
            &tmp.path().join("group/child/SKILL.md"),
            "---\nname: child\ndescription: c\n---\n",
        );
        write(&tmp.path().join("group/child/extra.md"), "extra");

        let set = load_skills(tmp.path()).unwrap();
        assert_eq!(set.names(), vec!["group".to_string(), "child".to_string()]);
        let group = set.get("group").unwrap();
        let paths: Vec<_> = group.modules.iter().map(|m| m.relative_path.clone()).collect();
        assert_eq!(paths, vec![PathBuf::from("notes.md")]);
        let child = set.get("child").unwrap();
        assert_eq!(child.modules[0].relative_path, PathBuf::from("extra.md"));
    }

    #[test]
    fn duplicates_keep_first_in_path_order() {
        let tmp = tempdir().unwrap();
        write(&tmp.path().join("a/SKILL.md"), "---\nname: same\ndescription: a\n---\n");
        write(&tmp.path().join("b/SKILL.md"), "---\nname: same\ndescription: b\n---\n");

        let set = load_skills(tmp.path()).unwrap();
        assert_eq!(set.skills.len(), 1);
        assert_eq!(set.skills[0].description.as_deref(), Some("a"));
        assert_eq!(set.duplicates.len(), 1);
        assert_eq!(set.duplicates[0].skipped, tmp.path().join("b/SKILL.md"));
    }

    #[test]
    fn broken_frontmatter_is_recorded_not_fatal() {
        let tmp = tempdir().unwrap();
        write(&tmp.path().join("ok/SKILL.md"), "---\nname: ok\ndescription: fine\n---\n");
        write(&tmp.path().join("bad/SKILL.md"), "---\nname: [oops\n---\n");

        let set = load_skills(tmp.path()).unwrap();
        assert_eq!(set.names(), vec!["ok".to_string()]);
        assert_eq!(set.errors.len(), 1);
        assert!(set.errors[0].error.contains("invalid YAML frontmatter"));
    }

    #[test]
    fn hidden_skill_directories_are_ignored() {
        let tmp = tempdir().unwrap();
        write(&tmp.path().join(".draft/SKILL.md"), "# draft");

        let set = load_skills(tmp.path()).unwrap();
        assert!(set.skills.is_empty());
    }

    #[test]
    fn missing_root_is_an_error() {
        let tmp = tempdir().unwrap();
        let err = load_skills(&tmp.path().join("nope")).unwrap_err();
        assert!(err.to_string().contains("skill source directory not found"));
    }
}
