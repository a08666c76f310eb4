use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A companion file that ships next to a skill's `SKILL.md`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModuleFile {
    /// Path relative to the skill directory (e.g. `scripts/run.sh`).
    pub relative_path: PathBuf,
    /// Raw file contents.
    pub content: Vec<u8>,
    /// SHA-256 of the contents.
    pub hash: String,
}

/// A skill loaded from the source directory, ready to be installed.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SkillPackage {
    /// The skill name (from frontmatter, else the directory path).
    pub name: String,
    /// Frontmatter description, if any.
    pub description: Option<String>,
    /// Frontmatter version, if any.
    pub version: Option<String>,
    /// Path to the source `SKILL.md`.
    pub source_path: PathBuf,
    /// Raw `SKILL.md` contents.
    #[serde(skip_serializing)]
    pub content: Vec<u8>,
    /// SHA-256 of `content` in lowercase hex.
    pub hash: String,
    /// Companion files from the skill directory.
    #[serde(skip_serializing)]
    pub modules: Vec<ModuleFile>,
}

/// Records a skill that was skipped because an earlier one had the same name.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DuplicateInfo {
    /// The duplicated skill name.
    pub name: String,
    /// Path of the file that was kept.
    pub kept: PathBuf,
    /// Path of the file that was skipped.
    pub skipped: PathBuf,
}

/// A `SKILL.md` that could not be loaded.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LoadFailure {
    /// The offending file.
    pub path: PathBuf,
    /// Human-readable reason.
    pub error: String,
}

/// Everything found in a skill source directory.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SkillSet {
    /// Root that was scanned.
    pub root: PathBuf,
    /// Loaded skills, sorted by source path.
    pub skills: Vec<SkillPackage>,
    /// Name collisions that were resolved by keeping the first skill.
    pub duplicates: Vec<DuplicateInfo>,
    /// Files that failed to load.
    pub errors: Vec<LoadFailure>,
}

impl SkillSet {
    /// Looks up a skill by exact name.
    pub fn get(&self, name: &str) -> Option<&SkillPackage> {
        self.skills.iter().find(|s| s.name == name)
    }

    /// Returns the skills whose names appear in `names`, or all skills when
    /// `names` is empty. Unknown names are returned as the error list.
    pub fn select(&self, names: &[String]) -> (Vec<SkillPackage>, Vec<String>) {
        if names.is_empty() {
            return (self.skills.clone(), Vec::new());
        }
        let mut selected = Vec::new();
        let mut missing = Vec::new();
        for name in names {
            match self.get(name) {
                Some(skill) => selected.push(skill.clone()),
                None => missing.push(name.clone()),
            }
        }
        (selected, missing)
    }

    /// Skill names in load order.
    pub fn names(&self) -> Vec<String> {
        self.skills.iter().map(|s| s.name.clone()).collect()
    }
}
