//! Frontmatter checks run before a skill is installed.
//!
//! Every agent skillport targets loads skills by their frontmatter, so the
//! rules are shared:
//! - YAML frontmatter is required
//! - `name` field required (max 100 characters)
//! - `description` field required (max 500 characters)
//! - `version`, when present, must be semver

use crate::frontmatter::{parse_frontmatter, SkillFrontmatter};
use crate::scanner::skill_files;
use crate::Result;
use anyhow::bail;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::warn;

/// Maximum length for a skill name.
pub const MAX_NAME_LENGTH: usize = 100;

/// Maximum length for a skill description.
pub const MAX_DESCRIPTION_LENGTH: usize = 500;

static KEBAB_CASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("valid regex"));

/// Severity level for validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The skill will not load correctly.
    Error,
    /// The skill loads but something looks off.
    Warning,
}

/// A single validation issue found in a skill.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Severity of the issue.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
    /// Line number in the file (1-indexed), if applicable.
    pub line: Option<usize>,
    /// Suggested fix, if available.
    pub suggestion: Option<String>,
}

impl ValidationIssue {
    /// Create an error-level issue.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            line: None,
            suggestion: None,
        }
    }

    /// Create a warning-level issue.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            line: None,
            suggestion: None,
        }
    }

    /// Add a line number to the issue.
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Add a suggested fix to the issue.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Result of validating a single skill.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Path to the skill file.
    pub path: PathBuf,
    /// Skill name (from frontmatter or directory).
    pub name: String,
    /// Issues found during validation.
    pub issues: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Create a new validation result with no issues.
    pub fn new(path: PathBuf, name: String) -> Self {
        Self {
            path,
            name,
            issues: Vec::new(),
        }
    }

    /// Add an issue to the result.
    pub fn add_issue(&mut self, issue: ValidationIssue) {
        self.issues.push(issue);
    }

    /// Returns true if there are any error-level issues.
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Error)
    }

    /// Returns the number of error-level issues.
    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .count()
    }

    /// Returns the number of warning-level issues.
    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
            .count()
    }
}

fn dir_name(path: &Path) -> Option<&str> {
    path.parent()
        .and_then(|p| p.file_name())
        .and_then(|n| n.to_str())
}

/// Validate a single skill file.
pub fn validate_skill(path: &Path, content: &str) -> ValidationResult {
    let fallback = dir_name(path).unwrap_or("unknown").to_string();
    let mut result = ValidationResult::new(path.to_path_buf(), fallback);

    let parsed = match parse_frontmatter(content) {
        Ok(p) => p,
        Err(e) => {
            result.add_issue(ValidationIssue::error(e.to_string()).with_line(1));
            return result;
        }
    };

    let Some(fm) = parsed.frontmatter else {
        result.add_issue(
            ValidationIssue::error("Missing YAML frontmatter with name and description")
                .with_line(1)
                .with_suggestion(
                    "Add frontmatter: ---\\nname: skill-name\\ndescription: Description\\n---",
                ),
        );
        return result;
    };

    if let Some(name) = fm.name.as_deref().filter(|n| !n.trim().is_empty()) {
        result.name = name.trim().to_string();
    }

    check_name(&mut result, &fm, path);
    check_description(&mut result, &fm);
    check_version(&mut result, &fm);

    if parsed.content.trim().is_empty() {
        result.add_issue(ValidationIssue::warning("Skill has no instructions after frontmatter"));
    }

    result
}

fn check_name(result: &mut ValidationResult, fm: &SkillFrontmatter, path: &Path) {
    let name = match fm.name.as_deref().map(str::trim) {
        None => {
            result.add_issue(
                ValidationIssue::error("Missing required 'name' field")
                    .with_suggestion("Add 'name: your-skill-name' to frontmatter"),
            );
            return;
        }
        Some("") => {
            result.add_issue(ValidationIssue::error("'name' field cannot be empty"));
            return;
        }
        Some(name) => name,
    };

    if name.chars().count() > MAX_NAME_LENGTH {
        result.add_issue(ValidationIssue::error(format!(
            "'name' exceeds maximum length ({} > {} chars)",
            name.chars().count(),
            MAX_NAME_LENGTH
        )));
    }
    if !KEBAB_CASE.is_match(name) {
        result.add_issue(
            ValidationIssue::warning(format!("'name' is not kebab-case: {name}"))
                .with_suggestion("Use lowercase letters, digits and hyphens"),
        );
    }
    if let Some(dir) = dir_name(path) {
        if dir != name {
            result.add_issue(ValidationIssue::warning(format!(
                "'name' ({name}) does not match directory name ({dir})"
            )));
        }
    }
}

fn check_description(result: &mut ValidationResult, fm: &SkillFrontmatter) {
    match fm.description.as_deref().map(str::trim) {
        None => result.add_issue(
            ValidationIssue::error("Missing required 'description' field").with_suggestion(
                "Add 'description: Brief description of what the skill does' to frontmatter",
            ),
        ),
        Some("") => result.add_issue(ValidationIssue::error("'description' field cannot be empty")),
        Some(desc) if desc.chars().count() > MAX_DESCRIPTION_LENGTH => {
            result.add_issue(ValidationIssue::error(format!(
                "'description' exceeds maximum length ({} > {} chars)",
                desc.chars().count(),
                MAX_DESCRIPTION_LENGTH
            )))
        }
        Some(_) => {}
    }
}

fn check_version(result: &mut ValidationResult, fm: &SkillFrontmatter) {
    if let Some(Err(e)) = fm.parsed_version() {
        result.add_issue(ValidationIssue::error(format!(
            "'version' is not valid semver ({}): {e}",
            fm.version.as_deref().unwrap_or_default()
        )));
    }
}

/// Validate every `SKILL.md` under `dir`, sorted by path.
///
/// Walks the same files [`load_skills`](crate::load_skills) would load. A
/// missing `dir` is an error; an unreadable file becomes an error issue on
/// its own result.
pub fn validate_source(dir: &Path) -> Result<Vec<ValidationResult>> {
    if !dir.is_dir() {
        bail!("skill source directory not found: {}", dir.display());
    }

    let mut results = Vec::new();
    for path in skill_files(dir) {
        match fs::read(&path) {
            Ok(bytes) => {
                let content = String::from_utf8_lossy(&bytes);
                results.push(validate_skill(&path, &content));
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read skill for validation");
                let name = dir_name(&path).unwrap_or("unknown").to_string();
                let mut result = ValidationResult::new(path, name);
                result.add_issue(ValidationIssue::error(format!("failed to read file: {e}")));
                results.push(result);
            }
        }
    }

    Ok(results)
}

/// Summary of validation results.
#[derive(Debug, Default, Serialize)]
pub struct ValidationSummary {
    /// Skills checked.
    pub total: usize,
    /// Skills without errors.
    pub valid: usize,
    /// Errors across all skills.
    pub error_count: usize,
    /// Warnings across all skills.
    pub warning_count: usize,
}

impl ValidationSummary {
    /// Tally a batch of results.
    pub fn from_results(results: &[ValidationResult]) -> Self {
        let mut summary = ValidationSummary {
            total: results.len(),
            ..Default::default()
        };

        for result in results {
            if !result.has_errors() {
                summary.valid += 1;
            }
            summary.error_count += result.error_count();
            summary.warning_count += result.warning_count();
        }

        summary
    }
}
