//! Loading and checking the skills that skillport installs.
//!
//! This crate provides mechanisms for:
//! - Scanning a source directory for `SKILL.md` files.
//! - Parsing the YAML frontmatter that names and describes each skill.
//! - Validating frontmatter before a skill is copied into an agent.
//!
//! # Examples
//!
//! ```
//! use skillport_discovery::load_skills;
//! use tempfile::tempdir;
//!
//! let temp = tempdir().unwrap();
//! let skill_dir = temp.path().join("alpha");
//! std::fs::create_dir_all(&skill_dir).unwrap();
//! std::fs::write(
//!     skill_dir.join("SKILL.md"),
//!     "---\nname: alpha\ndescription: First skill\n---\n# Alpha\n",
//! )
//! .unwrap();
//!
//! let set = load_skills(temp.path()).unwrap();
//! assert_eq!(set.skills.len(), 1);
//! assert_eq!(set.skills[0].name, "alpha");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

/// Error type for discovery operations.
pub type Error = anyhow::Error;
/// Result type for discovery operations.
pub type Result<T> = std::result::Result<T, Error>;

/// YAML frontmatter parsing.
pub mod frontmatter;
/// Skill source scanning.
pub mod scanner;
/// Types for loaded skills.
pub mod types;
/// Frontmatter validation.
pub mod validate;

pub use frontmatter::{
    has_frontmatter, parse_frontmatter, split_frontmatter, FrontmatterError, ParsedSkill,
    SkillFrontmatter,
};
pub use scanner::{
    collect_module_files, hash_content, hash_file, is_skill_dir, load_skills, SKILL_FILE,
};
pub use types::{DuplicateInfo, LoadFailure, ModuleFile, SkillPackage, SkillSet};
pub use validate::{
    validate_skill, validate_source, Severity, ValidationIssue, ValidationResult,
    ValidationSummary, MAX_DESCRIPTION_LENGTH, MAX_NAME_LENGTH,
};
