//! YAML frontmatter parsing for SKILL.md files.
//!
//! A skill file opens with a `---` delimited YAML block:
//!
//! ```yaml
//! ---
//! name: ticket-triage
//! description: Sort incoming tickets by severity
//! version: 1.2.0
//! ---
//! ```
//!
//! Only `name`, `description` and `version` are interpreted. Any other keys
//! are kept in [`SkillFrontmatter::extra`] so nothing is lost on inspection.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure to read a frontmatter block.
#[derive(Debug, Error)]
pub enum FrontmatterError {
    /// The block between the `---` fences is not valid YAML for a skill.
    #[error("invalid YAML frontmatter: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),
}

/// Parsed frontmatter from a SKILL.md file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillFrontmatter {
    /// Skill name.
    pub name: Option<String>,
    /// One-line description shown to the agent.
    pub description: Option<String>,
    /// Skill version (semver).
    #[serde(default)]
    pub version: Option<String>,
    /// Additional fields that may be present.
    #[serde(flatten)]
    pub extra: std::collections::HashMap<String, serde_yaml::Value>,
}

impl SkillFrontmatter {
    /// Parse the skill's own version as semver.
    pub fn parsed_version(&self) -> Option<Result<semver::Version, semver::Error>> {
        self.version.as_ref().map(|v| semver::Version::parse(v))
    }
}

/// Result of parsing frontmatter.
#[derive(Debug, Clone)]
pub struct ParsedSkill {
    /// Parsed frontmatter, if present.
    pub frontmatter: Option<SkillFrontmatter>,
    /// The markdown content after frontmatter.
    pub content: String,
    /// Raw frontmatter YAML string, if present.
    pub raw_frontmatter: Option<String>,
    /// Line number where content starts (1-indexed).
    pub content_start_line: usize,
}

/// Check if a skill file has frontmatter.
pub fn has_frontmatter(content: &str) -> bool {
    content.trim_start().starts_with("---")
}

/// Split content into frontmatter and body sections.
///
/// Returns (frontmatter_yaml, body_content, content_start_line). An opening
/// fence without a closing one is treated as plain body.
pub fn split_frontmatter(content: &str) -> (Option<String>, String, usize) {
    let trimmed = content.trim_start();

    if !trimmed.starts_with("---") {
        return (None, content.to_string(), 1);
    }

    let leading_lines = content
        .lines()
        .take_while(|line| line.trim().is_empty())
        .count();

    let after_open = trimmed[3..].trim_start_matches(['\r', '\n']);

    let (end_pos, fence_len) = match (after_open.find("\r\n---"), after_open.find("\n---")) {
        // empty block: the closing fence follows the opening one directly
        _ if after_open.starts_with("---") => (0, 3),
        (Some(crlf), Some(lf)) if crlf < lf => (crlf, 5),
        (_, Some(lf)) => (lf, 4),
        (Some(crlf), None) => (crlf, 5),
        (None, None) => return (None, content.to_string(), 1),
    };

    let yaml = &after_open[..end_pos];
    let rest = after_open[end_pos + fence_len..].trim_start_matches(['\r', '\n']);

    // opening and closing fences
    let frontmatter_lines = yaml.lines().count() + 2;
    let content_start = leading_lines + frontmatter_lines + 1;

    (Some(yaml.to_string()), rest.to_string(), content_start)
}

/// Parse YAML frontmatter from a skill file.
pub fn parse_frontmatter(content: &str) -> Result<ParsedSkill, FrontmatterError> {
    let (raw_yaml, body, content_start) = split_frontmatter(content);

    let frontmatter = match raw_yaml {
        Some(ref yaml) if yaml.trim().is_empty() => Some(SkillFrontmatter::default()),
        Some(ref yaml) => Some(serde_yaml::from_str::<SkillFrontmatter>(yaml)?),
        None => None,
    };

    Ok(ParsedSkill {
        frontmatter,
        content: body,
        raw_frontmatter: raw_yaml,
        content_start_line: content_start,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_frontmatter() {
        assert!(has_frontmatter("---\nname: test\n---\n# Content"));
        assert!(has_frontmatter("  ---\nname: test\n---\n# Content"));
        assert!(!has_frontmatter("# No frontmatter"));
        assert!(!has_frontmatter("-- not quite"));
    }

    #[test]
    fn test_split_frontmatter() {
        let content = "---\nname: test\ndescription: A test skill\n---\n# Heading\nBody";
        let (yaml, body, line) = split_frontmatter(content);

        assert!(yaml.unwrap().contains("name: test"));
        assert!(body.starts_with("# Heading"));
        assert_eq!(line, 5);
    }

    #[test]
    fn test_split_crlf_frontmatter() {
        let content = "---\r\nname: test\r\ndescription: crlf\r\n---\r\nBody";
        let (yaml, body, _) = split_frontmatter(content);

        let yaml = yaml.unwrap();
        assert!(yaml.contains("description: crlf"));
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_split_no_frontmatter() {
        let content = "# Just markdown\nNo frontmatter here.";
        let (yaml, body, line) = split_frontmatter(content);

        assert!(yaml.is_none());
        assert_eq!(body, content);
        assert_eq!(line, 1);
    }

    #[test]
    fn test_unclosed_fence_is_body() {
        let content = "---\nname: dangling\n# never closed";
        let (yaml, body, _) = split_frontmatter(content);

        assert!(yaml.is_none());
        assert_eq!(body, content);
    }

    #[test]
    fn test_parse_frontmatter() {
        let content = "---\nname: my-skill\ndescription: Does something useful\n---\n# My Skill";
        let parsed = parse_frontmatter(content).unwrap();

        let fm = parsed.frontmatter.unwrap();
        assert_eq!(fm.name.as_deref(), Some("my-skill"));
        assert_eq!(fm.description.as_deref(), Some("Does something useful"));
        assert!(parsed.content.starts_with("# My Skill"));
    }

    #[test]
    fn test_parse_keeps_extra_fields() {
        let content = "---\nname: a\ndescription: b\nallowed-tools: Read\n---\n";
        let fm = parse_frontmatter(content).unwrap().frontmatter.unwrap();

        assert!(fm.extra.contains_key("allowed-tools"));
    }

    #[test]
    fn test_parse_empty_block() {
        let parsed = parse_frontmatter("---\n\n---\nBody").unwrap();
        let fm = parsed.frontmatter.unwrap();

        assert!(fm.name.is_none());
        assert!(fm.description.is_none());
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let err = parse_frontmatter("---\nname: [unclosed\n---\n").unwrap_err();
        assert!(err.to_string().starts_with("invalid YAML frontmatter"));
    }

    #[test]
    fn test_parsed_version() {
        let fm = SkillFrontmatter {
            version: Some("1.2.3".into()),
            ..Default::default()
        };
        let version = fm.parsed_version().unwrap().unwrap();
        assert_eq!(version, semver::Version::new(1, 2, 3));

        let bad = SkillFrontmatter {
            version: Some("one".into()),
            ..Default::default()
        };
        assert!(bad.parsed_version().unwrap().is_err());
    }
}
