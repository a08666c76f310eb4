use super::print_json;
use crate::cli::OutputFormat;
use anyhow::{bail, Result};
use skillport_discovery::{validate_source, Severity, ValidationResult, ValidationSummary};
use std::path::PathBuf;

/// Handle the `validate` command.
pub(crate) fn handle_validate_command(
    source: Option<PathBuf>,
    format: OutputFormat,
    errors_only: bool,
) -> Result<()> {
    let dir = skillport_state::resolve_source_dir(source);
    let mut results = validate_source(&dir)?;
    let summary = ValidationSummary::from_results(&results);
    if errors_only {
        results.retain(ValidationResult::has_errors);
    }

    match format {
        OutputFormat::Json => print_json(&results)?,
        OutputFormat::Text => print!("{}", render_results(&results, &summary)),
    }

    if summary.error_count > 0 {
        bail!(
            "{} of {} skills failed validation",
            summary.total - summary.valid,
            summary.total
        );
    }
    Ok(())
}

fn render_results(results: &[ValidationResult], summary: &ValidationSummary) -> String {
    let mut out = format!(
        "Validated {} skills: {} valid, {} errors, {} warnings\n",
        summary.total, summary.valid, summary.error_count, summary.warning_count
    );
    for result in results {
        if result.issues.is_empty() {
            continue;
        }
        out.push_str(&format!("\n{} ({})\n", result.name, result.path.display()));
        for issue in &result.issues {
            let tag = match issue.severity {
                Severity::Error => "error",
                Severity::Warning => "warning",
            };
            match issue.line {
                Some(line) => out.push_str(&format!("  {tag}: {} (line {line})\n", issue.message)),
                None => out.push_str(&format!("  {tag}: {}\n", issue.message)),
            }
            if let Some(suggestion) = &issue.suggestion {
                out.push_str(&format!("    suggestion: {suggestion}\n"));
            }
        }
    }
    out
}
