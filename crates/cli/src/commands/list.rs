use super::{load_source, print_json};
use crate::cli::OutputFormat;
use anyhow::Result;
use std::path::PathBuf;

/// Handle the `list` command.
pub(crate) fn handle_list_command(source: Option<PathBuf>, format: OutputFormat) -> Result<()> {
    let set = load_source(source)?;
    if format == OutputFormat::Json {
        return print_json(&set);
    }

    if set.skills.is_empty() {
        println!("No skills found in {}", set.root.display());
        return Ok(());
    }
    for skill in &set.skills {
        let version = skill
            .version
            .as_deref()
            .map(|v| format!(" ({v})"))
            .unwrap_or_default();
        println!(
            "{}{}: {}",
            skill.name,
            version,
            skill.description.as_deref().unwrap_or("-")
        );
    }
    if !set.errors.is_empty() {
        eprintln!("{} skill(s) could not be loaded", set.errors.len());
    }
    Ok(())
}
