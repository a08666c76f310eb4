use super::print_json;
use crate::cli::OutputFormat;
use anyhow::Result;
use skillport_agents::{AgentRegistry, Detection};

/// Handle the `detect` command.
pub(crate) fn handle_detect_command(format: OutputFormat) -> Result<()> {
    let registry = AgentRegistry::new()?;
    let detections = registry.detect_all();
    match format {
        OutputFormat::Json => print_json(&detections),
        OutputFormat::Text => {
            print!("{}", render_detections(&detections));
            Ok(())
        }
    }
}

fn render_detections(detections: &[Detection]) -> String {
    let mut out = String::new();
    for d in detections {
        let state = if d.detected { "detected" } else { "not found" };
        let note = if d.supported { "" } else { " (unsupported)" };
        out.push_str(&format!(
            "{:<16} {:<10} {}{}\n",
            d.display_name,
            state,
            d.skill_path.display(),
            note
        ));
    }
    let found = detections.iter().filter(|d| d.detected).count();
    out.push_str(&format!("{} of {} agents detected\n", found, detections.len()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn renders_one_line_per_agent() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir_all(tmp.path().join(".cursor/skills")).unwrap();
        let detections = AgentRegistry::with_home(tmp.path()).detect_all();

        let text = render_detections(&detections);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("Claude Code"));
        assert!(lines[0].contains("not found"));
        assert!(lines[2].contains("detected"));
        assert!(lines[2].ends_with("(unsupported)"));
        assert_eq!(lines[4], "1 of 4 agents detected");
    }
}
