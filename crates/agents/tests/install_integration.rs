use skillport_agents::{
    agent_status, AgentAdapter, AgentKind, AgentRegistry, ClaudeCodeAgent, InstallOptions,
    SkillState, SkipReason,
};
use skillport_discovery::load_skills;
use skillport_test_utils::TestFixture;
use std::fs;

#[test]
fn installs_source_skills_into_every_detected_agent() {
    let fx = TestFixture::new().unwrap();
    fx.install_agent_dir(".claude/skills").unwrap();
    fx.install_agent_dir(".config/opencode/skills").unwrap();
    let skill_dir = fx
        .create_skill_with_frontmatter("review", "Review pull requests", "# Review\n")
        .unwrap();
    fs::write(skill_dir.join("checklist.md"), "- tests\n").unwrap();
    fx.create_skill_with_frontmatter("deploy", "Ship it", "# Deploy\n")
        .unwrap();

    let set = load_skills(&fx.source).unwrap();
    let registry = AgentRegistry::with_home(fx.home_path());
    let targets = registry.detected();
    assert_eq!(targets, vec![AgentKind::ClaudeCode, AgentKind::Opencode]);

    let summary = registry
        .install_all(&targets, &set.skills, &InstallOptions::default())
        .unwrap();
    assert_eq!(summary.total_written(), 4);

    let installed = fx.home.join(".claude/skills/review");
    assert!(installed.join("SKILL.md").is_file());
    assert_eq!(
        fs::read_to_string(installed.join("checklist.md")).unwrap(),
        "- tests\n"
    );
    assert!(fx
        .home
        .join(".config/opencode/skills/deploy/SKILL.md")
        .is_file());
    assert!(!fx.home.join(".copilot").exists());
}

#[test]
fn reinstall_is_idempotent_and_force_replaces_changes() {
    let fx = TestFixture::new().unwrap();
    fx.install_agent_dir(".claude/skills").unwrap();
    fx.create_skill_with_frontmatter("notes", "Take notes", "v1\n")
        .unwrap();
    let agent = ClaudeCodeAgent::with_home(fx.home_path());

    let first = load_skills(&fx.source).unwrap();
    agent
        .install(&first.skills, &InstallOptions::default())
        .unwrap();
    let again = agent
        .install(&first.skills, &InstallOptions::default())
        .unwrap();
    assert!(again.written.is_empty());
    assert!(matches!(again.skipped[0], SkipReason::Unchanged { .. }));

    fx.create_skill_with_frontmatter("notes", "Take notes", "v2\n")
        .unwrap();
    let second = load_skills(&fx.source).unwrap();
    let status = agent_status(&agent, &second.skills).unwrap();
    assert_eq!(status.skills[0].state, SkillState::Outdated);

    let refused = agent
        .install(&second.skills, &InstallOptions::default())
        .unwrap();
    assert!(matches!(refused.skipped[0], SkipReason::WouldOverwrite { .. }));

    let forced = agent
        .install(
            &second.skills,
            &InstallOptions {
                force: true,
                dry_run: false,
            },
        )
        .unwrap();
    assert_eq!(forced.written, vec!["notes".to_string()]);
    let status = agent_status(&agent, &second.skills).unwrap();
    assert_eq!(status.skills[0].state, SkillState::Current);
}

#[test]
fn uninstall_round_trip_leaves_skill_dir_clean() {
    let fx = TestFixture::new().unwrap();
    fx.install_agent_dir(".copilot/skills").unwrap();
    fx.create_skill("tools/lint", "---\nname: tools/lint\ndescription: Lint\n---\n")
        .unwrap();
    let set = load_skills(&fx.source).unwrap();
    let registry = AgentRegistry::with_home(fx.home_path());

    registry
        .install_all(
            &[AgentKind::GithubCopilot],
            &set.skills,
            &InstallOptions::default(),
        )
        .unwrap();
    let adapter = registry.get(AgentKind::GithubCopilot).unwrap();
    assert_eq!(adapter.installed_skills().unwrap()[0].name, "tools/lint");

    let names: Vec<String> = set.names();
    let summary = registry
        .uninstall_all(&[AgentKind::GithubCopilot], &names, false)
        .unwrap();
    assert_eq!(summary.total_written(), 1);
    assert!(adapter.installed_skills().unwrap().is_empty());
    assert!(!fx.home.join(".copilot/skills/tools").exists());
}

#[cfg(unix)]
#[test]
fn unreadable_agent_dir_is_not_detected() {
    use std::os::unix::fs::PermissionsExt;

    let fx = TestFixture::new().unwrap();
    let agent = ClaudeCodeAgent::with_home(fx.home_path());

    // A file in place of the skill directory is inaccessible to every user.
    fx.install_agent_dir(".claude").unwrap();
    fs::write(&agent.config().skill_path, "").unwrap();
    assert!(!agent.detect());
    fs::remove_file(&agent.config().skill_path).unwrap();

    let dir = fx.install_agent_dir(".claude/skills").unwrap();
    assert!(agent.detect());
    fs::set_permissions(&dir, fs::Permissions::from_mode(0o000)).unwrap();
    let _restore = scopeguard::guard(dir.clone(), |d| {
        let _ = fs::set_permissions(&d, fs::Permissions::from_mode(0o755));
    });

    // Privileged users can still list the directory.
    if fs::read_dir(&dir).is_ok() {
        return;
    }
    assert!(!agent.detect());
}
