//! Init command integration tests against the bundled assets

mod common;

use predicates::prelude::*;

const CURSOR_SKILL: &str = ".cursor/skills/taiwan-invoice/SKILL.md";

fn front_matter(document: &str) -> &str {
    let rest = document
        .strip_prefix("---\n")
        .expect("document starts with front matter");
    let end = rest.find("\n---\n").expect("front matter is closed");
    &rest[..end]
}

#[test]
fn test_init_cursor_project() {
    let workspace = common::TestWorkspace::new();

    workspace
        .cmd()
        .args(["init", "--ai", "cursor"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Installed to: .cursor"));

    let document = workspace.read_file(CURSOR_SKILL);
    assert!(document.starts_with("---\nname: taiwan-invoice\n"));
    assert!(document.contains("# Taiwan Invoice"));
    assert!(document.contains("Taiwan e-invoice integration for ECPay, SmilePay and Amego"));
    assert!(!document.contains("{{TITLE}}"));

    let source = common::bundled_assets().join("taiwan-invoice/skill");
    let installed = workspace.path.join(".cursor/skills/taiwan-invoice");
    assert_eq!(
        common::list_files(&installed.join("references")),
        common::list_files(&source.join("references"))
    );
    assert!(installed.join("EXAMPLES.md").is_file());
    assert!(installed.join("scripts/search.py").is_file());
    assert!(installed.join("data/providers.csv").is_file());
}

#[test]
fn test_init_front_matter_is_valid_yaml() {
    let workspace = common::TestWorkspace::new();
    workspace.cmd().args(["init", "--ai", "cursor"]).assert().success();

    let document = workspace.read_file(CURSOR_SKILL);
    let yaml: serde_yaml::Value = serde_yaml::from_str(front_matter(&document)).unwrap();
    assert_eq!(yaml["name"].as_str(), Some("taiwan-invoice"));
    assert_eq!(
        yaml["description"].as_str(),
        Some("Taiwan e-invoice integration: ECPay, SmilePay, Amego")
    );
    assert!(
        document
            .contains("description: \"Taiwan e-invoice integration: ECPay, SmilePay, Amego\"")
    );
}

#[test]
fn test_init_existing_install_requires_force() {
    let workspace = common::TestWorkspace::new();
    workspace.cmd().args(["init", "--ai", "cursor"]).assert().success();
    workspace.write_file(CURSOR_SKILL, "my edits");

    workspace
        .cmd()
        .args(["init", "--ai", "cursor"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("already installed"))
        .stderr(predicate::str::contains("--force"));

    assert_eq!(workspace.read_file(CURSOR_SKILL), "my edits");
}

#[test]
fn test_init_force_replaces_install() {
    let workspace = common::TestWorkspace::new();
    workspace.cmd().args(["init", "--ai", "cursor"]).assert().success();
    workspace.write_file(CURSOR_SKILL, "my edits");
    workspace.write_file(".cursor/skills/taiwan-invoice/stale.md", "old");

    workspace
        .cmd()
        .args(["init", "--ai", "cursor", "--force"])
        .assert()
        .success();

    assert!(workspace.read_file(CURSOR_SKILL).contains("# Taiwan Invoice"));
    assert!(!workspace.file_exists(".cursor/skills/taiwan-invoice/stale.md"));
}

#[test]
fn test_init_unknown_assistant() {
    let workspace = common::TestWorkspace::new();
    workspace
        .cmd()
        .args(["init", "--ai", "not-a-real-id"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unknown AI assistant: not-a-real-id"));
}

#[test]
fn test_init_global_claude() {
    let workspace = common::TestWorkspace::new();

    workspace
        .cmd()
        .args(["init", "--ai", "claude", "--global"])
        .assert()
        .success()
        .stdout(predicate::str::contains("global scope"));

    let installed = workspace.home.join(".claude/skills/taiwan-invoice/SKILL.md");
    assert!(installed.is_file());
    assert!(!workspace.file_exists(".claude"));
}

#[test]
fn test_init_global_antigravity_is_flattened() {
    let workspace = common::TestWorkspace::new();

    workspace
        .cmd()
        .args(["init", "--ai", "antigravity", "--global"])
        .assert()
        .success();

    let root = workspace.home.join(".gemini/antigravity/global_skills");
    assert!(root.join("taiwan-invoice/SKILL.md").is_file());
    assert!(!root.join("skills").exists());
}

#[test]
fn test_init_global_unsupported_falls_back() {
    let workspace = common::TestWorkspace::new();

    workspace
        .cmd()
        .args(["init", "--ai", "windsurf", "--global"])
        .assert()
        .success()
        .stdout(predicate::str::contains("does not support global installation"));

    assert!(workspace.file_exists(".windsurf/skills/taiwan-invoice/SKILL.md"));
    assert!(!workspace.home.join(".windsurf").exists());
}

#[test]
fn test_init_detects_assistant_without_terminal() {
    let workspace = common::TestWorkspace::new();
    workspace.create_agent_dir(".roo");

    workspace
        .cmd()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Detected: Roo Code"));

    assert!(workspace.file_exists(".roo/commands/taiwan-invoice/SKILL.md"));
}

#[test]
fn test_init_without_assistant_fails() {
    let workspace = common::TestWorkspace::new();

    workspace
        .cmd()
        .args(["init", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No AI assistant selected"));
}

#[test]
fn test_init_platform_specific_layouts() {
    let workspace = common::TestWorkspace::new();

    for id in ["copilot", "kiro", "qoder"] {
        workspace.cmd().args(["init", "--ai", id]).assert().success();
    }

    let copilot = workspace.read_file(".github/prompts/taiwan-invoice/taiwan-invoice.prompt.md");
    assert!(copilot.starts_with("---\nmode: agent\n"));
    assert!(copilot.contains("## Quick Reference"));
    assert!(workspace.file_exists(".github/prompts/taiwan-invoice/references"));
    assert!(!workspace.file_exists(".github/prompts/taiwan-invoice/scripts"));

    let kiro = workspace.read_file(".kiro/steering/taiwan-invoice/taiwan-invoice.md");
    assert!(kiro.starts_with("---\ninclusion: manual\n---\n\n# Taiwan Invoice"));

    let qoder = workspace.read_file(".qoder/rules/taiwan-invoice/SKILL.md");
    assert!(qoder.starts_with("# Taiwan Invoice"));
}

#[test]
fn test_init_payment_skill() {
    let workspace = common::TestWorkspace::new();

    workspace
        .cmd()
        .args(["--skill", "payment", "init", "--ai", "claude"])
        .assert()
        .success();

    let document = workspace.read_file(".claude/skills/taiwan-payment/SKILL.md");
    assert!(document.contains("# Taiwan Payment"));
    assert!(document.contains("## Quick Reference"));
    assert!(workspace.file_exists(".claude/skills/taiwan-payment/scripts/core.py"));
}

#[test]
fn test_init_all_assistants() {
    let workspace = common::TestWorkspace::new();

    workspace
        .cmd()
        .args(["init", "--ai", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("installed for 14 of 14 assistants"));

    for path in [
        ".claude/skills/taiwan-invoice/SKILL.md",
        ".agent/skills/taiwan-invoice/SKILL.md",
        ".github/prompts/taiwan-invoice/taiwan-invoice.prompt.md",
        ".roo/commands/taiwan-invoice/SKILL.md",
        ".codebuddy/skills/taiwan-invoice/SKILL.md",
    ] {
        assert!(workspace.file_exists(path), "{path} should exist");
    }
}

#[test]
fn test_init_all_skips_broken_config() {
    let workspace = common::TestWorkspace::new();
    let assets = workspace.copy_assets();
    std::fs::write(
        assets.join("taiwan-invoice/templates/platforms/gemini.json"),
        "{ not json",
    )
    .unwrap();

    workspace
        .cmd()
        .env("TAIWAN_SKILL_ASSETS", &assets)
        .args(["init", "--ai", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("installed for 13 of 14 assistants"));

    assert!(!workspace.file_exists(".gemini"));
    assert!(workspace.file_exists(".cursor/skills/taiwan-invoice/SKILL.md"));
}

#[test]
fn test_init_all_twice_reports_nothing_installed() {
    let workspace = common::TestWorkspace::new();
    workspace.cmd().args(["init", "--ai", "all"]).assert().success();

    workspace
        .cmd()
        .args(["init", "--ai", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No installations were made"));
}

#[test]
fn test_init_single_broken_config_fails() {
    let workspace = common::TestWorkspace::new();
    let assets = workspace.copy_assets();
    std::fs::write(
        assets.join("taiwan-invoice/templates/platforms/cursor.json"),
        "{ not json",
    )
    .unwrap();

    workspace
        .cmd()
        .env("TAIWAN_SKILL_ASSETS", &assets)
        .args(["init", "--ai", "cursor"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load platform configuration"));
}
