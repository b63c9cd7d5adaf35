//! List command tests

mod common;

use predicates::prelude::*;

#[test]
fn test_list_shows_skills_with_descriptions() {
    let env = common::TestEnv::new();
    env.add_skill("beta", "Second skill");
    env.add_skill("alpha", "First skill");

    let output = env.cmd().arg("list").assert().success();
    let stdout = String::from_utf8_lossy(&output.get_output().stdout).to_string();

    assert!(stdout.contains("Available skills (2):"));
    assert!(stdout.contains("First skill"));
    assert!(stdout.contains("Second skill"));
    assert!(stdout.contains("0 of 2 installed"));
    let alpha = stdout.find("alpha").unwrap();
    let beta = stdout.find("beta").unwrap();
    assert!(alpha < beta, "entries should be sorted: {stdout}");
}

#[test]
fn test_list_reflects_installed_status() {
    let env = common::TestEnv::new();
    env.add_skill("alpha", "First skill");
    env.add_skill("beta", "Second skill");
    std::fs::create_dir_all(env.home_path(".claude/skills/alpha")).unwrap();

    env.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ alpha"))
        .stdout(predicate::str::contains("○ beta"))
        .stdout(predicate::str::contains("1 of 2 installed"));
}

#[test]
fn test_list_status_is_per_platform() {
    let env = common::TestEnv::new();
    env.add_skill("alpha", "First skill");
    std::fs::create_dir_all(env.home_path(".claude/skills/alpha")).unwrap();

    env.cmd()
        .args(["list", "-p", "gemini"])
        .assert()
        .success()
        .stdout(predicate::str::contains("○ alpha"));
}

#[test]
fn test_list_empty_catalog() {
    let env = common::TestEnv::new();
    env.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("📭 No skills found"));
}

#[test]
fn test_list_skips_hidden_and_plain_files() {
    let env = common::TestEnv::new();
    env.add_skill("alpha", "First skill");
    env.write_source("skills/.cache/SKILL.md", "description: hidden");
    env.write_source("skills/README.md", "not a skill");

    env.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Available skills (1):"))
        .stdout(predicate::str::contains(".cache").not());
}

#[test]
fn test_list_commands_uses_platform_command_set() {
    let env = common::TestEnv::new();
    env.add_command("claude", "review.md", "# review");
    env.add_command("gemini", "summarize.toml", "prompt = \"x\"");

    env.cmd()
        .args(["list", "--commands"])
        .assert()
        .success()
        .stdout(predicate::str::contains("review"))
        .stdout(predicate::str::contains("summarize").not());

    env.cmd()
        .args(["list", "--commands", "-p", "codex"])
        .assert()
        .success()
        .stdout(predicate::str::contains("review"));

    env.cmd()
        .args(["list", "--commands", "-p", "gemini"])
        .assert()
        .success()
        .stdout(predicate::str::contains("summarize"))
        .stdout(predicate::str::contains("review").not());
}

#[test]
fn test_list_commands_empty_set() {
    let env = common::TestEnv::new();
    env.add_command("claude", "review.md", "# review");

    env.cmd()
        .args(["list", "-c", "-p", "gemini"])
        .assert()
        .success()
        .stdout(predicate::str::contains("📭 No commands found"));
}
