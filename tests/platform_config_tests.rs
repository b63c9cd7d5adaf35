//! Platform configuration tests (platforms.jsonc overrides)

mod common;

use predicates::prelude::*;

#[test]
fn test_repository_file_adds_platform() {
    let env = common::TestEnv::new();
    env.add_skill("alpha", "First skill");
    env.write_source(
        "platforms.jsonc",
        r#"{
  // Extra target living next to the built-ins
  "platforms": [
    { "id": "cursor", "name": "Cursor", "directory": ".cursor", "command_set": "claude" }
  ]
}"#,
    );

    env.cmd()
        .args(["install", "alpha", "-p", "cursor"])
        .assert()
        .success();

    assert!(env.home_exists(".cursor/skills/alpha/SKILL.md"));
}

#[test]
fn test_user_file_overrides_repository_file() {
    let env = common::TestEnv::new();
    env.add_skill("alpha", "First skill");
    env.write_source(
        "platforms.jsonc",
        r#"[{ "id": "claude", "name": "Claude", "directory": ".claude-repo" }]"#,
    );
    std::fs::create_dir_all(env.config.join("skillset")).unwrap();
    std::fs::write(
        env.config.join("skillset/platforms.jsonc"),
        r#"[{ "id": "claude", "name": "Claude", "directory": ".claude-user" }]"#,
    )
    .unwrap();

    env.cmd().args(["install", "alpha"]).assert().success();

    // dirs::config_dir honours XDG_CONFIG_HOME on Linux only
    if cfg!(target_os = "linux") {
        assert!(env.home_exists(".claude-user/skills/alpha"));
    } else {
        assert!(env.home_exists(".claude-repo/skills/alpha"));
    }
}

#[test]
fn test_invalid_platform_file_is_error() {
    let env = common::TestEnv::new();
    env.write_source("platforms.jsonc", "{ not json");

    env.cmd()
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse configuration file"));
}
