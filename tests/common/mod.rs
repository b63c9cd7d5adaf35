//! Common test utilities for Skillset integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// A sandbox with a source repository and a fake home directory
pub struct TestEnv {
    /// Keeps the temporary directory alive
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Source repository root (`skills/`, `commands/`, `prompts/`)
    pub source: PathBuf,
    /// Home directory receiving `.claude`, `.codex`, ...
    pub home: PathBuf,
    /// Isolated user configuration directory
    pub config: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let source = temp.path().join("repo");
        let home = temp.path().join("home");
        let config = temp.path().join("config");
        for dir in [&source, &home, &config] {
            std::fs::create_dir_all(dir).expect("Failed to create sandbox directory");
        }
        Self {
            temp,
            source,
            home,
            config,
        }
    }

    /// The skillset binary, pointed at this sandbox
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("skillset").expect("Failed to find skillset binary");
        cmd.env("SKILLSET_SOURCE", &self.source);
        cmd.env("SKILLSET_HOME", &self.home);
        cmd.env("XDG_CONFIG_HOME", &self.config);
        cmd.env_remove("SKILLSET_LOG");
        cmd.env_remove("CLICOLOR_FORCE");
        cmd
    }

    /// Write a file relative to the source root
    pub fn write_source(&self, path: &str, content: &str) {
        write(&self.source.join(path), content);
    }

    /// Write a file relative to the home directory
    pub fn write_home(&self, path: &str, content: &str) {
        write(&self.home.join(path), content);
    }

    /// Create a skill bundle with a manifest
    pub fn add_skill(&self, name: &str, description: &str) {
        self.write_source(
            &format!("skills/{name}/SKILL.md"),
            &format!("---\nname: {name}\ndescription: {description}\n---\n\n# {name}\n"),
        );
    }

    /// Create a command file in a command set
    pub fn add_command(&self, set: &str, file: &str, content: &str) {
        self.write_source(&format!("commands/{set}/{file}"), content);
    }

    pub fn home_path(&self, path: &str) -> PathBuf {
        self.home.join(path)
    }

    pub fn read_home(&self, path: &str) -> String {
        std::fs::read_to_string(self.home.join(path)).expect("Failed to read file")
    }

    pub fn home_exists(&self, path: &str) -> bool {
        self.home.join(path).exists()
    }
}

fn write(path: &std::path::Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    std::fs::write(path, content).expect("Failed to write file");
}
