//! Common test utilities for deploy-local CLI tests.
//!
//! `TestEnv` gives each test an isolated project, target directory and home
//! so the real user config and environment never leak in.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

pub const BINARY: &str = "bible_ref_parse";
pub const ARTIFACT: &[u8] = b"\x7fELF\x02\x01\x01fake release binary\n";

/// Result of running the deploy-local CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated project + target directory + home
pub struct TestEnv {
    pub project_root: TempDir,
    pub target_dir: TempDir,
    pub home_dir: TempDir,
}

impl TestEnv {
    /// Empty project with a manifest but no build output
    pub fn new() -> Self {
        let env = Self {
            project_root: TempDir::new().expect("Failed to create project dir"),
            target_dir: TempDir::new().expect("Failed to create target dir"),
            home_dir: TempDir::new().expect("Failed to create home dir"),
        };
        env.write_project_file("Cargo.toml", "[package]\nname = \"fixture\"\n");
        env
    }

    /// Project whose release artifact already exists
    pub fn with_artifact() -> Self {
        let env = Self::new();
        env.write_artifact(ARTIFACT);
        env
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn artifact_path(&self) -> PathBuf {
        self.project_path("target/release").join(BINARY)
    }

    pub fn deployed_path(&self) -> PathBuf {
        self.target_dir.path().join(BINARY)
    }

    pub fn target_arg(&self) -> String {
        self.target_dir.path().display().to_string()
    }

    pub fn write_artifact(&self, content: &[u8]) {
        let path = self.artifact_path();
        fs::create_dir_all(path.parent().expect("artifact has parent"))
            .expect("Failed to create artifact dir");
        fs::write(&path, content).expect("Failed to write artifact");
    }

    pub fn write_project_file(&self, relative: &str, content: &str) {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Run with `--project-root` pointing at this env's project
    pub fn run(&self, args: &[&str]) -> TestResult {
        let root = self.project_root.path().display().to_string();
        let mut full = vec!["--project-root", root.as_str()];
        full.extend_from_slice(args);
        self.run_raw(&full)
    }

    /// Run with exactly the given arguments
    pub fn run_raw(&self, args: &[&str]) -> TestResult {
        let output = Command::new(env!("CARGO_BIN_EXE_deploy-local"))
            .current_dir(self.home_dir.path())
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("APPDATA", self.home_dir.path())
            .env("DEPLOY_LOCAL_ASCII", "1")
            .env_remove("DEPLOY_LOCAL_BINARY")
            .env_remove("DEPLOY_LOCAL_BUILD_COMMAND")
            .env_remove("DEPLOY_LOCAL_SKIP_BUILD")
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to execute deploy-local");

        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

pub fn dir_entries(dir: &Path) -> Vec<PathBuf> {
    let mut entries: Vec<PathBuf> = fs::read_dir(dir)
        .expect("Failed to read dir")
        .map(|e| e.expect("dir entry").path())
        .collect();
    entries.sort();
    entries
}
