//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::application::deploy::DeployOptions;
use crate::domain::ports::BuildCommand;
use crate::domain::{BinaryName, DEFAULT_ARTIFACT_DIR, DEFAULT_BINARY_NAME};
use crate::error::DeployResult;

use super::loader::{self, ConfigWarning};

/// Build step configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Program and arguments
    #[serde(default = "default_build_command")]
    pub command: Vec<String>,

    #[serde(default)]
    pub skip: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            command: default_build_command(),
            skip: false,
        }
    }
}

fn default_build_command() -> Vec<String> {
    let command = BuildCommand::cargo_release();
    std::iter::once(command.program).chain(command.args).collect()
}

/// Install step configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallConfig {
    /// Permission mode (executable bits are always added)
    #[serde(default = "default_mode")]
    pub mode: u32,

    #[serde(default = "default_true")]
    pub verify: bool,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            verify: true,
        }
    }
}

fn default_mode() -> u32 {
    crate::application::deploy::DEFAULT_MODE
}

fn default_true() -> bool {
    true
}

fn default_binary() -> String {
    DEFAULT_BINARY_NAME.to_string()
}

fn default_artifact_dir() -> PathBuf {
    PathBuf::from(DEFAULT_ARTIFACT_DIR)
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Artifact file name
    #[serde(default = "default_binary")]
    pub binary: String,

    /// Build output directory relative to the project root
    #[serde(default = "default_artifact_dir")]
    pub artifact_dir: PathBuf,

    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub install: InstallConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            binary: default_binary(),
            artifact_dir: default_artifact_dir(),
            build: BuildConfig::default(),
            install: InstallConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> DeployResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys)
    pub fn load_with_warnings(path: &Path) -> DeployResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults, then apply
    /// environment overrides
    pub fn resolve(project_root: &Path) -> DeployResult<(Self, Vec<ConfigWarning>)> {
        loader::resolve(project_root, loader::user_config_path().as_deref())
    }

    pub fn binary_name(&self) -> DeployResult<BinaryName> {
        BinaryName::new(self.binary.clone())
    }

    pub fn build_command(&self) -> DeployResult<BuildCommand> {
        BuildCommand::from_parts(self.build.command.iter().cloned())
    }

    /// Deploy options described by this configuration
    pub fn deploy_options(&self) -> DeployResult<DeployOptions> {
        Ok(DeployOptions::default()
            .with_build_command(self.build_command()?)
            .with_skip_build(self.build.skip)
            .with_mode(self.install.mode)
            .with_verify(self.install.verify))
    }
}
