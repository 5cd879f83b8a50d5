//! Deployment Request
//!
//! The single transient entity of a deploy run: where the artifact comes
//! from and where it goes.

use std::fmt;
use std::path::{Component, Path, PathBuf};

use crate::error::{DeployError, DeployResult};

/// Artifact deployed when nothing else is configured
pub const DEFAULT_BINARY_NAME: &str = "bible_ref_parse";

/// Build output directory, relative to the project root
pub const DEFAULT_ARTIFACT_DIR: &str = "target/release";

/// Name of the deployed binary
///
/// Always a single normal path component, so joining it onto a directory
/// can never escape that directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BinaryName(String);

impl BinaryName {
    pub fn new(name: impl Into<String>) -> DeployResult<Self> {
        let name = name.into();
        let mut components = Path::new(&name).components();
        let valid = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(first)), None) if first == name.as_str()
        );
        if !valid {
            return Err(DeployError::InvalidBinaryName { name });
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for BinaryName {
    fn default() -> Self {
        Self(DEFAULT_BINARY_NAME.to_string())
    }
}

impl fmt::Display for BinaryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A request to deploy one release artifact into a target directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentRequest {
    /// Directory the binary is installed into (must already exist)
    pub target_directory: PathBuf,
    /// Artifact file name
    pub binary_name: BinaryName,
    /// Root of the project that produces the artifact
    pub project_root: PathBuf,
    /// Build output directory relative to `project_root`
    pub artifact_dir: PathBuf,
}

impl DeploymentRequest {
    pub fn new(target_directory: impl Into<PathBuf>, project_root: impl Into<PathBuf>) -> Self {
        Self {
            target_directory: target_directory.into(),
            binary_name: BinaryName::default(),
            project_root: project_root.into(),
            artifact_dir: PathBuf::from(DEFAULT_ARTIFACT_DIR),
        }
    }

    pub fn with_binary_name(mut self, name: BinaryName) -> Self {
        self.binary_name = name;
        self
    }

    pub fn with_artifact_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.artifact_dir = dir.into();
        self
    }

    /// `<project_root>/<artifact_dir>/<binary_name>`
    pub fn source_path(&self) -> PathBuf {
        self.project_root
            .join(&self.artifact_dir)
            .join(self.binary_name.as_str())
    }

    /// `<target_directory>/<binary_name>`
    pub fn destination_path(&self) -> PathBuf {
        self.target_directory.join(self.binary_name.as_str())
    }
}
