//! BuildRunner port - runs the external release build

use std::fmt;
use std::path::Path;

use crate::error::{DeployError, DeployResult};

/// An external build invocation: program plus arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl BuildCommand {
    /// Build from `[program, args...]`
    pub fn from_parts<I, S>(parts: I) -> DeployResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut parts = parts.into_iter().map(Into::into);
        let program = parts
            .next()
            .filter(|p| !p.trim().is_empty())
            .ok_or(DeployError::EmptyBuildCommand)?;
        Ok(Self {
            program,
            args: parts.collect(),
        })
    }

    /// Split a whitespace-separated command line (no quoting support)
    pub fn parse(line: &str) -> DeployResult<Self> {
        Self::from_parts(line.split_whitespace())
    }

    /// `cargo build --release`
    pub fn cargo_release() -> Self {
        Self {
            program: "cargo".to_string(),
            args: vec!["build".to_string(), "--release".to_string()],
        }
    }
}

impl Default for BuildCommand {
    fn default() -> Self {
        Self::cargo_release()
    }
}

impl fmt::Display for BuildCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Runs a build command to completion
///
/// Implementations must run the command with `working_dir` as the child's
/// working directory and must not change the calling process's own.
/// A non-zero exit is an error (`DeployError::BuildFailed`).
pub trait BuildRunner {
    fn run(&self, command: &BuildCommand, working_dir: &Path) -> DeployResult<()>;
}
