//! Process Build Runner
//!
//! Runs the release build as a blocking child process.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, error, info};

use crate::domain::ports::{BuildCommand, BuildRunner};
use crate::error::{DeployError, DeployResult};

/// Where the build's stdout goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildStdout {
    /// Share our stdout (text mode)
    #[default]
    Inherit,
    /// Send to our stderr so stdout stays machine-readable (JSON mode)
    Stderr,
}

/// Build runner backed by `std::process::Command`
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessBuildRunner {
    stdout: BuildStdout,
}

impl ProcessBuildRunner {
    pub fn new(stdout: BuildStdout) -> Self {
        Self { stdout }
    }
}

impl BuildRunner for ProcessBuildRunner {
    fn run(&self, command: &BuildCommand, working_dir: &Path) -> DeployResult<()> {
        let command_line = command.to_string();
        info!(command = %command_line, working_dir = %working_dir.display(), "running build");

        let mut cmd = Command::new(&command.program);
        cmd.args(&command.args)
            .current_dir(working_dir)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit());

        match self.stdout {
            BuildStdout::Inherit => {
                cmd.stdout(Stdio::inherit());
            }
            BuildStdout::Stderr => {
                cmd.stdout(Stdio::from(std::io::stderr()));
            }
        }

        let status = cmd.status().map_err(|source| DeployError::BuildSpawn {
            command: command_line.clone(),
            source,
        })?;

        if !status.success() {
            error!(command = %command_line, code = ?status.code(), "build failed");
            return Err(DeployError::BuildFailed {
                command: command_line,
                code: status.code(),
            });
        }

        debug!(command = %command_line, "build finished");
        Ok(())
    }
}
