//! Deploy Options

use crate::domain::ports::BuildCommand;

/// Default permission mode for the installed binary
pub const DEFAULT_MODE: u32 = 0o755;

/// Options for the deploy use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployOptions {
    /// Command producing the artifact
    pub build_command: BuildCommand,
    /// Deploy the existing artifact without building
    pub skip_build: bool,
    /// Resolve and validate only
    pub dry_run: bool,
    /// Permission mode for the installed binary (exec bits are always added)
    pub mode: u32,
    /// Compare source and destination hashes after the copy
    pub verify: bool,
}

impl Default for DeployOptions {
    fn default() -> Self {
        Self {
            build_command: BuildCommand::default(),
            skip_build: false,
            dry_run: false,
            mode: DEFAULT_MODE,
            verify: true,
        }
    }
}

impl DeployOptions {
    pub fn with_build_command(mut self, command: BuildCommand) -> Self {
        self.build_command = command;
        self
    }

    pub fn with_skip_build(mut self, skip: bool) -> Self {
        self.skip_build = skip;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_mode(mut self, mode: u32) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }
}
