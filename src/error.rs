//! Error types for deploy-local
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for deploy operations
pub type DeployResult<T> = Result<T, DeployError>;

/// Main error type for deploy operations
#[derive(Error, Debug)]
pub enum DeployError {
    /// No target directory given on the command line
    #[error("no target directory for binary given as command line argument #1")]
    MissingTargetDirectory,

    /// Target directory does not exist or is not a directory
    #[error("target directory not found: {path}")]
    TargetNotDirectory { path: PathBuf },

    /// Binary name is not a single path component
    #[error("invalid binary name '{name}' - must be a plain file name")]
    InvalidBinaryName { name: String },

    /// Could not locate the project root
    #[error("could not resolve project root: {reason}")]
    ProjectRootUnresolved { reason: String },

    /// Build command is empty
    #[error("build command is empty")]
    EmptyBuildCommand,

    /// Build command could not be started
    #[error("failed to run build command '{command}'")]
    BuildSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Build command exited unsuccessfully
    #[error("build command '{command}' failed with {}", exit_label(.code))]
    BuildFailed { command: String, code: Option<i32> },

    /// Artifact missing after build
    #[error("artifact not found: {path} - did the release build succeed?")]
    ArtifactNotFound { path: PathBuf },

    /// Destination not writable
    #[error("permission denied writing {path}")]
    PermissionDenied { path: PathBuf },

    /// Copy failed for another reason
    #[error("failed to copy {from} to {to}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Deployed bytes do not match the artifact
    #[error("deployed file hash {actual} does not match artifact hash {expected}")]
    ArtifactMismatch { expected: String, actual: String },

    /// Setting executable bits failed
    #[error("failed to set permissions on {path}")]
    PermissionChange {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "no exit code (terminated by signal)".to_string(),
    }
}
