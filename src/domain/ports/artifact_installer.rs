//! ArtifactInstaller port - filesystem side of a deploy
//!
//! Abstracts the copy and permission steps so the use case can be tested
//! without touching disk.

use std::path::Path;

use crate::domain::hash::ContentHash;
use crate::error::DeployResult;

/// What a copy did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyOutcome {
    /// Bytes written to the destination
    pub bytes: u64,
    /// An existing destination file was overwritten
    pub replaced: bool,
}

pub trait ArtifactInstaller {
    /// Check that a regular file exists at `path`
    fn is_file(&self, path: &Path) -> bool;

    /// Check that a directory exists at `path`
    fn is_dir(&self, path: &Path) -> bool;

    /// Copy `from` to `to`, replacing `to` if present
    ///
    /// An existing `to` must be left unchanged if the copy fails.
    fn copy(&self, from: &Path, to: &Path) -> DeployResult<CopyOutcome>;

    /// Hash file content
    fn hash(&self, path: &Path) -> DeployResult<ContentHash>;

    /// Apply `mode` plus the executable bits, returning the resulting mode
    fn make_executable(&self, path: &Path, mode: u32) -> DeployResult<u32>;
}
