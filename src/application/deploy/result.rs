//! Deploy Result

use std::path::PathBuf;

use chrono::{DateTime, Utc};

use crate::domain::hash::ContentHash;

/// What happened to the build step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStatus {
    Completed,
    Skipped,
    DryRun,
}

impl BuildStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildStatus::Completed => "completed",
            BuildStatus::Skipped => "skipped",
            BuildStatus::DryRun => "dry_run",
        }
    }
}

/// Result of a deploy run
#[derive(Debug, Clone)]
pub struct DeployReport {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub build: BuildStatus,
    /// Bytes copied (0 on dry run)
    pub bytes: u64,
    /// The destination existed before (or would be replaced, on dry run)
    pub replaced: bool,
    /// Hash of the installed file, when verified
    pub hash: Option<ContentHash>,
    /// Final permission mode, unset on dry run
    pub mode: Option<u32>,
    pub dry_run: bool,
    pub finished_at: DateTime<Utc>,
}

impl DeployReport {
    pub fn is_installed(&self) -> bool {
        !self.dry_run && self.mode.is_some()
    }
}
