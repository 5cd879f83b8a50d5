//! Deploy Use Case
//!
//! Runs the deploy pipeline strictly in order:
//! 1. Validate the target directory
//! 2. Run the release build in the project root
//! 3. Check the artifact exists
//! 4. Copy it into the target directory (replacing any previous copy)
//! 5. Verify the copy and mark it executable
//!
//! A failing step stops the pipeline; nothing is rolled back.

use chrono::Utc;
use tracing::{debug, info};

use crate::domain::ports::{ArtifactInstaller, BuildRunner, DeployEvent, DeployEventSink};
use crate::domain::DeploymentRequest;
use crate::error::{DeployError, DeployResult};

use super::options::DeployOptions;
use super::result::{BuildStatus, DeployReport};

/// Deploy use case, parameterized by its ports
pub struct DeployUseCase<B, I>
where
    B: BuildRunner,
    I: ArtifactInstaller,
{
    builder: B,
    installer: I,
}

impl<B, I> DeployUseCase<B, I>
where
    B: BuildRunner,
    I: ArtifactInstaller,
{
    pub fn new(builder: B, installer: I) -> Self {
        Self { builder, installer }
    }

    pub fn execute(
        &self,
        request: &DeploymentRequest,
        options: &DeployOptions,
        events: &dyn DeployEventSink,
    ) -> DeployResult<DeployReport> {
        let source = request.source_path();
        let destination = request.destination_path();

        if !self.installer.is_dir(&request.target_directory) {
            return Err(DeployError::TargetNotDirectory {
                path: request.target_directory.clone(),
            });
        }

        info!(
            project_root = %request.project_root.display(),
            source = %source.display(),
            destination = %destination.display(),
            dry_run = options.dry_run,
            "starting deploy"
        );
        events.on_event(DeployEvent::Started {
            project_root: request.project_root.clone(),
            source: source.clone(),
            destination: destination.clone(),
            dry_run: options.dry_run,
        });

        let build = self.build(request, options, events)?;

        // Checked before the destination is touched.
        if !self.installer.is_file(&source) {
            return Err(DeployError::ArtifactNotFound { path: source });
        }

        if options.dry_run {
            let replaced = self.installer.is_file(&destination);
            return Ok(DeployReport {
                source,
                destination,
                build,
                bytes: 0,
                replaced,
                hash: None,
                mode: None,
                dry_run: true,
                finished_at: Utc::now(),
            });
        }

        let outcome = self.installer.copy(&source, &destination)?;
        events.on_event(DeployEvent::Copied {
            destination: destination.clone(),
            bytes: outcome.bytes,
            replaced: outcome.replaced,
        });

        let hash = if options.verify {
            let expected = self.installer.hash(&source)?;
            let actual = self.installer.hash(&destination)?;
            if expected != actual {
                return Err(DeployError::ArtifactMismatch {
                    expected: expected.to_string(),
                    actual: actual.to_string(),
                });
            }
            debug!(hash = %actual, "verified deployed artifact");
            Some(actual)
        } else {
            None
        };

        let mode = self.installer.make_executable(&destination, options.mode)?;
        events.on_event(DeployEvent::PermissionsSet {
            destination: destination.clone(),
            mode,
        });

        info!(destination = %destination.display(), bytes = outcome.bytes, "deploy complete");
        Ok(DeployReport {
            source,
            destination,
            build,
            bytes: outcome.bytes,
            replaced: outcome.replaced,
            hash,
            mode: Some(mode),
            dry_run: false,
            finished_at: Utc::now(),
        })
    }

    fn build(
        &self,
        request: &DeploymentRequest,
        options: &DeployOptions,
        events: &dyn DeployEventSink,
    ) -> DeployResult<BuildStatus> {
        if options.dry_run {
            events.on_event(DeployEvent::BuildSkipped {
                reason: "dry run".to_string(),
            });
            return Ok(BuildStatus::DryRun);
        }
        if options.skip_build {
            events.on_event(DeployEvent::BuildSkipped {
                reason: "build skipped on request".to_string(),
            });
            return Ok(BuildStatus::Skipped);
        }

        let command = options.build_command.to_string();
        events.on_event(DeployEvent::BuildStarted {
            command: command.clone(),
        });
        self.builder
            .run(&options.build_command, &request.project_root)?;
        events.on_event(DeployEvent::BuildFinished { command });
        Ok(BuildStatus::Completed)
    }
}
