//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod artifact_installer;
pub mod build_runner;
pub mod deploy_events;

pub use artifact_installer::{ArtifactInstaller, CopyOutcome};
pub use build_runner::{BuildCommand, BuildRunner};
pub use deploy_events::{DeployEvent, DeployEventSink, NoopEventSink};
