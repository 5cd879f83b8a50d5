//! deploy-local - build a release binary and install it into a directory
//!
//! Runs the project's release build from its root, copies the produced
//! artifact into a target directory (replacing any previous copy) and marks
//! it executable.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;
pub mod project_root;

// Re-exports for convenience
pub use application::{DeployOptions, DeployReport, DeployUseCase};
pub use config::Config;
pub use domain::{BinaryName, ContentHash, DeploymentRequest};
pub use error::{DeployError, DeployResult};
pub use project_root::resolve_project_root;
