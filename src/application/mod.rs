//! Application Layer
//!
//! Use cases orchestrating the domain ports.

pub mod deploy;

pub use deploy::{BuildStatus, DeployOptions, DeployReport, DeployUseCase};
