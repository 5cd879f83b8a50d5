//! Deploy Module
//!
//! Orchestrates a local deploy: build, copy, mark executable.
//!
//! - `options` - `DeployOptions`
//! - `result` - `DeployReport`
//! - `use_case` - `DeployUseCase`
//!
//! ```ignore
//! use deploy_local::application::{DeployOptions, DeployUseCase};
//!
//! let use_case = DeployUseCase::new(ProcessBuildRunner::default(), LocalInstaller::new());
//! let report = use_case.execute(&request, &DeployOptions::default(), &NoopEventSink)?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::{DeployOptions, DEFAULT_MODE};
pub use result::{BuildStatus, DeployReport};
pub use use_case::DeployUseCase;
