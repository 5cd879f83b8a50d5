//! Infrastructure Layer
//!
//! Concrete implementations of the domain ports.
//!
//! - `build` - `ProcessBuildRunner` spawning the build command
//! - `fs` - `LocalInstaller` performing the atomic copy and chmod
//! - `events` - `JsonEventSink` writing NDJSON

pub mod build;
pub mod events;
pub mod fs;

pub use build::{BuildStdout, ProcessBuildRunner};
pub use events::JsonEventSink;
pub use fs::LocalInstaller;
