//! Domain Layer
//!
//! Pure deploy model without I/O dependencies.
//!
//! - `request` - `DeploymentRequest` and `BinaryName`
//! - `hash` - `ContentHash` value object
//! - `ports` - traits implemented by the infrastructure layer

pub mod hash;
pub mod ports;
pub mod request;

pub use hash::ContentHash;
pub use request::{BinaryName, DeploymentRequest, DEFAULT_ARTIFACT_DIR, DEFAULT_BINARY_NAME};
