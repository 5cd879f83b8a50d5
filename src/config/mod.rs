//! Configuration module for deploy-local
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority, applied by the caller)
//! 2. Environment variables (DEPLOY_LOCAL_*)
//! 3. Project config (`<project_root>/deploy-local.toml`)
//! 4. User config (`<config_dir>/deploy-local/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    user_config_path, with_env_overrides, ConfigWarning, ENV_BINARY, ENV_BUILD_COMMAND,
    ENV_SKIP_BUILD, PROJECT_CONFIG_FILE,
};
pub use types::{BuildConfig, Config, InstallConfig};
