//! Configuration loading

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{DeployError, DeployResult};

use super::types::Config;

/// Project config file name, looked up in the project root
pub const PROJECT_CONFIG_FILE: &str = "deploy-local.toml";

pub const ENV_BINARY: &str = "DEPLOY_LOCAL_BINARY";
pub const ENV_BUILD_COMMAND: &str = "DEPLOY_LOCAL_BUILD_COMMAND";
pub const ENV_SKIP_BUILD: &str = "DEPLOY_LOCAL_SKIP_BUILD";

/// Non-fatal configuration warning surfaced to CLI users
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys)
pub fn load_with_warnings(path: &Path) -> DeployResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| DeployError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, then user config, then defaults; apply
/// environment overrides last
pub fn resolve(
    project_root: &Path,
    user_config: Option<&Path>,
) -> DeployResult<(Config, Vec<ConfigWarning>)> {
    resolve_with_vars(project_root, user_config, |key| std::env::var(key).ok())
}

/// `resolve` with an explicit variable source
pub(crate) fn resolve_with_vars(
    project_root: &Path,
    user_config: Option<&Path>,
    var: impl Fn(&str) -> Option<String>,
) -> DeployResult<(Config, Vec<ConfigWarning>)> {
    let project_config = project_root.join(PROJECT_CONFIG_FILE);
    let candidates = std::iter::once(project_config.as_path()).chain(user_config);

    for candidate in candidates {
        if candidate.is_file() {
            debug!(path = %candidate.display(), "loading config");
            let (config, warnings) = load_with_warnings(candidate)?;
            return Ok((apply_overrides(config, var), warnings));
        }
    }

    Ok((apply_overrides(Config::default(), var), Vec::new()))
}

/// `<config_dir>/deploy-local/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("deploy-local").join("config.toml"))
}

/// Apply environment variable overrides (DEPLOY_LOCAL_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

fn apply_overrides(mut config: Config, var: impl Fn(&str) -> Option<String>) -> Config {
    if let Some(binary) = var(ENV_BINARY).filter(|v| !v.trim().is_empty()) {
        config.binary = binary.trim().to_string();
    }

    if let Some(command) = var(ENV_BUILD_COMMAND) {
        let parts: Vec<String> = command.split_whitespace().map(str::to_string).collect();
        if parts.is_empty() {
            warn!("{} is set but empty; keeping configured build command", ENV_BUILD_COMMAND);
        } else {
            config.build.command = parts;
        }
    }

    if let Some(value) = var(ENV_SKIP_BUILD) {
        match parse_bool(&value) {
            Some(skip) => config.build.skip = skip,
            None => warn!(
                "invalid {} value '{}'; valid values: 1, 0, true, false, yes, no",
                ENV_SKIP_BUILD, value
            ),
        }
    }

    config
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "binary",
        "artifact_dir",
        "build",
        "command",
        "skip",
        "install",
        "mode",
        "verify",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
