use std::path::{Path, PathBuf};

use crate::error::{DeployError, DeployResult};

/// Resolve the project the artifact is built from.
///
/// An explicit root wins. Otherwise the root is derived from where this tool
/// is installed: the parent of the directory holding the executable, moved
/// up to the nearest `Cargo.toml` (a Cargo-built tool lives under
/// `<root>/target/<profile>/`).
pub fn resolve_project_root(explicit: Option<&Path>) -> DeployResult<PathBuf> {
    if let Some(root) = explicit {
        return Ok(root.to_path_buf());
    }

    let exe = std::env::current_exe().map_err(|e| DeployError::ProjectRootUnresolved {
        reason: format!("cannot locate running executable: {}", e),
    })?;
    let exe = std::fs::canonicalize(&exe).unwrap_or(exe);
    let parent = install_parent(&exe).ok_or_else(|| DeployError::ProjectRootUnresolved {
        reason: format!("executable {} has no parent directory", exe.display()),
    })?;

    Ok(discover_project_root(&parent))
}

/// Parent of the directory containing `exe`.
pub(crate) fn install_parent(exe: &Path) -> Option<PathBuf> {
    exe.parent()
        .and_then(Path::parent)
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
}

/// Walk upward from `start` to the nearest directory holding `Cargo.toml`.
///
/// Falls back to `start` when no manifest is found.
pub(crate) fn discover_project_root(start: &Path) -> PathBuf {
    start
        .ancestors()
        .find(|dir| dir.join("Cargo.toml").is_file())
        .unwrap_or(start)
        .to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn install_parent_is_grandparent_of_exe() {
        assert_eq!(
            install_parent(Path::new("/repo/scripts/deploy-local")),
            Some(PathBuf::from("/repo"))
        );
    }

    #[test]
    fn install_parent_of_bare_name_is_none() {
        assert_eq!(install_parent(Path::new("deploy-local")), None);
    }

    #[test]
    fn discover_project_root_climbs_out_of_target_dir() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        std::fs::write(root.join("Cargo.toml"), "[package]\n").unwrap();
        let target = root.join("target");
        std::fs::create_dir_all(target.join("release")).unwrap();

        assert_eq!(discover_project_root(&target), root.to_path_buf());
    }

    #[test]
    fn discover_project_root_prefers_nearest_manifest() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        std::fs::write(root.join("Cargo.toml"), "[workspace]\n").unwrap();
        let member = root.join("crates/tool");
        std::fs::create_dir_all(&member).unwrap();
        std::fs::write(member.join("Cargo.toml"), "[package]\n").unwrap();

        assert_eq!(discover_project_root(&member), member);
    }

    #[test]
    fn discover_project_root_falls_back_to_start() {
        let dir = tempdir().unwrap();
        let start = dir.path().join("bin-parent");
        std::fs::create_dir_all(&start).unwrap();

        // No manifest anywhere under the temp dir; ancestors above it are
        // outside our control, so only assert when none of them has one.
        if !start.ancestors().any(|d| d.join("Cargo.toml").is_file()) {
            assert_eq!(discover_project_root(&start), start);
        }
    }

    #[test]
    fn explicit_root_wins() {
        let root = resolve_project_root(Some(Path::new("/work/repo"))).unwrap();
        assert_eq!(root, PathBuf::from("/work/repo"));
    }
}
