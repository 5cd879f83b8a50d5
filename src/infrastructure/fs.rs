//! Local Installer
//!
//! Implements the ArtifactInstaller port for local disk. Copies go through a
//! temp file next to the destination followed by a rename, so an existing
//! destination is either fully replaced or left untouched. A symlinked
//! destination is replaced at its target. When the directory is read-only
//! but the destination exists, the file is rewritten in place instead.

use std::fs::{self, File};
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::domain::hash::ContentHash;
use crate::domain::ports::{ArtifactInstaller, CopyOutcome};
use crate::error::{DeployError, DeployResult};

/// Local file system installer
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalInstaller;

impl LocalInstaller {
    pub fn new() -> Self {
        Self
    }
}

fn copy_error(from: &Path, to: &Path, source: io::Error) -> DeployError {
    if source.kind() == io::ErrorKind::PermissionDenied {
        DeployError::PermissionDenied {
            path: to.to_path_buf(),
        }
    } else {
        DeployError::Copy {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            source,
        }
    }
}

/// Follow a symlinked destination so the link's target gets the new bytes
fn resolve_destination(to: &Path) -> PathBuf {
    match fs::symlink_metadata(to) {
        Ok(meta) if meta.file_type().is_symlink() => {
            fs::canonicalize(to).unwrap_or_else(|_| to.to_path_buf())
        }
        _ => to.to_path_buf(),
    }
}

/// Truncate and rewrite an existing file
fn write_in_place(source: &mut File, to: &Path) -> io::Result<u64> {
    let mut file = File::create(to)?;
    let bytes = io::copy(source, &mut file)?;
    file.flush()?;
    file.sync_all()?;
    Ok(bytes)
}

impl ArtifactInstaller for LocalInstaller {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn copy(&self, from: &Path, to: &Path) -> DeployResult<CopyOutcome> {
        let mut source = match File::open(from) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(DeployError::ArtifactNotFound {
                    path: from.to_path_buf(),
                })
            }
            Err(e) => return Err(copy_error(from, to, e)),
        };

        let target = resolve_destination(to);
        let dir = target
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let replaced = target.exists();

        let bytes = match NamedTempFile::new_in(&dir) {
            Ok(mut staged) => {
                let bytes =
                    io::copy(&mut source, &mut staged).map_err(|e| copy_error(from, to, e))?;
                staged
                    .as_file_mut()
                    .flush()
                    .and_then(|_| staged.as_file().sync_all())
                    .map_err(|e| copy_error(from, to, e))?;
                staged
                    .persist(&target)
                    .map_err(|e| copy_error(from, to, e.error))?;
                bytes
            }
            // Directory is read-only but the existing file may still be writable.
            Err(e) if e.kind() == io::ErrorKind::PermissionDenied && replaced => {
                debug!(
                    dir = %dir.display(),
                    "cannot stage in destination directory, writing in place"
                );
                write_in_place(&mut source, &target).map_err(|e| copy_error(from, to, e))?
            }
            Err(e) => return Err(copy_error(from, to, e)),
        };

        debug!(from = %from.display(), to = %to.display(), bytes, replaced, "copied artifact");
        Ok(CopyOutcome { bytes, replaced })
    }

    fn hash(&self, path: &Path) -> DeployResult<ContentHash> {
        let file = File::open(path)?;
        Ok(ContentHash::from_reader(BufReader::new(file))?)
    }

    #[cfg(unix)]
    fn make_executable(&self, path: &Path, mode: u32) -> DeployResult<u32> {
        use std::os::unix::fs::PermissionsExt;

        let mode = (mode | 0o111) & 0o7777;
        fs::set_permissions(path, fs::Permissions::from_mode(mode)).map_err(|source| {
            DeployError::PermissionChange {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let applied = fs::metadata(path)
            .map_err(|source| DeployError::PermissionChange {
                path: path.to_path_buf(),
                source,
            })?
            .permissions()
            .mode()
            & 0o7777;
        debug!(path = %path.display(), mode = %format!("{:o}", applied), "set permissions");
        Ok(applied)
    }

    #[cfg(not(unix))]
    fn make_executable(&self, path: &Path, mode: u32) -> DeployResult<u32> {
        // Executability is not a permission bit here.
        fs::metadata(path).map_err(|source| DeployError::PermissionChange {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn copy_creates_identical_file() {
        let dir = tempdir().unwrap();
        let from = dir.path().join("artifact");
        let to_dir = dir.path().join("bin");
        fs::create_dir(&to_dir).unwrap();
        let to = to_dir.join("artifact");
        fs::write(&from, b"\x7fELF binary bytes").unwrap();

        let outcome = LocalInstaller::new().copy(&from, &to).unwrap();

        assert_eq!(outcome.bytes, 17);
        assert!(!outcome.replaced);
        assert_eq!(fs::read(&to).unwrap(), b"\x7fELF binary bytes");
    }

    #[test]
    fn copy_overwrites_existing() {
        let dir = tempdir().unwrap();
        let from = dir.path().join("artifact");
        let to = dir.path().join("installed");
        fs::write(&from, b"new").unwrap();
        fs::write(&to, b"old contents").unwrap();

        let outcome = LocalInstaller::new().copy(&from, &to).unwrap();

        assert!(outcome.replaced);
        assert_eq!(fs::read(&to).unwrap(), b"new");
    }

    #[test]
    fn copy_missing_source_leaves_destination() {
        let dir = tempdir().unwrap();
        let from = dir.path().join("missing");
        let to = dir.path().join("installed");
        fs::write(&to, b"keep me").unwrap();

        let err = LocalInstaller::new().copy(&from, &to).unwrap_err();

        assert!(matches!(err, DeployError::ArtifactNotFound { .. }));
        assert_eq!(fs::read(&to).unwrap(), b"keep me");
    }

    #[test]
    fn copy_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let from = dir.path().join("artifact");
        fs::write(&from, b"bytes").unwrap();
        let to = dir.path().join("no-such-dir").join("artifact");

        let err = LocalInstaller::new().copy(&from, &to).unwrap_err();

        assert!(matches!(err, DeployError::Copy { .. }));
    }

    #[test]
    fn copy_leaves_no_temp_files() {
        let dir = tempdir().unwrap();
        let from = dir.path().join("artifact");
        let to_dir = dir.path().join("bin");
        fs::create_dir(&to_dir).unwrap();
        fs::write(&from, b"bytes").unwrap();

        LocalInstaller::new()
            .copy(&from, &to_dir.join("artifact"))
            .unwrap();

        let entries: Vec<_> = fs::read_dir(&to_dir).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn write_in_place_truncates_existing() {
        let dir = tempdir().unwrap();
        let from = dir.path().join("artifact");
        let to = dir.path().join("installed");
        fs::write(&from, b"new").unwrap();
        fs::write(&to, b"much longer old contents").unwrap();

        let bytes = write_in_place(&mut File::open(&from).unwrap(), &to).unwrap();

        assert_eq!(bytes, 3);
        assert_eq!(fs::read(&to).unwrap(), b"new");
    }

    #[cfg(unix)]
    #[test]
    fn copy_writes_through_symlinked_destination() {
        let dir = tempdir().unwrap();
        let from = dir.path().join("artifact");
        let real_dir = dir.path().join("real");
        let bin_dir = dir.path().join("bin");
        fs::create_dir(&real_dir).unwrap();
        fs::create_dir(&bin_dir).unwrap();
        let real = real_dir.join("bible_ref_parse");
        let link = bin_dir.join("bible_ref_parse");
        fs::write(&from, b"new").unwrap();
        fs::write(&real, b"old").unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();

        let outcome = LocalInstaller::new().copy(&from, &link).unwrap();

        assert!(outcome.replaced);
        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(fs::read(&real).unwrap(), b"new");
        assert_eq!(fs::read(&link).unwrap(), b"new");
        assert_eq!(fs::read_dir(&real_dir).unwrap().count(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn copy_overwrites_writable_file_in_read_only_directory() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let from = dir.path().join("artifact");
        let bin_dir = dir.path().join("bin");
        fs::create_dir(&bin_dir).unwrap();
        let to = bin_dir.join("bible_ref_parse");
        fs::write(&from, b"new").unwrap();
        fs::write(&to, b"old").unwrap();
        fs::set_permissions(&bin_dir, fs::Permissions::from_mode(0o555)).unwrap();

        let result = LocalInstaller::new().copy(&from, &to);
        fs::set_permissions(&bin_dir, fs::Permissions::from_mode(0o755)).unwrap();

        let outcome = result.unwrap();
        assert!(outcome.replaced);
        assert_eq!(fs::read(&to).unwrap(), b"new");
    }

    #[cfg(unix)]
    #[test]
    fn copy_into_read_only_directory_without_existing_file_is_denied() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let from = dir.path().join("artifact");
        let bin_dir = dir.path().join("bin");
        fs::create_dir(&bin_dir).unwrap();
        fs::write(&from, b"new").unwrap();
        fs::set_permissions(&bin_dir, fs::Permissions::from_mode(0o555)).unwrap();

        // Root ignores directory permissions; nothing to check then.
        let writable = tempfile::NamedTempFile::new_in(&bin_dir).is_ok();
        let result = LocalInstaller::new().copy(&from, &bin_dir.join("bible_ref_parse"));
        fs::set_permissions(&bin_dir, fs::Permissions::from_mode(0o755)).unwrap();

        if !writable {
            assert!(matches!(result, Err(DeployError::PermissionDenied { .. })));
        }
    }

    #[test]
    fn hash_matches_content_hash() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("artifact");
        fs::write(&path, b"hello").unwrap();

        let hash = LocalInstaller::new().hash(&path).unwrap();

        assert_eq!(hash, ContentHash::from_bytes(b"hello"));
    }

    #[cfg(unix)]
    #[test]
    fn make_executable_sets_exec_bits() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join("artifact");
        fs::write(&path, b"bytes").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o600)).unwrap();

        let mode = LocalInstaller::new().make_executable(&path, 0o644).unwrap();

        assert_eq!(mode, 0o755);
        assert_eq!(fs::metadata(&path).unwrap().permissions().mode() & 0o777, 0o755);
    }

    #[cfg(unix)]
    #[test]
    fn make_executable_missing_file_is_error() {
        let dir = tempdir().unwrap();
        let err = LocalInstaller::new()
            .make_executable(&dir.path().join("missing"), 0o755)
            .unwrap_err();
        assert!(matches!(err, DeployError::PermissionChange { .. }));
    }
}
