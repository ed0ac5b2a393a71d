//! Local filesystem adapter using std::fs.

use std::io;
use std::path::{Path, PathBuf};

use hatch_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{HatchError, HatchResult},
};
use tracing::trace;

/// Production filesystem implementation using `std::fs`.
///
/// Relative paths are resolved against `root` when one is set, otherwise
/// against the process working directory.
#[derive(Debug, Clone, Default)]
pub struct LocalFilesystem {
    root: Option<PathBuf>,
}

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Resolve every path under `root`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.root {
            Some(root) => root.join(path),
            None => path.to_path_buf(),
        }
    }
}

impl Filesystem for LocalFilesystem {
    fn create_directory(&self, path: &Path) -> HatchResult<()> {
        let target = self.resolve(path);
        trace!(path = %target.display(), "create_dir_all");
        std::fs::create_dir_all(&target).map_err(|e| directory_error(&target, e))
    }

    fn write_file(&self, path: &Path, content: &str) -> HatchResult<()> {
        let target = self.resolve(path);
        trace!(path = %target.display(), bytes = content.len(), "write");
        std::fs::write(&target, content).map_err(|e| write_error(&target, e))
    }

    #[cfg(unix)]
    fn mark_executable(&self, path: &Path) -> HatchResult<()> {
        use std::os::unix::fs::PermissionsExt;

        let target = self.resolve(path);
        let metadata = std::fs::metadata(&target).map_err(|e| write_error(&target, e))?;
        let mut perms = metadata.permissions();
        perms.set_mode(perms.mode() | 0o111);
        std::fs::set_permissions(&target, perms).map_err(|e| write_error(&target, e))
    }

    #[cfg(not(unix))]
    fn mark_executable(&self, _path: &Path) -> HatchResult<()> {
        Err(ApplicationError::Unsupported {
            operation: "mark_executable",
        }
        .into())
    }
}

fn directory_error(path: &Path, e: io::Error) -> HatchError {
    ApplicationError::DirectoryCreation {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
    .into()
}

fn write_error(path: &Path, e: io::Error) -> HatchError {
    ApplicationError::FileWrite {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn create_directory_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::with_root(temp.path());

        fs.create_directory(Path::new("demo/src/main/java")).unwrap();
        fs.create_directory(Path::new("demo/src/main/java")).unwrap();
        assert!(temp.path().join("demo/src/main/java").is_dir());
    }

    #[test]
    fn create_directory_fails_when_file_is_in_the_way() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("demo"), "").unwrap();
        let fs = LocalFilesystem::with_root(temp.path());

        let err = fs.create_directory(Path::new("demo")).unwrap_err();
        assert!(matches!(
            err,
            HatchError::Application(ApplicationError::DirectoryCreation { .. })
        ));
    }

    #[test]
    fn write_file_overwrites() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::with_root(temp.path());

        fs.write_file(Path::new("a.txt"), "first").unwrap();
        fs.write_file(Path::new("a.txt"), "second").unwrap();
        assert_eq!(
            std::fs::read_to_string(temp.path().join("a.txt")).unwrap(),
            "second"
        );
    }

    #[test]
    fn write_into_missing_directory_is_a_write_error() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::with_root(temp.path());

        let err = fs.write_file(Path::new("nope/a.txt"), "x").unwrap_err();
        assert!(matches!(
            err,
            HatchError::Application(ApplicationError::FileWrite { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn mark_executable_sets_execute_bits() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::with_root(temp.path());
        fs.write_file(Path::new("main.sh"), "#!/bin/bash\n").unwrap();
        fs.mark_executable(Path::new("main.sh")).unwrap();

        let mode = std::fs::metadata(temp.path().join("main.sh"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o111, 0o111);
    }
}
