//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockWriteGuard},
};

use hatch_core::{
    application::{ApplicationError, ports::Filesystem},
    error::HatchResult,
};

/// One call received by a [`MemoryFilesystem`], in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FsCall {
    CreateDirectory(PathBuf),
    WriteFile(PathBuf),
    MarkExecutable(PathBuf),
}

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can keep a handle after boxing one into a
/// service.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
    executables: HashSet<PathBuf>,
    failures: HashSet<PathBuf>,
    log: Vec<FsCall>,
    executable_supported: bool,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner {
                files: BTreeMap::new(),
                directories: BTreeSet::new(),
                executables: HashSet::new(),
                failures: HashSet::new(),
                log: Vec::new(),
                executable_supported: true,
            })),
        }
    }

    /// A filesystem whose `mark_executable` always returns `Unsupported`.
    pub fn without_executable_support() -> Self {
        let fs = Self::new();
        if let Ok(mut inner) = fs.inner.write() {
            inner.executable_supported = false;
        }
        fs
    }

    /// Make every later operation on `path` fail.
    pub fn fail_on(&self, path: impl Into<PathBuf>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.failures.insert(path.into());
        }
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// Check if a file is marked executable.
    pub fn is_executable(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.executables.contains(path))
            .unwrap_or(false)
    }

    pub fn is_directory(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }

    /// All files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// All directories, sorted, including implied parents.
    pub fn directories(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.directories.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Every call received so far, including failed ones.
    pub fn operation_log(&self) -> Vec<FsCall> {
        self.inner
            .read()
            .map(|inner| inner.log.clone())
            .unwrap_or_default()
    }

    /// Clear all contents. Fault injection settings are kept.
    pub fn clear(&self) {
        if let Ok(mut inner) = self.inner.write() {
            inner.files.clear();
            inner.directories.clear();
            inner.executables.clear();
            inner.log.clear();
        }
    }

    fn lock(&self) -> HatchResult<RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        Ok(self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?)
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_directory(&self, path: &Path) -> HatchResult<()> {
        let mut inner = self.lock()?;
        inner.log.push(FsCall::CreateDirectory(path.to_path_buf()));

        if inner.failures.contains(path) {
            return Err(ApplicationError::DirectoryCreation {
                path: path.to_path_buf(),
                reason: "injected failure".into(),
            }
            .into());
        }

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            if inner.files.contains_key(&current) {
                return Err(ApplicationError::DirectoryCreation {
                    path: path.to_path_buf(),
                    reason: format!("{} is a file", current.display()),
                }
                .into());
            }
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> HatchResult<()> {
        let mut inner = self.lock()?;
        inner.log.push(FsCall::WriteFile(path.to_path_buf()));

        if inner.failures.contains(path) {
            return Err(ApplicationError::FileWrite {
                path: path.to_path_buf(),
                reason: "injected failure".into(),
            }
            .into());
        }

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FileWrite {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        if inner.directories.contains(path) {
            return Err(ApplicationError::FileWrite {
                path: path.to_path_buf(),
                reason: "Is a directory".into(),
            }
            .into());
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn mark_executable(&self, path: &Path) -> HatchResult<()> {
        let mut inner = self.lock()?;
        inner.log.push(FsCall::MarkExecutable(path.to_path_buf()));

        if !inner.executable_supported {
            return Err(ApplicationError::Unsupported {
                operation: "mark_executable",
            }
            .into());
        }

        if !inner.files.contains_key(path) {
            return Err(ApplicationError::FileWrite {
                path: path.to_path_buf(),
                reason: "No such file".into(),
            }
            .into());
        }

        inner.executables.insert(path.to_path_buf());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hatch_core::error::HatchError;

    #[test]
    fn nested_directories_imply_parents() {
        let fs = MemoryFilesystem::new();
        fs.create_directory(Path::new("demo/src/main/java")).unwrap();

        assert!(fs.is_directory(Path::new("demo")));
        assert!(fs.is_directory(Path::new("demo/src/main")));
        assert_eq!(fs.directories().len(), 4);
    }

    #[test]
    fn write_requires_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("demo/main.go"), "x").is_err());

        fs.create_directory(Path::new("demo")).unwrap();
        fs.write_file(Path::new("demo/main.go"), "x").unwrap();
        assert_eq!(fs.read_file(Path::new("demo/main.go")).as_deref(), Some("x"));
    }

    #[test]
    fn clones_share_state() {
        let fs = MemoryFilesystem::new();
        let handle = fs.clone();
        fs.create_directory(Path::new("demo")).unwrap();
        assert!(handle.is_directory(Path::new("demo")));
    }

    #[test]
    fn fail_on_injects_errors_and_logs_the_call() {
        let fs = MemoryFilesystem::new();
        fs.fail_on("demo");

        let err = fs.create_directory(Path::new("demo")).unwrap_err();
        assert!(matches!(
            err,
            HatchError::Application(ApplicationError::DirectoryCreation { .. })
        ));
        assert_eq!(
            fs.operation_log(),
            vec![FsCall::CreateDirectory(PathBuf::from("demo"))]
        );
    }

    #[test]
    fn unsupported_executables() {
        let fs = MemoryFilesystem::without_executable_support();
        fs.write_file(Path::new("main.sh"), "").unwrap();

        let err = fs.mark_executable(Path::new("main.sh")).unwrap_err();
        assert!(matches!(
            err,
            HatchError::Application(ApplicationError::Unsupported { .. })
        ));
        assert!(!fs.is_executable(Path::new("main.sh")));
    }

    #[test]
    fn clear_keeps_fault_injection() {
        let fs = MemoryFilesystem::new();
        fs.fail_on("x");
        fs.create_directory(Path::new("demo")).unwrap();
        fs.clear();

        assert!(fs.directories().is_empty());
        assert!(fs.operation_log().is_empty());
        assert!(fs.write_file(Path::new("x"), "").is_err());
    }
}
