//! Filesystem port.

use std::path::Path;

use crate::error::HatchResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `hatch_adapters::filesystem::LocalFilesystem` (production)
/// - `hatch_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Paths are relative, rooted at the project name. Adapters decide what
/// they are relative to.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory (and missing parents).
    ///
    /// Must succeed when the directory already exists.
    fn create_directory(&self, path: &Path) -> HatchResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> HatchResult<()>;

    /// Mark a file executable.
    ///
    /// Implementations without the capability return
    /// `ApplicationError::Unsupported`; callers treat any error as non-fatal.
    fn mark_executable(&self, path: &Path) -> HatchResult<()>;
}
