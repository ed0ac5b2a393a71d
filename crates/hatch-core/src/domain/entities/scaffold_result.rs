use std::path::PathBuf;

use crate::error::{HatchError, HatchResult};

/// Outcome of applying a scaffold plan.
///
/// `created_paths` lists, in order, every directory and file the filesystem
/// accepted before the run stopped. On failure `error` holds the first error;
/// nothing already created is removed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScaffoldResult {
    pub created_paths: Vec<PathBuf>,
    pub error: Option<HatchError>,
}

impl ScaffoldResult {
    pub fn failed(error: impl Into<HatchError>) -> Self {
        Self {
            created_paths: Vec::new(),
            error: Some(error.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Paths created so far, discarding the error.
    pub fn created_paths(&self) -> &[PathBuf] {
        &self.created_paths
    }

    pub fn into_result(self) -> HatchResult<Vec<PathBuf>> {
        match self.error {
            None => Ok(self.created_paths),
            Some(e) => Err(e),
        }
    }
}
