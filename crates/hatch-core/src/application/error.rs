//! Application layer errors.
//!
//! These errors represent collaborator failures, not domain rules.
//! Domain errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while driving the terminal or filesystem ports.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// Reading input or rendering failed. Fatal for the interactive session.
    #[error("Terminal I/O failed: {reason}")]
    TerminalIo { reason: String },

    /// Writing a generated file failed.
    #[error("Failed to write {path}: {reason}")]
    FileWrite { path: PathBuf, reason: String },

    /// Creating a directory failed for a reason other than "already exists".
    #[error("Failed to create directory {path}: {reason}")]
    DirectoryCreation { path: PathBuf, reason: String },

    /// An optional collaborator capability is missing on this platform.
    #[error("{operation} is not supported by this filesystem")]
    Unsupported { operation: &'static str },

    /// Adapter state lock was poisoned.
    #[error("Adapter state lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TerminalIo { .. } => vec![
                "Run hatch from an interactive terminal".into(),
                "Or skip the menu: hatch new <NAME> --lang <LANG>".into(),
            ],
            Self::FileWrite { path, .. } | Self::DirectoryCreation { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Make sure no file is in the way of the project directory".into(),
            ],
            Self::Unsupported { operation } => {
                vec![format!("'{operation}' has to be done by hand on this platform")]
            }
            Self::StoreLockError => vec!["Try again".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TerminalIo { .. } | Self::FileWrite { .. } | Self::DirectoryCreation { .. } => {
                ErrorCategory::Io
            }
            Self::Unsupported { .. } | Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
