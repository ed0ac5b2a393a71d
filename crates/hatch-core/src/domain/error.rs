// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (carried inside `ScaffoldResult`)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid project name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("Invalid scaffold plan: {0}")]
    InvalidPlan(String),

    #[error("Duplicate path in scaffold plan: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    #[error("Unknown language index {index} (expected 0..{available})")]
    UnknownLanguage { index: usize, available: usize },

    #[error("Unknown language '{0}'")]
    UnknownLanguageName(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidName { name, reason } => vec![
                format!("'{name}' cannot be used as a directory name: {reason}"),
                "Use a single path component, e.g. demo or my-project".into(),
            ],
            Self::UnknownLanguage { available, .. } => vec![
                format!("Pick a language id between 0 and {}", available.saturating_sub(1)),
                "Try: hatch list".into(),
            ],
            Self::UnknownLanguageName(_) => vec![
                "Run `hatch list` to see the supported languages".into(),
                "Example: hatch new demo --lang go".into(),
            ],
            _ => vec!["See `hatch --help` for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidName { .. } => ErrorCategory::Validation,
            Self::UnknownLanguage { .. } | Self::UnknownLanguageName(_) => ErrorCategory::NotFound,
            Self::InvalidPlan(_) | Self::DuplicatePath { .. } | Self::AbsolutePathNotAllowed { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
