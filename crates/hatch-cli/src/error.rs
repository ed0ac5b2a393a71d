//! Error handling for the hatch CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Proper error chaining
//! - Exit code mapping

use std::error::Error;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;

use hatch_core::domain::{DomainError, Language};
use hatch_core::error::HatchError;

// Re-export so callers only need `use crate::error::*`.
pub use hatch_core::error::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// Project name validation failed.
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    /// The user named a language hatch does not know.
    #[error("Unsupported language '{language}'")]
    UnsupportedLanguage { language: String },

    /// `--dir` or another flag describes an unusable setup.
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    // ── Core errors ────────────────────────────────────────────────────────
    /// An error propagated from `hatch-core`.
    #[error("{0}")]
    Core(HatchError),

    /// Scaffolding stopped part way. Nothing was rolled back.
    #[error("Scaffolding failed: {source}")]
    ScaffoldFailed {
        #[source]
        source: HatchError,
        created: Vec<PathBuf>,
    },

    // ── System errors ──────────────────────────────────────────────────────
    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

/// Name and language problems get their own CLI variants.
impl From<HatchError> for CliError {
    fn from(err: HatchError) -> Self {
        match err {
            HatchError::Domain(DomainError::InvalidName { name, reason }) => {
                CliError::InvalidProjectName { name, reason }
            }
            HatchError::Domain(DomainError::UnknownLanguageName(language)) => {
                CliError::UnsupportedLanguage { language }
            }
            other => CliError::Core(other),
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { name, reason } => vec![
                format!("Project name '{name}' is invalid: {reason}"),
                "The name becomes a directory under the current directory".into(),
                "Examples: demo, my_app, \"my project\"".into(),
            ],

            Self::UnsupportedLanguage { language } => {
                let mut suggestions = vec![
                    format!("'{language}' is not a supported language"),
                    "Supported languages:".into(),
                ];
                for lang in Language::ALL {
                    suggestions.push(format!("  • {:<10} - {}", lang.as_str(), lang.display_name()));
                }
                suggestions.push("Example: hatch new demo --lang go".into());
                suggestions
            }

            Self::ConfigError { message } => vec![
                format!("Configuration issue: {message}"),
                "Pass an existing directory to --dir".into(),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::ScaffoldFailed { source, created } => {
                let mut suggestions = source.suggestions();
                if created.is_empty() {
                    suggestions.push("Nothing was created".into());
                } else {
                    suggestions.push("Created before the failure (not removed):".into());
                    for path in created {
                        suggestions.push(format!("  {}", path.display()));
                    }
                }
                suggestions
            }

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {message}"),
                "Check file permissions".into(),
                "Check available disk space".into(),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectName { .. } => ErrorCategory::UserError,
            Self::UnsupportedLanguage { .. } => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) | Self::ScaffoldFailed { source: core, .. } => {
                match core.category() {
                    CoreCategory::Validation => ErrorCategory::UserError,
                    CoreCategory::NotFound => ErrorCategory::NotFound,
                    CoreCategory::Io | CoreCategory::Internal => ErrorCategory::Internal,
                }
            }
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{} {}\n\n",
            "✗".red().bold(),
            "Error:".red().bold()
        ));
        output.push_str(&format!("  {}\n", self.to_string().red()));

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "\n  {} {}\n",
                    "→".dimmed(),
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {suggestion}\n"));
            }
        }

        if !verbose {
            output.push('\n');
            output.push_str(&format!(
                "{} {}\n",
                "\u{2139}".blue(), // ℹ
                "Use -v / --verbose for more details.".dimmed(),
            ));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`] with no ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {self}\n"));

        if verbose {
            let mut src = self.source();
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::NotFound => tracing::warn!("Not found: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, invalid arguments).
    UserError,
    /// Resource not found.
    NotFound,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use hatch_core::application::ApplicationError;
    use std::io;

    fn write_failure() -> HatchError {
        ApplicationError::FileWrite {
            path: PathBuf::from("demo/go.mod"),
            reason: "disk full".into(),
        }
        .into()
    }

    // ── conversions ────────────────────────────────────────────────────────

    #[test]
    fn invalid_name_becomes_cli_variant() {
        let err: CliError = HatchError::from(DomainError::InvalidName {
            name: "a/b".into(),
            reason: "contains a path separator".into(),
        })
        .into();
        assert!(matches!(err, CliError::InvalidProjectName { .. }));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn unknown_language_name_becomes_cli_variant() {
        let err: CliError =
            HatchError::from(DomainError::UnknownLanguageName("cobol".into())).into();
        assert!(matches!(err, CliError::UnsupportedLanguage { .. }));
    }

    #[test]
    fn unknown_index_stays_core() {
        let err: CliError = HatchError::from(DomainError::UnknownLanguage {
            index: 12,
            available: 12,
        })
        .into();
        assert!(matches!(err, CliError::Core(_)));
        assert_eq!(err.exit_code(), 3);
    }

    // ── suggestions ───────────────────────────────────────────────────────

    #[test]
    fn unsupported_language_lists_every_slug() {
        let err = CliError::UnsupportedLanguage {
            language: "cobol".into(),
        };
        let suggestions = err.suggestions();
        for lang in Language::ALL {
            assert!(suggestions.iter().any(|s| s.contains(lang.as_str())));
        }
    }

    #[test]
    fn scaffold_failure_lists_created_paths() {
        let err = CliError::ScaffoldFailed {
            source: write_failure(),
            created: vec![PathBuf::from("demo"), PathBuf::from("demo/main.go")],
        };
        let suggestions = err.suggestions();
        assert!(suggestions.iter().any(|s| s.contains("demo/main.go")));
        assert_eq!(err.exit_code(), 1);
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn exit_code_configuration() {
        let err = CliError::ConfigError {
            message: "x".into(),
        };
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn exit_code_internal() {
        assert_eq!(
            CliError::IoError {
                message: "x".into(),
                source: io::Error::other("e"),
            }
            .exit_code(),
            1
        );
    }

    #[test]
    fn terminal_failure_is_internal() {
        let err: CliError = HatchError::from(ApplicationError::TerminalIo {
            reason: "stdout is not a terminal".into(),
        })
        .into();
        assert_eq!(err.exit_code(), 1);
    }

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn format_plain_contains_error_header() {
        let err = CliError::InvalidProjectName {
            name: "".into(),
            reason: "name cannot be empty".into(),
        };
        let s = err.format_plain(false);
        assert!(s.contains("Error:"));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("--verbose"));
    }

    #[test]
    fn format_plain_verbose_shows_cause() {
        let err = CliError::ScaffoldFailed {
            source: write_failure(),
            created: Vec::new(),
        };
        let s = err.format_plain(true);
        assert!(s.contains("Caused by:"));
        assert!(!s.contains("--verbose"));
    }
}
