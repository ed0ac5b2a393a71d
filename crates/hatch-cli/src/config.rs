//! Application configuration.
//!
//! [`AppConfig`] is built once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! There is no config file. Resolution order (highest priority first):
//!
//! 1. CLI flags (`NO_COLOR` reaches us through clap's `env`)
//! 2. Built-in defaults (always present)

use std::path::PathBuf;

use crate::{
    cli::global::GlobalArgs,
    error::{CliError, CliResult},
};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory projects are created under.
    pub output_dir: PathBuf,
    pub no_color: bool,
    pub quiet: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            no_color: false,
            quiet: false,
        }
    }
}

impl AppConfig {
    /// Build configuration from parsed flags.
    ///
    /// Fails when `--dir` does not name an existing directory.
    pub fn from_args(args: &GlobalArgs) -> CliResult<Self> {
        let defaults = Self::default();

        let output_dir = match &args.dir {
            Some(dir) if !dir.is_dir() => {
                return Err(CliError::ConfigError {
                    message: format!("'{}' is not a directory", dir.display()),
                });
            }
            Some(dir) => dir.clone(),
            None => defaults.output_dir,
        };

        Ok(Self {
            output_dir,
            no_color: args.no_color,
            quiet: args.quiet,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_current_directory() {
        let cfg = AppConfig::from_args(&GlobalArgs::default()).unwrap();
        assert_eq!(cfg.output_dir, PathBuf::from("."));
        assert!(!cfg.no_color);
        assert!(!cfg.quiet);
    }

    #[test]
    fn flags_are_copied() {
        let temp = tempfile::TempDir::new().unwrap();
        let args = GlobalArgs {
            no_color: true,
            quiet: true,
            dir: Some(temp.path().to_path_buf()),
            ..GlobalArgs::default()
        };

        let cfg = AppConfig::from_args(&args).unwrap();
        assert_eq!(cfg.output_dir, temp.path());
        assert!(cfg.no_color);
        assert!(cfg.quiet);
    }

    #[test]
    fn missing_dir_is_a_config_error() {
        let args = GlobalArgs {
            dir: Some(PathBuf::from("/definitely/not/here")),
            ..GlobalArgs::default()
        };
        let err = AppConfig::from_args(&args).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }
}
