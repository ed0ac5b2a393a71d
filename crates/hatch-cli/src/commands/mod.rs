//! Command handlers. Each one translates arguments into core calls and
//! displays results; no business logic lives here.

pub mod completions;
pub mod interactive;
pub mod list;
pub mod new;

use std::path::Path;

use hatch_core::domain::ScaffoldResult;
use tracing::info;

use crate::{
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Print a finished scaffold or turn its error into a [`CliError`].
///
/// `base` is where relative paths were resolved, for display only.
pub(crate) fn report(
    result: ScaffoldResult,
    project_name: &str,
    base: &Path,
    output: &OutputManager,
) -> CliResult<()> {
    let ScaffoldResult {
        created_paths,
        error,
    } = result;

    if let Some(source) = error {
        // Rejected before any write: report the underlying error as-is.
        if created_paths.is_empty() {
            return Err(CliError::from(source));
        }
        return Err(CliError::ScaffoldFailed {
            source,
            created: created_paths.iter().map(|p| base.join(p)).collect(),
        });
    }

    info!(project = %project_name, created = created_paths.len(), "project ready");
    output.success(&format!("Project '{project_name}' created!"))?;
    for path in &created_paths {
        output.detail(&base.join(path).display().to_string())?;
    }

    if !output.is_quiet() {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd \"{}\"", base.join(project_name).display()))?;
    }
    Ok(())
}
