//! Implementation of the `hatch new` command.
//!
//! Non-interactive twin of the menu: resolve the language, then hand the
//! name to the same scaffold service.

use tracing::{debug, instrument};

use hatch_adapters::LocalFilesystem;
use hatch_core::{
    application::{CatalogService, ScaffoldService, services::planned_paths},
    domain::LanguageRegistry,
};

use crate::{cli::NewArgs, config::AppConfig, error::CliResult, output::OutputManager};

/// Execute the `hatch new` command.
#[instrument(skip_all, fields(project = %args.name, lang = %args.language))]
pub fn execute(args: NewArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let registry = LanguageRegistry::builtin();
    let index = CatalogService::new(&registry).resolve(&args.language)?;
    let spec = registry.get(index).map_err(hatch_core::error::HatchError::from)?;
    debug!(index, language = %spec.language(), "language resolved");

    let filesystem = Box::new(LocalFilesystem::with_root(&config.output_dir));
    let service = ScaffoldService::new(&registry, filesystem);

    let plan = service.plan(index, &args.name)?;
    if args.dry_run {
        output.info(&format!(
            "Dry run: would create '{}' ({}) with {} entries",
            args.name,
            spec.display_name(),
            plan.operation_count() + 1,
        ))?;
        for path in planned_paths(&plan) {
            output.detail(&config.output_dir.join(path).display().to_string())?;
        }
        return Ok(());
    }

    let target = config.output_dir.join(plan.root());
    if target.is_dir() {
        output.warning(&format!(
            "'{}' already exists; its files will be overwritten",
            target.display()
        ))?;
    }

    output.header(&format!(
        "Creating '{}' ({})...",
        args.name,
        spec.display_name()
    ))?;
    let result = service.scaffold(index, &args.name);
    super::report(result, &args.name, &config.output_dir, &output)
}
