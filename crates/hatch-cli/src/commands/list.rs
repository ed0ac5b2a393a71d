//! Implementation of the `hatch list` command.

use hatch_core::{application::CatalogService, domain::LanguageRegistry};

use crate::{
    cli::{ListArgs, ListFormat},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, output: OutputManager) -> CliResult<()> {
    let registry = LanguageRegistry::builtin();
    let languages = CatalogService::new(&registry).list();

    match args.format {
        ListFormat::Table => {
            output.header("Available languages:")?;
            for lang in &languages {
                output.print(&format!(
                    "  {:>2}  {:<10}  {:<22}  {}",
                    lang.id,
                    lang.slug,
                    lang.name,
                    lang.files.join(", ")
                ))?;
            }
        }

        // Machine-readable formats bypass OutputManager so they stay
        // parseable in pipes and under --quiet.
        ListFormat::Plain => {
            for lang in &languages {
                println!("{}", lang.slug);
            }
        }

        ListFormat::Json => {
            let json = serde_json::to_string_pretty(&languages).map_err(std::io::Error::from)?;
            println!("{json}");
        }
    }

    Ok(())
}
