//! The interactive menu (default command).
//!
//! Three terminal phases around one non-interactive scaffold:
//! 1. session: menu, name prompt, "Generating ..." line
//! 2. no session: `ScaffoldService::scaffold`
//! 3. session: "Done. Exiting..." line, only when the scaffold succeeded

use std::path::Path;

use tracing::{info, instrument, warn};

use hatch_adapters::{ConsoleTerminal, LocalFilesystem};
use hatch_core::{
    application::{
        ScaffoldService, Selector, SelectorOutcome,
        ports::{Filesystem, InteractiveSession, MenuRenderer, Terminal},
        services::{done_row, status_row},
    },
    domain::LanguageRegistry,
    error::{HatchError, HatchResult},
};

use crate::{config::AppConfig, error::CliResult, output::OutputManager};

pub const DONE_MESSAGE: &str = "Done. Exiting...";

/// Execute the interactive flow on the real terminal.
pub fn execute(config: AppConfig, output: OutputManager) -> CliResult<()> {
    let registry = LanguageRegistry::builtin();
    let mut terminal = ConsoleTerminal::new().no_color(config.no_color);
    let filesystem = Box::new(LocalFilesystem::with_root(&config.output_dir));

    run(&registry, &mut terminal, filesystem, &config.output_dir, &output)
}

/// The flow itself, generic over the terminal so tests can script it.
#[instrument(skip_all)]
pub fn run<T>(
    registry: &LanguageRegistry,
    terminal: &mut T,
    filesystem: Box<dyn Filesystem>,
    base: &Path,
    output: &OutputManager,
) -> CliResult<()>
where
    T: Terminal + ?Sized,
{
    let selection = match in_session(terminal, |t| select(registry, t))? {
        SelectorOutcome::Cancelled => {
            info!("cancelled, nothing written");
            return Ok(());
        }
        SelectorOutcome::Confirmed(selection) => selection,
    };

    let result = ScaffoldService::new(registry, filesystem)
        .scaffold(selection.language_index, &selection.project_name);

    if result.is_success() {
        let rows = registry.len();
        in_session(terminal, |t| t.render_message(done_row(rows), DONE_MESSAGE))?;
    }

    super::report(result, &selection.project_name, base, output)
}

fn select<T>(registry: &LanguageRegistry, terminal: &mut T) -> HatchResult<SelectorOutcome>
where
    T: Terminal + ?Sized,
{
    let outcome = Selector::new(registry).run(terminal)?;

    if let SelectorOutcome::Confirmed(selection) = &outcome {
        let spec = registry.get(selection.language_index)?;
        terminal.render_message(
            status_row(registry.len()),
            &format!(
                "Generating project '{}' in language: {}",
                selection.project_name,
                spec.display_name()
            ),
        )?;
    }
    Ok(outcome)
}

/// Run `body` between `begin_session` and `end_session`.
///
/// The session is always ended once begun; an error from `body` wins over
/// one from `end_session`.
fn in_session<T, R>(
    terminal: &mut T,
    body: impl FnOnce(&mut T) -> HatchResult<R>,
) -> Result<R, HatchError>
where
    T: Terminal + ?Sized,
{
    terminal.begin_session()?;
    let outcome = body(terminal);
    let ended = terminal.end_session();

    if let Err(e) = &ended {
        warn!(error = %e, "failed to restore the terminal");
    }
    let value = outcome?;
    ended?;
    Ok(value)
}
