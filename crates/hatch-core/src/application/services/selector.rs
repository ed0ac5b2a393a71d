//! Selector - the interactive language menu.
//!
//! The state machine ([`SelectorState::apply`]) is pure; [`Selector::run`]
//! is the loop that reads one event at a time, applies it, and asks the
//! renderer to redraw.
//!
//! ```text
//!            Up/Down/Other
//!              ┌──────┐
//!              ▼      │
//!   start ─► Browsing ┴─ Confirm ─► EnteringName ─ line ─► Done
//!              │
//!              └─ Quit ─► Cancelled
//! ```

use tracing::{debug, info, instrument, trace};

use crate::{
    application::ports::{KeyEvent, KeyInput, MenuRenderer},
    domain::LanguageRegistry,
    error::{HatchError, HatchResult},
};

/// Title drawn on row 0.
pub const MENU_TITLE: &str = "Select a language/framework (press 'q' or ESC to quit):";

/// First row used by menu options.
pub const MENU_FIRST_ROW: usize = 2;

/// Prompt drawn once Enter is pressed.
pub const NAME_PROMPT: &str = "Enter project name:";

/// Row of the name prompt, given `n` options.
pub const fn prompt_row(n: usize) -> usize {
    n + 4
}

/// Row on which the typed name is echoed.
pub const fn input_row(n: usize) -> usize {
    n + 5
}

/// Row of the "Generating ..." message.
pub const fn status_row(n: usize) -> usize {
    n + 7
}

/// Row of the closing "Done" message.
pub const fn done_row(n: usize) -> usize {
    n + 9
}

/// Where the selector is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Browsing,
    EnteringName,
    Done,
    Cancelled,
}

/// Result of feeding one key event to the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Highlight moved; the menu must be redrawn.
    Moved,
    /// Nothing changed.
    Ignored,
    /// Enter was pressed; a line must be read next.
    AwaitName,
    Cancelled,
}

/// Mutable selector state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorState {
    option_count: usize,
    highlight_index: usize,
    mode: Mode,
    entered_name: String,
}

impl SelectorState {
    /// Fresh state for a menu of `option_count` entries.
    ///
    /// # Panics
    /// Panics if `option_count` is zero.
    pub fn new(option_count: usize) -> Self {
        assert!(option_count > 0, "selector needs at least one option");
        Self {
            option_count,
            highlight_index: 0,
            mode: Mode::Browsing,
            entered_name: String::new(),
        }
    }

    pub fn highlight_index(&self) -> usize {
        self.highlight_index
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn entered_name(&self) -> &str {
        &self.entered_name
    }

    /// Apply one key event. Only meaningful while browsing.
    pub fn apply(&mut self, event: KeyEvent) -> Transition {
        if self.mode != Mode::Browsing {
            return Transition::Ignored;
        }

        let n = self.option_count;
        match event {
            KeyEvent::Up => {
                self.highlight_index = (self.highlight_index + n - 1) % n;
                Transition::Moved
            }
            KeyEvent::Down => {
                self.highlight_index = (self.highlight_index + 1) % n;
                Transition::Moved
            }
            KeyEvent::Confirm => {
                self.mode = Mode::EnteringName;
                Transition::AwaitName
            }
            KeyEvent::Quit => {
                self.mode = Mode::Cancelled;
                Transition::Cancelled
            }
            KeyEvent::Other(_) => Transition::Ignored,
        }
    }

    /// Store the typed line verbatim and finish.
    pub fn submit_name(&mut self, line: String) {
        if self.mode == Mode::EnteringName {
            self.entered_name = line;
            self.mode = Mode::Done;
        }
    }
}

/// The user's final choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub language_index: usize,
    pub project_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorOutcome {
    Cancelled,
    Confirmed(Selection),
}

/// Drives a [`SelectorState`] from a terminal.
pub struct Selector<'r> {
    registry: &'r LanguageRegistry,
}

impl<'r> Selector<'r> {
    pub fn new(registry: &'r LanguageRegistry) -> Self {
        Self { registry }
    }

    /// Run the menu until the user confirms or quits.
    ///
    /// Input or render failures are returned as-is; the caller treats them as
    /// a cancelled session (no file is written).
    #[instrument(skip_all, fields(options = self.registry.len()))]
    pub fn run<T>(&self, terminal: &mut T) -> HatchResult<SelectorOutcome>
    where
        T: KeyInput + MenuRenderer + ?Sized,
    {
        let options = self.registry.menu_options();
        if options.is_empty() {
            return Err(HatchError::Internal {
                message: "language registry is empty".into(),
            });
        }
        let mut state = SelectorState::new(options.len());

        terminal.render_menu(&options, state.highlight_index())?;

        loop {
            let event = terminal.next_key_event()?;
            trace!(?event, "key event");

            match state.apply(event) {
                Transition::Moved => {
                    debug!(highlight = state.highlight_index(), "highlight moved");
                    terminal.render_menu(&options, state.highlight_index())?;
                }
                Transition::Ignored => {
                    terminal.render_menu(&options, state.highlight_index())?;
                }
                Transition::Cancelled => {
                    info!("selection cancelled");
                    return Ok(SelectorOutcome::Cancelled);
                }
                Transition::AwaitName => break,
            }
        }

        terminal.render_message(prompt_row(options.len()), NAME_PROMPT)?;
        let line = terminal.read_line()?;
        state.submit_name(line);

        let selection = Selection {
            language_index: state.highlight_index(),
            project_name: state.entered_name().to_string(),
        };
        info!(
            language_index = selection.language_index,
            project = %selection.project_name,
            "selection confirmed"
        );
        Ok(SelectorOutcome::Confirmed(selection))
    }
}
