//! Interactive terminal adapter built on `console::Term`.

use std::io;

use console::{Key, Term, style};
use hatch_core::{
    application::{
        ApplicationError,
        ports::{InteractiveSession, KeyEvent, KeyInput, MenuRenderer},
        services::{MENU_FIRST_ROW, MENU_TITLE, input_row},
    },
    domain::{ColorHint, MenuOption},
    error::{HatchError, HatchResult},
};
use tracing::{debug, trace};

const SELECTED: &str = "●";
const UNSELECTED: &str = "○";

/// Full-screen menu on stdout.
///
/// Rows are absolute: the session clears the screen and every render moves
/// the cursor before drawing.
#[derive(Debug)]
pub struct ConsoleTerminal {
    term: Term,
    colors: bool,
    option_count: usize,
}

impl ConsoleTerminal {
    pub fn new() -> Self {
        Self::with_term(Term::stdout())
    }

    pub fn with_term(term: Term) -> Self {
        Self {
            term,
            colors: true,
            option_count: 0,
        }
    }

    /// Disable colour output.
    pub fn no_color(mut self, no_color: bool) -> Self {
        self.colors = !no_color;
        self
    }

    fn draw_row(&self, row: usize, text: &str) -> io::Result<()> {
        self.term.move_cursor_to(0, row)?;
        self.term.clear_line()?;
        self.term.write_str(text)
    }
}

impl Default for ConsoleTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyInput for ConsoleTerminal {
    fn next_key_event(&mut self) -> HatchResult<KeyEvent> {
        let key = self.term.read_key().map_err(terminal_error)?;
        trace!(?key, "read key");
        Ok(map_key(key))
    }

    fn read_line(&mut self) -> HatchResult<String> {
        self.term
            .move_cursor_to(0, input_row(self.option_count))
            .map_err(terminal_error)?;
        self.term.show_cursor().map_err(terminal_error)?;
        let line = self.term.read_line().map_err(terminal_error);
        self.term.hide_cursor().map_err(terminal_error)?;
        line
    }
}

impl MenuRenderer for ConsoleTerminal {
    fn render_menu(&mut self, options: &[MenuOption], highlight: usize) -> HatchResult<()> {
        self.option_count = options.len();
        let title = format_heading(MENU_TITLE, self.colors);
        self.draw_row(0, &title).map_err(terminal_error)?;
        for (i, option) in options.iter().enumerate() {
            let line = format_option(option, i == highlight, self.colors);
            self.draw_row(MENU_FIRST_ROW + i, &line)
                .map_err(terminal_error)?;
        }
        self.term.flush().map_err(terminal_error)
    }

    fn render_message(&mut self, row: usize, text: &str) -> HatchResult<()> {
        let line = format_heading(text, self.colors);
        self.draw_row(row, &line).map_err(terminal_error)?;
        self.term.flush().map_err(terminal_error)
    }
}

impl InteractiveSession for ConsoleTerminal {
    fn begin_session(&mut self) -> HatchResult<()> {
        if !self.term.is_term() {
            return Err(ApplicationError::TerminalIo {
                reason: "stdout is not a terminal".into(),
            }
            .into());
        }
        debug!("entering interactive session");
        self.term.clear_screen().map_err(terminal_error)?;
        self.term.hide_cursor().map_err(terminal_error)
    }

    fn end_session(&mut self) -> HatchResult<()> {
        debug!("leaving interactive session");
        self.term.show_cursor().map_err(terminal_error)?;
        self.term.write_line("").map_err(terminal_error)
    }
}

/// Decode a `console` key.
fn map_key(key: Key) -> KeyEvent {
    match key {
        Key::ArrowUp => KeyEvent::Up,
        Key::ArrowDown => KeyEvent::Down,
        Key::Enter => KeyEvent::Confirm,
        Key::Escape => KeyEvent::Quit,
        Key::Char(c) => KeyEvent::from_char(c),
        _ => KeyEvent::Other(None),
    }
}

/// Green marker when selected, red otherwise; the label takes the option colour.
fn format_option(option: &MenuOption, selected: bool, colors: bool) -> String {
    let marker = if selected { SELECTED } else { UNSELECTED };
    if !colors {
        return format!("{marker} {}", option.display_name);
    }

    let marker = if selected {
        style(marker).green()
    } else {
        style(marker).red()
    };
    let label = style(option.display_name);
    let label = match option.color_hint {
        ColorHint::Red => label.red(),
        ColorHint::Yellow => label.yellow(),
        ColorHint::Green => label.green(),
        ColorHint::Cyan => label.cyan(),
        ColorHint::Blue => label.blue(),
        ColorHint::Magenta => label.magenta(),
    };
    let label = if selected { label.bold() } else { label };
    format!("{marker} {label}")
}

/// Title, prompt and status lines are green.
fn format_heading(text: &str, colors: bool) -> String {
    if colors {
        style(text).green().to_string()
    } else {
        text.to_string()
    }
}

fn terminal_error(e: io::Error) -> HatchError {
    ApplicationError::TerminalIo {
        reason: e.to_string(),
    }
    .into()
}
