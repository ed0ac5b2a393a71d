//! Terminal ports: reading keys and lines, drawing the menu.

use crate::domain::MenuOption;
use crate::error::HatchResult;

/// A decoded key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    /// Arrow up or `k`.
    Up,
    /// Arrow down or `j`.
    Down,
    /// Enter / return.
    Confirm,
    /// `q` or escape.
    Quit,
    /// Anything else; the raw character when there is one.
    Other(Option<char>),
}

impl KeyEvent {
    /// Decode a plain character the way the menu understands it.
    pub fn from_char(c: char) -> Self {
        match c {
            'k' => Self::Up,
            'j' => Self::Down,
            'q' => Self::Quit,
            '\n' | '\r' => Self::Confirm,
            '\u{1b}' => Self::Quit,
            other => Self::Other(Some(other)),
        }
    }
}

/// Blocking input source.
pub trait KeyInput {
    /// Wait for the next key press.
    fn next_key_event(&mut self) -> HatchResult<KeyEvent>;

    /// Read one line of text with echo. The line terminator is not included.
    fn read_line(&mut self) -> HatchResult<String>;
}

/// Side-effecting sink for the menu.
pub trait MenuRenderer {
    /// Draw the full menu with `highlight` marked selected.
    fn render_menu(&mut self, options: &[MenuOption], highlight: usize) -> HatchResult<()>;

    /// Draw `text` on `row`, below the menu.
    fn render_message(&mut self, row: usize, text: &str) -> HatchResult<()>;
}

/// Entering and leaving interactive mode.
///
/// `end_session` must restore the terminal even if the session failed.
pub trait InteractiveSession {
    fn begin_session(&mut self) -> HatchResult<()>;
    fn end_session(&mut self) -> HatchResult<()>;
}

/// Everything the interactive flow needs from a terminal.
pub trait Terminal: KeyInput + MenuRenderer + InteractiveSession {}

impl<T: KeyInput + MenuRenderer + InteractiveSession + ?Sized> Terminal for T {}
