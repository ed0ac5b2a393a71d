//! Scripted terminal for tests and non-interactive drivers.

use std::collections::VecDeque;

use hatch_core::{
    application::{
        ApplicationError,
        ports::{InteractiveSession, KeyEvent, KeyInput, MenuRenderer},
    },
    domain::MenuOption,
    error::HatchResult,
};

/// Everything a [`ScriptedTerminal`] was asked to do, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderCall {
    BeginSession,
    EndSession,
    Menu { options: usize, highlight: usize },
    Message { row: usize, text: String },
    ReadLine,
}

/// Terminal that replays queued key events and lines.
///
/// An exhausted queue is reported as a terminal I/O failure, which is what a
/// closed stdin looks like to the real adapter.
#[derive(Debug, Default)]
pub struct ScriptedTerminal {
    events: VecDeque<KeyEvent>,
    lines: VecDeque<String>,
    calls: Vec<RenderCall>,
}

impl ScriptedTerminal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_events(events: impl IntoIterator<Item = KeyEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.lines.push_back(line.into());
        self
    }

    pub fn calls(&self) -> &[RenderCall] {
        &self.calls
    }

    /// Highlight index of every menu render.
    pub fn menu_highlights(&self) -> Vec<usize> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                RenderCall::Menu { highlight, .. } => Some(*highlight),
                _ => None,
            })
            .collect()
    }

    /// `(row, text)` of every message render.
    pub fn messages(&self) -> Vec<(usize, String)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                RenderCall::Message { row, text } => Some((*row, text.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn remaining_events(&self) -> usize {
        self.events.len()
    }
}

impl KeyInput for ScriptedTerminal {
    fn next_key_event(&mut self) -> HatchResult<KeyEvent> {
        self.events.pop_front().ok_or_else(|| {
            ApplicationError::TerminalIo {
                reason: "no more scripted key events".into(),
            }
            .into()
        })
    }

    fn read_line(&mut self) -> HatchResult<String> {
        self.calls.push(RenderCall::ReadLine);
        self.lines.pop_front().ok_or_else(|| {
            ApplicationError::TerminalIo {
                reason: "no more scripted lines".into(),
            }
            .into()
        })
    }
}

impl MenuRenderer for ScriptedTerminal {
    fn render_menu(&mut self, options: &[MenuOption], highlight: usize) -> HatchResult<()> {
        self.calls.push(RenderCall::Menu {
            options: options.len(),
            highlight,
        });
        Ok(())
    }

    fn render_message(&mut self, row: usize, text: &str) -> HatchResult<()> {
        self.calls.push(RenderCall::Message {
            row,
            text: text.to_string(),
        });
        Ok(())
    }
}

impl InteractiveSession for ScriptedTerminal {
    fn begin_session(&mut self) -> HatchResult<()> {
        self.calls.push(RenderCall::BeginSession);
        Ok(())
    }

    fn end_session(&mut self) -> HatchResult<()> {
        self.calls.push(RenderCall::EndSession);
        Ok(())
    }
}
