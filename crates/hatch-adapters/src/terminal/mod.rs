//! Terminal adapters.

mod scripted;
mod tty;

pub use scripted::{RenderCall, ScriptedTerminal};
pub use tty::ConsoleTerminal;
