//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `hatch-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Terminal**: `KeyInput`, `MenuRenderer`, `InteractiveSession`
//! - **Storage**: `Filesystem`

pub mod filesystem;
pub mod terminal;

pub use filesystem::Filesystem;
pub use terminal::{InteractiveSession, KeyEvent, KeyInput, MenuRenderer, Terminal};

#[cfg(test)]
pub use filesystem::MockFilesystem;
