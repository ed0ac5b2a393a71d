//! Infrastructure adapters for Hatch.
//!
//! This crate implements the ports defined in `hatch-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod terminal;

// Re-export commonly used adapters
pub use filesystem::{FsCall, LocalFilesystem, MemoryFilesystem};
pub use terminal::{ConsoleTerminal, RenderCall, ScriptedTerminal};
