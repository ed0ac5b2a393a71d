//! Hatch Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the `hatch`
//! hello-world scaffolder, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            hatch-cli (CLI)              │
//! │      (entry point, args, logging)       │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │      (Selector, ScaffoldService)        │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │  (KeyInput, MenuRenderer, Filesystem)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     hatch-adapters (Infrastructure)     │
//! │ (ConsoleTerminal, LocalFilesystem, ...) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (LanguageRegistry, generators, plans)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hatch_core::prelude::*;
//!
//! # fn run(terminal: &mut dyn Terminal, fs: Box<dyn Filesystem>) -> HatchResult<()> {
//! let registry = LanguageRegistry::builtin();
//!
//! terminal.begin_session()?;
//! let outcome = Selector::new(&registry).run(terminal);
//! terminal.end_session()?;
//!
//! if let SelectorOutcome::Confirmed(selection) = outcome? {
//!     let service = ScaffoldService::new(&registry, fs);
//!     service
//!         .scaffold(selection.language_index, &selection.project_name)
//!         .into_result()?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ScaffoldService, Selection, Selector, SelectorOutcome,
        ports::{Filesystem, InteractiveSession, KeyEvent, KeyInput, MenuRenderer, Terminal},
    };
    pub use crate::domain::{
        ColorHint, FileInstruction, Language, LanguageRegistry, LanguageSpec, MenuOption,
        Operation, ProjectStructure, ScaffoldResult,
    };
    pub use crate::error::{HatchError, HatchResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
