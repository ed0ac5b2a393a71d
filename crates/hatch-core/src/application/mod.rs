//! Application layer for Hatch.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (Selector, ScaffoldService, CatalogService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. Templates and naming rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    CatalogService,
    LanguageInfo, // DTO for `hatch list`
    ScaffoldService,
    Selection,
    Selector,
    SelectorOutcome,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, InteractiveSession, KeyEvent, KeyInput, MenuRenderer, Terminal};

pub use error::ApplicationError;
