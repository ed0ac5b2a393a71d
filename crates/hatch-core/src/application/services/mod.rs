//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "pick a language" or "scaffold a project".

pub mod catalog_service;
pub mod scaffold_service;
pub mod selector;

pub use catalog_service::{CatalogService, LanguageInfo};
pub use scaffold_service::{ScaffoldService, planned_paths};
pub use selector::{
    MENU_FIRST_ROW, MENU_TITLE, Mode, NAME_PROMPT, Selection, Selector, SelectorOutcome,
    SelectorState, Transition, done_row, input_row, prompt_row, status_row,
};
