// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Hatch.
//!
//! This module contains pure logic: the language registry, the per-language
//! generators and the scaffold plan they produce. All terminal and
//! filesystem concerns are handled via ports defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: Generators return plans; they never touch the filesystem
//! - **Immutable registry**: built once, shared by reference
pub mod entities;
pub mod error;
pub mod generators;
pub mod registry;
pub mod value_objects;

mod validation;

pub use entities::{
    common::RelativePath,
    project_structure::{DirectoryInstruction, FileInstruction, Operation, ProjectStructure},
    scaffold_result::ScaffoldResult,
    template::{PROJECT_NAME_PLACEHOLDER, RenderContext, TemplateContent},
};

pub use error::{DomainError, ErrorCategory};

pub use generators::{Generator, StaticTemplate, TemplateNode};

pub use registry::{LanguageRegistry, LanguageSpec, MenuOption};

pub use value_objects::{ColorHint, Language};

pub use validation::DomainValidator;
