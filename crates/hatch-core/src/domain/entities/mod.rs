pub mod common;
pub mod project_structure;
pub mod scaffold_result;
pub mod template;

pub use crate::domain::DomainError;
pub use project_structure::ProjectStructure;
pub use scaffold_result::ScaffoldResult;
pub use template::{RenderContext, TemplateContent};
