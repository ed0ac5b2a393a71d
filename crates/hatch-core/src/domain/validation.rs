use crate::domain::{entities::ProjectStructure, error::DomainError};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    /// A project name must be usable as a single path component.
    ///
    /// Only emptiness, separators and the `.`/`..` aliases are rejected. The
    /// name is otherwise taken verbatim (spaces and leading dots included);
    /// anything else the platform refuses surfaces from the filesystem.
    pub fn validate_project_name(name: &str) -> Result<(), DomainError> {
        let invalid = |reason: &str| DomainError::InvalidName {
            name: name.to_string(),
            reason: reason.to_string(),
        };

        if name.is_empty() {
            return Err(invalid("name cannot be empty"));
        }
        if name.contains('/') || name.contains('\\') {
            return Err(invalid("name cannot contain path separators"));
        }
        if name == "." || name == ".." {
            return Err(invalid("name cannot refer to the current or parent directory"));
        }
        if name.contains('\0') {
            return Err(invalid("name cannot contain NUL bytes"));
        }
        Ok(())
    }

    pub fn validate_project_structure(structure: &ProjectStructure) -> Result<(), DomainError> {
        structure.validate()
    }
}
