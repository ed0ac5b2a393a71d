//! Scaffold Service - the template-dispatch engine.
//!
//! This service coordinates one scaffolding run:
//! 1. Resolve the language id in the registry
//! 2. Validate the project name
//! 3. Ask the language's generator for a plan
//! 4. Apply the plan to the filesystem, in order, stopping at the first error
//!
//! Nothing is ever rolled back; the result lists what was created so the
//! caller can report or clean up.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::Filesystem,
    domain::{
        DomainValidator, FileInstruction, LanguageRegistry, Operation,
        ProjectStructure, ScaffoldResult,
    },
    error::HatchResult,
};

/// Main scaffolding service.
pub struct ScaffoldService<'r> {
    registry: &'r LanguageRegistry,
    filesystem: Box<dyn Filesystem>,
}

impl<'r> ScaffoldService<'r> {
    /// Create a new scaffold service over a registry and a filesystem adapter.
    pub fn new(registry: &'r LanguageRegistry, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            registry,
            filesystem,
        }
    }

    /// Scaffold `project_name` for the language with id `language_index`.
    ///
    /// Validation failures (`UnknownLanguage`, `InvalidName`) are reported
    /// before any filesystem call.
    #[instrument(skip_all, fields(language_index, project = %project_name))]
    pub fn scaffold(&self, language_index: usize, project_name: &str) -> ScaffoldResult {
        let structure = match self.plan(language_index, project_name) {
            Ok(structure) => structure,
            Err(e) => {
                warn!(error = %e, "scaffold rejected before touching the filesystem");
                return ScaffoldResult::failed(e);
            }
        };

        info!(
            root = %structure.root().display(),
            operations = structure.operation_count(),
            "applying scaffold plan"
        );
        self.apply(&structure)
    }

    /// Build and validate the plan without writing anything.
    pub fn plan(&self, language_index: usize, project_name: &str) -> HatchResult<ProjectStructure> {
        let spec = self.registry.get(language_index)?;
        DomainValidator::validate_project_name(project_name)?;

        let structure = spec.generator().generate(project_name);
        DomainValidator::validate_project_structure(&structure)?;

        debug!(language = %spec.language(), "plan resolved");
        Ok(structure)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn apply(&self, structure: &ProjectStructure) -> ScaffoldResult {
        let mut result = ScaffoldResult::default();
        let root = structure.root().to_path_buf();

        // An existing root is reused.
        if let Err(e) = self.filesystem.create_directory(&root) {
            warn!(error = %e, path = %root.display(), "could not create project directory");
            result.error = Some(e);
            return result;
        }
        result.created_paths.push(root.clone());

        for op in structure.operations() {
            let path = root.join(op.path().as_path());
            let outcome = match op {
                Operation::CreateDirectory(_) => self.filesystem.create_directory(&path),
                Operation::WriteFile(file) => self.write(&path, file),
            };

            match outcome {
                Ok(()) => {
                    debug!(path = %path.display(), "created");
                    result.created_paths.push(path);
                }
                Err(e) => {
                    warn!(
                        error = %e,
                        path = %path.display(),
                        created = result.created_paths.len(),
                        "scaffold aborted"
                    );
                    result.error = Some(e);
                    return result;
                }
            }
        }

        info!(created = result.created_paths.len(), "scaffold completed");
        result
    }

    fn write(&self, path: &Path, file: &FileInstruction) -> HatchResult<()> {
        self.filesystem.write_file(path, &file.content)?;

        if file.executable {
            // Failing to set the mode is the one tolerated error.
            if let Err(e) = self.filesystem.mark_executable(path) {
                warn!(error = %e, path = %path.display(), "could not mark file executable");
            }
        }
        Ok(())
    }
}

/// Paths a successful run would create, in order, for display.
pub fn planned_paths(structure: &ProjectStructure) -> Vec<PathBuf> {
    let mut paths = vec![structure.root().to_path_buf()];
    paths.extend(structure.paths());
    paths
}
