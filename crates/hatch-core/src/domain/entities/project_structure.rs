use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::{entities::common::RelativePath, error::DomainError};

/// Ordered scaffold plan for one project.
///
/// This is the output of a generator. It contains no I/O, only data: the
/// project root (the project name) followed by the operations to apply under
/// it, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectStructure {
    pub(crate) root: PathBuf,
    pub(crate) operations: Vec<Operation>,
}

impl ProjectStructure {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            operations: Vec::new(),
        }
    }

    pub fn add_file(&mut self, path: impl Into<RelativePath>, content: String) {
        self.operations.push(Operation::WriteFile(FileInstruction {
            path: path.into(),
            content,
            executable: false,
        }));
    }

    pub fn add_executable(&mut self, path: impl Into<RelativePath>, content: String) {
        self.operations.push(Operation::WriteFile(FileInstruction {
            path: path.into(),
            content,
            executable: true,
        }));
    }

    pub fn add_directory(&mut self, path: impl Into<RelativePath>) {
        self.operations
            .push(Operation::CreateDirectory(DirectoryInstruction { path: path.into() }));
    }

    pub fn with_file(mut self, path: impl Into<RelativePath>, content: String) -> Self {
        self.add_file(path, content);
        self
    }

    pub fn with_executable(mut self, path: impl Into<RelativePath>, content: String) -> Self {
        self.add_executable(path, content);
        self
    }

    pub fn with_directory(mut self, path: impl Into<RelativePath>) -> Self {
        self.add_directory(path);
        self
    }

    /// Project directory, relative to wherever the plan is applied.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.operations.is_empty() {
            return Err(DomainError::InvalidPlan("scaffold plan is empty".into()));
        }

        let mut seen = HashSet::new();
        for op in &self.operations {
            let path = op.path();
            let path_str = path.to_string();
            if !seen.insert(path_str.clone()) {
                return Err(DomainError::DuplicatePath { path: path_str });
            }
        }

        Ok(())
    }

    pub fn files(&self) -> impl Iterator<Item = &FileInstruction> {
        self.operations.iter().filter_map(|op| match op {
            Operation::WriteFile(f) => Some(f),
            _ => None,
        })
    }

    pub fn directories(&self) -> impl Iterator<Item = &DirectoryInstruction> {
        self.operations.iter().filter_map(|op| match op {
            Operation::CreateDirectory(d) => Some(d),
            _ => None,
        })
    }

    /// Paths of every file and directory, prefixed with the root, in order.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.operations
            .iter()
            .map(|op| self.root.join(op.path().as_path()))
            .collect()
    }

    pub fn operation_count(&self) -> usize {
        self.operations.len()
    }
}

/// One step of a scaffold plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    CreateDirectory(DirectoryInstruction),
    WriteFile(FileInstruction),
}

impl Operation {
    /// Path relative to the project root.
    pub fn path(&self) -> &RelativePath {
        match self {
            Self::CreateDirectory(d) => &d.path,
            Self::WriteFile(f) => &f.path,
        }
    }
}

/// A file to write: relative path plus its complete content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInstruction {
    pub path: RelativePath,
    pub content: String,
    /// Ask the filesystem to mark the file executable after writing.
    pub executable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryInstruction {
    pub path: RelativePath,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_structure_builds_in_order() {
        let plan = ProjectStructure::new("demo")
            .with_directory("src")
            .with_file("src/main.rs", "fn main() {}\n".into())
            .with_executable("run.sh", "#!/bin/sh\n".into());

        assert_eq!(plan.operation_count(), 3);
        assert_eq!(plan.files().count(), 2);
        assert_eq!(plan.directories().count(), 1);
        assert_eq!(
            plan.paths(),
            vec![
                PathBuf::from("demo/src"),
                PathBuf::from("demo/src/main.rs"),
                PathBuf::from("demo/run.sh"),
            ]
        );
        assert!(plan.files().any(|f| f.executable));
    }

    #[test]
    fn project_structure_validates_duplicates() {
        let plan = ProjectStructure::new("demo")
            .with_file("main.c", String::new())
            .with_file("main.c", String::new());

        assert!(matches!(
            plan.validate(),
            Err(DomainError::DuplicatePath { .. })
        ));
    }

    #[test]
    fn project_structure_validates_empty() {
        assert!(ProjectStructure::new("demo").validate().is_err());
    }
}
