//! Per-language project generators.
//!
//! Every supported language is described once, as a [`StaticTemplate`]: an
//! ordered list of directories and files under the project root. A generator
//! is a pure function from project name to [`ProjectStructure`]; applying the
//! plan is the scaffold service's job.
//!
//! | Module        | Languages                 |
//! |---------------|---------------------------|
//! | [`native`]    | C, C++, Go, Rust          |
//! | [`managed`]   | Java, Haskell             |
//! | [`scripting`] | Python, Shell, Lua        |
//! | [`web`]       | Node.js, TypeScript, web  |

use std::fmt;

use tracing::trace;

use crate::domain::{
    entities::{ProjectStructure, RenderContext, TemplateContent},
    value_objects::Language,
};

pub mod managed;
pub mod native;
pub mod scripting;
pub mod web;

/// Produces the scaffold plan for one language.
pub trait Generator: Send + Sync + fmt::Debug {
    /// The language this generator produces.
    fn language(&self) -> Language;

    /// Build the ordered plan for a project named `project_name`.
    ///
    /// The name is not validated here; see `ScaffoldService`.
    fn generate(&self, project_name: &str) -> ProjectStructure;
}

/// One entry of a [`StaticTemplate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateNode {
    Directory(&'static str),
    File {
        path: &'static str,
        content: TemplateContent,
        executable: bool,
    },
}

impl TemplateNode {
    pub const fn dir(path: &'static str) -> Self {
        Self::Directory(path)
    }

    pub const fn literal(path: &'static str, content: &'static str) -> Self {
        Self::File {
            path,
            content: TemplateContent::Literal(content),
            executable: false,
        }
    }

    pub const fn parameterized(path: &'static str, content: &'static str) -> Self {
        Self::File {
            path,
            content: TemplateContent::Parameterized(content),
            executable: false,
        }
    }

    pub const fn script(path: &'static str, content: &'static str) -> Self {
        Self::File {
            path,
            content: TemplateContent::Literal(content),
            executable: true,
        }
    }
}

/// Generator backed by compile-time template data.
#[derive(Debug, Clone, Copy)]
pub struct StaticTemplate {
    language: Language,
    nodes: &'static [TemplateNode],
}

impl StaticTemplate {
    pub const fn new(language: Language, nodes: &'static [TemplateNode]) -> Self {
        Self { language, nodes }
    }
}

impl Generator for StaticTemplate {
    fn language(&self) -> Language {
        self.language
    }

    fn generate(&self, project_name: &str) -> ProjectStructure {
        let ctx = RenderContext::new(project_name);
        let mut structure = ProjectStructure::new(project_name);

        for node in self.nodes {
            match *node {
                TemplateNode::Directory(path) => structure.add_directory(path),
                TemplateNode::File {
                    path,
                    content,
                    executable,
                } => {
                    let rendered = content.render(&ctx);
                    if executable {
                        structure.add_executable(path, rendered);
                    } else {
                        structure.add_file(path, rendered);
                    }
                }
            }
        }

        trace!(
            language = %self.language,
            operations = structure.operation_count(),
            "generated scaffold plan"
        );
        structure
    }
}

/// Generators for every supported language, in menu order.
pub fn builtin() -> Vec<Box<dyn Generator>> {
    vec![
        Box::new(native::C),
        Box::new(native::CPP),
        Box::new(scripting::PYTHON),
        Box::new(native::GO),
        Box::new(native::RUST),
        Box::new(managed::JAVA),
        Box::new(web::NODE),
        Box::new(web::TYPESCRIPT),
        Box::new(scripting::SHELL),
        Box::new(web::WEB),
        Box::new(scripting::LUA),
        Box::new(managed::HASKELL),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_follows_language_order() {
        let languages: Vec<Language> = builtin().iter().map(|g| g.language()).collect();
        assert_eq!(languages, Language::ALL.to_vec());
    }

    #[test]
    fn every_generator_produces_a_valid_plan() {
        for generator in builtin() {
            let plan = generator.generate("demo");
            assert!(
                plan.validate().is_ok(),
                "{} produced an invalid plan",
                generator.language()
            );
        }
    }

    #[test]
    fn every_generator_greets_its_language() {
        for generator in builtin() {
            let language = generator.language();
            let greeting = format!("Hello, {} world!", language.hello_name());
            let plan = generator.generate("demo");
            assert!(
                plan.files().any(|f| f.content.contains(&greeting)),
                "{language} has no file containing {greeting:?}"
            );
        }
    }

    #[test]
    fn generation_is_deterministic() {
        for generator in builtin() {
            assert_eq!(generator.generate("demo"), generator.generate("demo"));
        }
    }

    #[test]
    fn literal_templates_ignore_the_project_name() {
        let plan = native::C.generate("other-name");
        assert!(plan.files().all(|f| !f.content.contains("other-name")));
    }
}
