//! Template content and rendering.
//!
//! A generator describes each file as [`TemplateContent`]: either a literal
//! copied byte-for-byte, or a parameterized string in which the single
//! placeholder `{{PROJECT_NAME}}` is replaced by the project name exactly as
//! the user typed it. There are no other variables, conditionals or filters.

/// Placeholder substituted in [`TemplateContent::Parameterized`] sources.
pub const PROJECT_NAME_PLACEHOLDER: &str = "{{PROJECT_NAME}}";

/// Source text of one generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateContent {
    /// Content used exactly as provided.
    Literal(&'static str),
    /// Content with `{{PROJECT_NAME}}` placeholders.
    Parameterized(&'static str),
}

impl TemplateContent {
    /// Produce the final file content.
    pub fn render(&self, ctx: &RenderContext) -> String {
        match self {
            Self::Literal(source) => (*source).to_string(),
            Self::Parameterized(source) => ctx.render(source),
        }
    }
}

/// Context for template rendering.
///
/// Holds the project name verbatim; no case conversion is applied because
/// manifests receive exactly the directory name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    project_name: String,
}

impl RenderContext {
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
        }
    }

    /// Replace every `{{PROJECT_NAME}}` in `template`.
    ///
    /// Unknown placeholders are left as-is.
    pub fn render(&self, template: &str) -> String {
        template.replace(PROJECT_NAME_PLACEHOLDER, &self.project_name)
    }
}
