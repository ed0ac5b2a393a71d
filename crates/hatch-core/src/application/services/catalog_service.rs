//! Catalog Service - read-only queries over the language registry.
//!
//! Separated from ScaffoldService: listing needs no filesystem.

use serde::Serialize;

use crate::{
    domain::{DomainError, Language, LanguageRegistry, LanguageSpec},
    error::HatchResult,
};

/// DTO describing one menu entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageInfo {
    pub id: usize,
    pub slug: &'static str,
    pub name: &'static str,
    pub color: &'static str,
    /// Paths the generator produces, relative to the project root.
    pub files: Vec<String>,
}

impl LanguageInfo {
    fn from_spec(spec: &LanguageSpec) -> Self {
        // The plan root is irrelevant here; any valid name will do.
        let plan = spec.generator().generate("_");
        Self {
            id: spec.id(),
            slug: spec.language().as_str(),
            name: spec.display_name(),
            color: spec.color_hint().as_str(),
            files: plan
                .operations()
                .iter()
                .map(|op| op.path().to_string())
                .collect(),
        }
    }
}

pub struct CatalogService<'r> {
    registry: &'r LanguageRegistry,
}

impl<'r> CatalogService<'r> {
    pub fn new(registry: &'r LanguageRegistry) -> Self {
        Self { registry }
    }

    /// All entries in menu order.
    pub fn list(&self) -> Vec<LanguageInfo> {
        self.registry.iter().map(LanguageInfo::from_spec).collect()
    }

    /// Resolve a slug, alias or numeric id to a registry id.
    pub fn resolve(&self, query: &str) -> HatchResult<usize> {
        if let Ok(id) = query.parse::<usize>() {
            return Ok(self.registry.get(id)?.id());
        }

        let language: Language = query.parse()?;
        let spec = self
            .registry
            .find(language)
            .map_err(|_| DomainError::UnknownLanguageName(query.to_string()))?;
        Ok(spec.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HatchError;

    #[test]
    fn list_follows_menu_order() {
        let registry = LanguageRegistry::builtin();
        let infos = CatalogService::new(&registry).list();

        assert_eq!(infos.len(), 12);
        assert_eq!(infos[0].slug, "c");
        assert_eq!(infos[3].name, "Go");
        assert_eq!(infos[11].slug, "haskell");
        assert!(infos.iter().enumerate().all(|(i, info)| info.id == i));
    }

    #[test]
    fn list_reports_generated_files() {
        let registry = LanguageRegistry::builtin();
        let infos = CatalogService::new(&registry).list();

        assert_eq!(infos[3].files, vec!["main.go", "go.mod", ".gitignore"]);
        assert_eq!(infos[2].files.last().map(String::as_str), Some("venv"));
    }

    #[test]
    fn resolve_accepts_slugs_and_ids() {
        let registry = LanguageRegistry::builtin();
        let catalog = CatalogService::new(&registry);

        assert_eq!(catalog.resolve("go").unwrap(), 3);
        assert_eq!(catalog.resolve("3").unwrap(), 3);
        assert_eq!(catalog.resolve("haskell").unwrap(), 11);
    }

    #[test]
    fn resolve_rejects_unknown() {
        let registry = LanguageRegistry::builtin();
        let catalog = CatalogService::new(&registry);

        assert!(matches!(
            catalog.resolve("cobol"),
            Err(HatchError::Domain(DomainError::UnknownLanguageName(_)))
        ));
        assert!(matches!(
            catalog.resolve("42"),
            Err(HatchError::Domain(DomainError::UnknownLanguage { index: 42, .. }))
        ));
    }
}
