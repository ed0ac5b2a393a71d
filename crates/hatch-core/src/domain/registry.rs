//! Language registry.
//!
//! The registry is built once by [`LanguageRegistry::builtin`] and then
//! passed by reference to the selector and the scaffold service. It is never
//! mutated and holds no global state, so sharing it across threads is safe.
//!
//! # Invariants
//!
//! - `id` values are unique and contiguous from 0 (the id *is* the index).
//! - Order is menu order.

use crate::domain::{
    error::DomainError,
    generators::{self, Generator},
    value_objects::{ColorHint, Language},
};

/// One entry of the registry.
#[derive(Debug)]
pub struct LanguageSpec {
    id: usize,
    language: Language,
    color_hint: ColorHint,
    generator: Box<dyn Generator>,
}

impl LanguageSpec {
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn display_name(&self) -> &'static str {
        self.language.display_name()
    }

    pub fn color_hint(&self) -> ColorHint {
        self.color_hint
    }

    pub fn generator(&self) -> &dyn Generator {
        self.generator.as_ref()
    }

    pub fn menu_option(&self) -> MenuOption {
        MenuOption {
            display_name: self.display_name(),
            color_hint: self.color_hint,
        }
    }
}

/// What a renderer needs to draw one menu row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuOption {
    pub display_name: &'static str,
    pub color_hint: ColorHint,
}

/// Ordered, immutable set of supported languages.
#[derive(Debug)]
pub struct LanguageRegistry {
    specs: Vec<LanguageSpec>,
}

impl LanguageRegistry {
    /// Registry of every built-in language, in menu order.
    pub fn builtin() -> Self {
        Self::from_generators(generators::builtin())
    }

    /// Build a registry; ids and colours are assigned by position.
    pub fn from_generators(generators: Vec<Box<dyn Generator>>) -> Self {
        let specs = generators
            .into_iter()
            .enumerate()
            .map(|(id, generator)| LanguageSpec {
                id,
                language: generator.language(),
                color_hint: ColorHint::nth(id),
                generator,
            })
            .collect();
        Self { specs }
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Look up a language by id.
    pub fn get(&self, id: usize) -> Result<&LanguageSpec, DomainError> {
        self.specs.get(id).ok_or(DomainError::UnknownLanguage {
            index: id,
            available: self.specs.len(),
        })
    }

    /// Look up a language by variant.
    pub fn find(&self, language: Language) -> Result<&LanguageSpec, DomainError> {
        self.specs
            .iter()
            .find(|spec| spec.language == language)
            .ok_or_else(|| DomainError::UnknownLanguageName(language.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &LanguageSpec> {
        self.specs.iter()
    }

    pub fn menu_options(&self) -> Vec<MenuOption> {
        self.specs.iter().map(LanguageSpec::menu_option).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_twelve_contiguous_ids() {
        let registry = LanguageRegistry::builtin();
        assert_eq!(registry.len(), 12);
        for (expected, spec) in registry.iter().enumerate() {
            assert_eq!(spec.id(), expected);
        }
    }

    #[test]
    fn go_is_id_three() {
        let registry = LanguageRegistry::builtin();
        let spec = registry.get(3).unwrap();
        assert_eq!(spec.language(), Language::Go);
        assert_eq!(spec.display_name(), "Go");
        assert_eq!(spec.color_hint(), ColorHint::Cyan);
    }

    #[test]
    fn out_of_range_id_is_unknown_language() {
        let registry = LanguageRegistry::builtin();
        assert_eq!(
            registry.get(12).unwrap_err(),
            DomainError::UnknownLanguage {
                index: 12,
                available: 12
            }
        );
    }

    #[test]
    fn find_by_language_matches_id() {
        let registry = LanguageRegistry::builtin();
        assert_eq!(registry.find(Language::Haskell).unwrap().id(), 11);
    }

    #[test]
    fn menu_options_follow_registry_order() {
        let registry = LanguageRegistry::builtin();
        let options = registry.menu_options();
        assert_eq!(options.len(), 12);
        assert_eq!(options[0].display_name, "C");
        assert_eq!(options[6].display_name, "JavaScript (Node.js)");
        assert_eq!(options[9].display_name, "HTML/CSS/JS (web)");
    }

    #[test]
    fn registry_can_be_shared_between_threads() {
        fn assert_sync<T: Send + Sync>() {}
        assert_sync::<LanguageRegistry>();
    }
}
