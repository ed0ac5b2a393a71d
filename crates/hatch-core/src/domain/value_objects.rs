//! Domain value objects: Language and ColorHint.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! Registry order (and therefore menu order and language ids) lives in
//! `registry.rs`; this file only defines the types, their string
//! representations, and their `FromStr` parsers.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str`, `display_name`, `hello_name` and `FromStr` arms
//! 3. Add a generator in `generators/` and register it in `registry.rs`

use crate::domain::error::DomainError;
use std::fmt;
use std::str::FromStr;

// ── Language ─────────────────────────────────────────────────────────────────

/// A supported target language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    C,
    Cpp,
    Python,
    Go,
    Rust,
    Java,
    Node,
    TypeScript,
    Shell,
    Web,
    Lua,
    Haskell,
}

impl Language {
    /// Every language, in menu order.
    pub const ALL: [Language; 12] = [
        Self::C,
        Self::Cpp,
        Self::Python,
        Self::Go,
        Self::Rust,
        Self::Java,
        Self::Node,
        Self::TypeScript,
        Self::Shell,
        Self::Web,
        Self::Lua,
        Self::Haskell,
    ];

    /// Short machine-friendly slug (`--lang` value).
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::C => "c",
            Self::Cpp => "cpp",
            Self::Python => "python",
            Self::Go => "go",
            Self::Rust => "rust",
            Self::Java => "java",
            Self::Node => "node",
            Self::TypeScript => "typescript",
            Self::Shell => "shell",
            Self::Web => "web",
            Self::Lua => "lua",
            Self::Haskell => "haskell",
        }
    }

    /// Label shown in the selection menu.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::C => "C",
            Self::Cpp => "C++",
            Self::Python => "Python",
            Self::Go => "Go",
            Self::Rust => "Rust",
            Self::Java => "Java",
            Self::Node => "JavaScript (Node.js)",
            Self::TypeScript => "TypeScript",
            Self::Shell => "Shell",
            Self::Web => "HTML/CSS/JS (web)",
            Self::Lua => "Lua",
            Self::Haskell => "Haskell",
        }
    }

    /// The word used in the generated `Hello, <name> world!` greeting.
    pub const fn hello_name(&self) -> &'static str {
        match self {
            Self::Node => "Node.js",
            Self::Shell => "shell",
            Self::Web => "web",
            other => other.display_name(),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "c" => Ok(Self::C),
            "cpp" | "c++" | "cxx" => Ok(Self::Cpp),
            "python" | "py" => Ok(Self::Python),
            "go" | "golang" => Ok(Self::Go),
            "rust" | "rs" => Ok(Self::Rust),
            "java" => Ok(Self::Java),
            "node" | "nodejs" | "javascript" | "js" => Ok(Self::Node),
            "typescript" | "ts" => Ok(Self::TypeScript),
            "shell" | "sh" | "bash" => Ok(Self::Shell),
            "web" | "html" => Ok(Self::Web),
            "lua" => Ok(Self::Lua),
            "haskell" | "hs" => Ok(Self::Haskell),
            other => Err(DomainError::UnknownLanguageName(other.to_string())),
        }
    }
}

// ── ColorHint ────────────────────────────────────────────────────────────────

/// Foreground colour a renderer should use for a menu entry.
///
/// Renderers that cannot draw colour ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorHint {
    Red,
    Yellow,
    Green,
    Cyan,
    Blue,
    Magenta,
}

impl ColorHint {
    /// The rainbow the menu cycles through.
    pub const CYCLE: [ColorHint; 6] = [
        Self::Red,
        Self::Yellow,
        Self::Green,
        Self::Cyan,
        Self::Blue,
        Self::Magenta,
    ];

    /// Colour for the n-th menu entry; wraps around.
    pub const fn nth(index: usize) -> Self {
        Self::CYCLE[index % Self::CYCLE.len()]
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Cyan => "cyan",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
        }
    }
}

impl fmt::Display for ColorHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_parses_slugs_and_aliases() {
        assert_eq!(Language::from_str("go").unwrap(), Language::Go);
        assert_eq!(Language::from_str("GoLang").unwrap(), Language::Go);
        assert_eq!(Language::from_str("c++").unwrap(), Language::Cpp);
        assert_eq!(Language::from_str("js").unwrap(), Language::Node);
        assert!(Language::from_str("cobol").is_err());
    }

    #[test]
    fn every_slug_round_trips_through_from_str() {
        for lang in Language::ALL {
            assert_eq!(Language::from_str(lang.as_str()).unwrap(), lang);
        }
    }

    #[test]
    fn hello_names_follow_the_greeting_convention() {
        assert_eq!(Language::Go.hello_name(), "Go");
        assert_eq!(Language::Node.hello_name(), "Node.js");
        assert_eq!(Language::Shell.hello_name(), "shell");
        assert_eq!(Language::Web.hello_name(), "web");
    }

    #[test]
    fn color_cycle_wraps() {
        assert_eq!(ColorHint::nth(0), ColorHint::Red);
        assert_eq!(ColorHint::nth(5), ColorHint::Magenta);
        assert_eq!(ColorHint::nth(6), ColorHint::Red);
        assert_eq!(ColorHint::nth(11), ColorHint::Magenta);
    }
}
