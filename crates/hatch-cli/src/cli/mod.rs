//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "hatch",
    bin_name = "hatch",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Pick a language, name a project, get a hello-world skeleton",
    long_about = "hatch shows a menu of twelve languages. Move with the arrow \
                  keys (or j/k), press Enter, type a project name and a \
                  ready-to-run hello-world project appears in ./<name>.",
    after_help = "EXAMPLES:\n\
        \x20 hatch                      # interactive menu\n\
        \x20 hatch new demo --lang go   # no menu\n\
        \x20 hatch list --format json\n\
        \x20 hatch completions bash > ~/.local/share/bash-completion/completions/hatch",
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute. Defaults to the interactive menu.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open the interactive menu (the default).
    #[command(about = "Pick a language from the interactive menu")]
    Pick,

    /// Scaffold without the menu.
    #[command(
        visible_alias = "n",
        about = "Create a new project",
        after_help = "EXAMPLES:\n\
            \x20 hatch new demo --lang go\n\
            \x20 hatch new \"my project\" --lang python\n\
            \x20 hatch new api --lang 4 --dry-run     # by menu id"
    )]
    New(NewArgs),

    /// List the menu entries.
    #[command(
        visible_alias = "ls",
        about = "List available languages",
        after_help = "EXAMPLES:\n\
            \x20 hatch list\n\
            \x20 hatch list --format plain\n\
            \x20 hatch list --format json"
    )]
    List(ListArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 hatch completions bash > ~/.local/share/bash-completion/completions/hatch\n\
            \x20 hatch completions zsh  > ~/.zfunc/_hatch\n\
            \x20 hatch completions fish > ~/.config/fish/completions/hatch.fish"
    )]
    Completions(CompletionsArgs),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `hatch new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Project directory name. Used verbatim; spaces are allowed.
    #[arg(value_name = "NAME", help = "Project name")]
    pub name: String,

    /// Language slug, alias or menu id.
    #[arg(
        short = 'l',
        long = "lang",
        value_name = "LANGUAGE",
        help = "Language (slug such as `go`, alias such as `ts`, or menu id)"
    )]
    pub language: String,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `hatch list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One slug per line.
    Plain,
    /// JSON array.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `hatch completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
