//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::{fmt, path::PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "xul",
    bin_name = "xul",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Render declarative Xul markup",
    long_about = "Xul renders XML-like markup into HTML fragments and grids, \
                  resolving {{ path }} bindings against a JSON or TOML data file.",
    after_help = "EXAMPLES:\n\
        \x20 xul render report.xul --data report.toml\n\
        \x20 xul render report.xul --format json --strict\n\
        \x20 xul check report.xul\n\
        \x20 xul completions bash > /usr/share/bash-completion/completions/xul",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render a markup document.
    #[command(
        visible_alias = "r",
        about = "Render a markup document",
        after_help = "EXAMPLES:\n\
            \x20 xul render page.xul\n\
            \x20 xul render page.xul --data data.json --output page.html\n\
            \x20 cat page.xul | xul render - --format json"
    )]
    Render(RenderArgs),

    /// List the registered controls.
    #[command(
        visible_alias = "ls",
        about = "List registered tags",
        after_help = "EXAMPLES:\n\
            \x20 xul tags\n\
            \x20 xul tags --json"
    )]
    Tags(TagsArgs),

    /// Parse a document and report on it without rendering.
    #[command(
        about = "Validate a markup document",
        after_help = "EXAMPLES:\n\
            \x20 xul check page.xul\n\
            \x20 xul check page.xul --strict   # fail on unknown tags"
    )]
    Check(CheckArgs),

    /// Initialise a Xul configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 xul init                     # default location\n\
            \x20 xul --config xul.toml init   # explicit path\n\
            \x20 xul init --force             # overwrite"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 xul completions bash > ~/.local/share/bash-completion/completions/xul\n\
            \x20 xul completions zsh  > ~/.zfunc/_xul\n\
            \x20 xul completions fish > ~/.config/fish/completions/xul.fish"
    )]
    Completions(CompletionsArgs),
}

// ── render ────────────────────────────────────────────────────────────────────

/// Arguments for `xul render`.
#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Markup file to render, or `-` for stdin.
    #[arg(value_name = "FILE", help = "Markup file (use - for stdin)")]
    pub file: PathBuf,

    /// Data file providing binding values (`.json` or `.toml`).
    #[arg(
        short = 'd',
        long = "data",
        value_name = "FILE",
        help = "Data file for {{ path }} bindings (.json or .toml)"
    )]
    pub data: Option<PathBuf>,

    /// Output format; falls back to the configured default.
    #[arg(
        short = 'f',
        long = "format",
        value_name = "FORMAT",
        value_enum,
        help = "Output format"
    )]
    pub format: Option<RenderFormat>,

    /// Fail on tags without a registered control.
    #[arg(long = "strict", help = "Reject unknown tags instead of passing them through")]
    pub strict: bool,

    /// Write the result to a file instead of stdout.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Write output to FILE instead of stdout"
    )]
    pub output: Option<PathBuf>,
}

/// What `xul render` prints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderFormat {
    /// The rendered HTML fragment.
    #[default]
    Html,
    /// `{ "html": ..., "grid": ... }`.
    Json,
}

impl fmt::Display for RenderFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Html => write!(f, "html"),
            Self::Json => write!(f, "json"),
        }
    }
}

// ── tags ──────────────────────────────────────────────────────────────────────

/// Arguments for `xul tags`.
#[derive(Debug, Args)]
pub struct TagsArgs {
    /// Print a JSON array instead of a list.
    #[arg(long = "json", help = "Output as JSON")]
    pub json: bool,
}

// ── check ─────────────────────────────────────────────────────────────────────

/// Arguments for `xul check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Markup file to check, or `-` for stdin.
    #[arg(value_name = "FILE", help = "Markup file (use - for stdin)")]
    pub file: PathBuf,

    /// Treat unknown tags as an error.
    #[arg(long = "strict", help = "Fail when the document uses unknown tags")]
    pub strict: bool,

    /// Print the report as JSON.
    #[arg(long = "json", help = "Output as JSON")]
    pub json: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `xul init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing configuration file.
    #[arg(long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `xul completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, value_name = "SHELL")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    #[value(name = "powershell")]
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn render_format_display() {
        assert_eq!(RenderFormat::Html.to_string(), "html");
        assert_eq!(RenderFormat::Json.to_string(), "json");
    }

    #[test]
    fn parse_render_command() {
        let cli = Cli::parse_from([
            "xul", "render", "page.xul", "--data", "data.toml", "-f", "json", "--strict",
        ]);
        let Commands::Render(args) = cli.command else {
            panic!("expected Render command");
        };
        assert_eq!(args.file, PathBuf::from("page.xul"));
        assert_eq!(args.data, Some(PathBuf::from("data.toml")));
        assert_eq!(args.format, Some(RenderFormat::Json));
        assert!(args.strict);
    }

    #[test]
    fn render_format_is_optional() {
        let cli = Cli::parse_from(["xul", "r", "-"]);
        let Commands::Render(args) = cli.command else {
            panic!("expected Render command");
        };
        assert_eq!(args.format, None);
        assert_eq!(args.file, PathBuf::from("-"));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["xul", "tags", "-vv", "--no-color"]);
        assert_eq!(cli.global.verbose, 2);
        assert!(cli.global.no_color);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["xul", "--quiet", "--verbose", "tags"]);
        assert!(result.is_err());
    }
}
