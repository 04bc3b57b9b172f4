//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "gardenfork",
    bin_name = "gardenfork",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f331} Fork a garden into a fresh project workspace",
    long_about = "Gardenfork copies the curated core of a garden source tree \
                  into a new project directory, lays a template starter on \
                  top, and records where the fork came from.",
    after_help = "EXAMPLES:\n\
        \x20 gardenfork fork my-recipes --template recipe\n\
        \x20 gardenfork fork voyage --template sailing --source ~/dev/garden\n\
        \x20 gardenfork fork fresh --template nodepad --remote --branch main\n\
        \x20 gardenfork list ~/projects\n\
        \x20 gardenfork completions bash > /usr/share/bash-completion/completions/gardenfork",
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
    /// Fork a garden into a new project workspace.
    #[command(
        visible_alias = "f",
        about = "Fork a new project from a garden source",
        after_help = "EXAMPLES:\n\
            \x20 gardenfork fork my-recipes --template recipe\n\
            \x20 gardenfork fork budget-2026 --template budget --dest ~/projects\n\
            \x20 gardenfork fork fresh --template nodepad --remote"
    )]
    Fork(ForkArgs),

    /// List the available project templates.
    #[command(
        visible_alias = "t",
        about = "List available templates",
        after_help = "EXAMPLES:\n\
            \x20 gardenfork templates\n\
            \x20 gardenfork templates --format json"
    )]
    Templates(TemplatesArgs),

    /// List forked projects under a directory.
    #[command(
        visible_alias = "ls",
        about = "List forked projects",
        after_help = "EXAMPLES:\n\
            \x20 gardenfork list\n\
            \x20 gardenfork list ~/projects --format csv"
    )]
    List(ListArgs),

    /// Show the fork record of one project.
    #[command(
        about = "Show a project's fork record",
        after_help = "EXAMPLES:\n\
            \x20 gardenfork status\n\
            \x20 gardenfork status ~/projects/my-recipes"
    )]
    Status(StatusArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 gardenfork completions bash > ~/.local/share/bash-completion/completions/gardenfork\n\
            \x20 gardenfork completions zsh  > ~/.zfunc/_gardenfork\n\
            \x20 gardenfork completions fish > ~/.config/fish/completions/gardenfork.fish"
    )]
    Completions(CompletionsArgs),
}

// ── fork ──────────────────────────────────────────────────────────────────────

/// Arguments for `gardenfork fork`.
#[derive(Debug, Args)]
pub struct ForkArgs {
    /// New project name.  Becomes the directory name under `--dest`.
    #[arg(value_name = "NAME", help = "Project name")]
    pub name: String,

    /// Template to lay over the copied core.
    #[arg(
        short = 't',
        long = "template",
        value_name = "ID",
        help = "Template ID (see 'gardenfork templates')"
    )]
    pub template: String,

    /// Explicit garden source directory, bypassing candidate probing.
    #[arg(
        short = 's',
        long = "source",
        value_name = "DIR",
        conflicts_with = "remote",
        help = "Garden source directory"
    )]
    pub source: Option<PathBuf>,

    /// Download the garden archive instead of using a local checkout.
    #[arg(long = "remote", help = "Download the garden from its repository")]
    pub remote: bool,

    /// Branch to download when `--remote` is given.
    #[arg(
        short = 'b',
        long = "branch",
        value_name = "BRANCH",
        requires = "remote",
        help = "Branch of the remote repository"
    )]
    pub branch: Option<String>,

    /// Directory the project directory is created under.
    #[arg(
        short = 'd',
        long = "dest",
        value_name = "DIR",
        default_value = ".",
        help = "Destination directory (default: current directory)"
    )]
    pub dest: PathBuf,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and fork immediately"
    )]
    pub yes: bool,

    /// Overwrite an existing project directory (destructive).
    #[arg(long = "force", help = "Overwrite existing project directory")]
    pub force: bool,

    /// Preview what would be copied without writing any files.
    #[arg(long = "dry-run", help = "Show what would be copied without copying")]
    pub dry_run: bool,

    /// Skip git init and the initial commit.
    #[arg(long = "no-git", help = "Skip version-control initialisation")]
    pub no_git: bool,
}

// ── templates ─────────────────────────────────────────────────────────────────

/// Arguments for `gardenfork templates`.
#[derive(Debug, Args)]
pub struct TemplatesArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `gardenfork list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Directory to scan for forked projects.
    #[arg(value_name = "DIR", default_value = ".", help = "Directory to scan")]
    pub dir: PathBuf,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the listing commands.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── status ────────────────────────────────────────────────────────────────────

/// Arguments for `gardenfork status`.
#[derive(Debug, Args)]
pub struct StatusArgs {
    /// Project directory to inspect.
    #[arg(value_name = "DIR", default_value = ".", help = "Project directory")]
    pub dir: PathBuf,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `gardenfork completions`.
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
