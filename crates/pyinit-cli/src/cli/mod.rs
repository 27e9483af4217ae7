//! Argument grammar of the `pyinit` binary (clap derive).
//!
//! Flag names, aliases and help text live here; handlers in `commands/`
//! receive the parsed structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use pyinit_core::domain::License;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

/// `pyinit [GLOBAL FLAGS] <COMMAND>`
#[derive(Debug, Parser)]
#[command(
    name    = "pyinit",
    bin_name = "pyinit",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Initialize a new Python project",
    long_about = "pyinit creates a ready-to-use Python project: README, LICENSE, \
                  Makefile, tests, CI workflow, a Poetry manifest, and optionally \
                  a virtual environment and a Git repository.",
    after_help = "EXAMPLES:\n\
        \x20 pyinit init my_project\n\
        \x20 pyinit init my_project --author \"Jane Doe\" --email jane@example.com --license MIT --venv --git --ci\n\
        \x20 pyinit templates\n\
        \x20 pyinit completions bash > /usr/share/bash-completion/completions/pyinit",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create and bootstrap a new Python project.
    #[command(
        visible_alias = "new",
        about = "Initialize a new Python project",
        after_help = "EXAMPLES:\n\
            \x20 pyinit init my_project\n\
            \x20 pyinit init my_project --venv --git --ci\n\
            \x20 pyinit init my_project --no-package-init --dry-run"
    )]
    Init(InitArgs),

    /// List the templates a new project is rendered from.
    #[command(
        visible_alias = "ls",
        about = "List project templates",
        after_help = "EXAMPLES:\n\
            \x20 pyinit templates\n\
            \x20 pyinit templates --format json"
    )]
    Templates(TemplatesArgs),

    /// Print a completion script for a shell.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 pyinit completions bash > ~/.local/share/bash-completion/completions/pyinit\n\
            \x20 pyinit completions zsh  > ~/.zfunc/_pyinit\n\
            \x20 pyinit completions fish > ~/.config/fish/completions/pyinit.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the pyinit configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 pyinit config show\n\
            \x20 pyinit config path\n\
            \x20 pyinit config init --force"
    )]
    Config(ConfigCommands),
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `pyinit init`.
///
/// Metadata options left unset fall back to the `[defaults]` section of the
/// configuration.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Name of the project directory (and Python package) to create.
    #[arg(value_name = "NAME", help = "Name of the project")]
    pub name: String,

    #[arg(long, value_name = "TEXT", help = "Project description")]
    pub description: Option<String>,

    #[arg(long, value_name = "NAME", help = "Author name")]
    pub author: Option<String>,

    #[arg(long, value_name = "EMAIL", help = "Author email")]
    pub email: Option<String>,

    #[arg(
        long,
        value_name = "LICENSE",
        value_parser = parse_license,
        help = "License type [possible values: MIT, Apache-2.0, GPL-3.0]"
    )]
    pub license: Option<License>,

    #[arg(long, help = "Create a virtual environment and install requirements")]
    pub venv: bool,

    #[arg(long, help = "Initialize a Git repository with an initial commit")]
    pub git: bool,

    #[arg(long, help = "Set up GitHub Actions workflow and Dependabot")]
    pub ci: bool,

    #[arg(long, help = "Run poetry init interactively")]
    pub interactive: bool,

    #[arg(
        long = "no-package-init",
        conflicts_with = "interactive",
        help = "Skip poetry init (no pyproject.toml is created)"
    )]
    pub no_package_init: bool,

    /// Parent directory for the new project.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        default_value = ".",
        help = "Directory to create the project in"
    )]
    pub output: PathBuf,

    #[arg(long = "dry-run", help = "List the files that would be written, then stop")]
    pub dry_run: bool,
}

fn parse_license(s: &str) -> Result<License, String> {
    s.parse::<License>().map_err(|e| e.to_string())
}

// ── templates ─────────────────────────────────────────────────────────────────

/// Arguments for `pyinit templates`.
#[derive(Debug, Args)]
pub struct TemplatesArgs {
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `templates` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Name, output path and availability.
    Table,
    /// Template names only.
    List,
    /// `TemplateInfo` objects as a JSON array.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `pyinit completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    #[arg(value_enum, help = "Shell to print a completion script for")]
    pub shell: Shell,
}

/// Shells `clap_complete` can target.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `pyinit config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration (defaults, file, and environment merged).
    Show,
    /// Print the path of the configuration file.
    Path,
    /// Write a configuration file with the built-in defaults.
    Init {
        /// Overwrite an existing file.
        #[arg(short = 'f', long = "force")]
        force: bool,
    },
}

// ── tests ─────────────────────────────────────────────────────────────────────
