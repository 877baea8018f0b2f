//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "sprout",
    bin_name = "sprout",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Backend project scaffolding with styled console output",
    long_about = "Sprout creates a backend project directory with a placeholder \
                  server file, and prints styled status lines as it goes.",
    after_help = "EXAMPLES:\n\
        \x20 sprout create:backend my-api\n\
        \x20 sprout say success \"Build completed!\"\n\
        \x20 sprout say blue.dim \"Server is running on port 3000...\"\n\
        \x20 sprout styles",
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
    /// Create a new backend project.
    #[command(
        name = "create:backend",
        visible_aliases = ["create-backend", "backend"],
        about = "Create a backend project",
        after_help = "EXAMPLES:\n\
            \x20 sprout create:backend            # ./My-app\n\
            \x20 sprout create:backend my-api\n\
            \x20 sprout create:backend my-api --dir ../services"
    )]
    CreateBackend(CreateBackendArgs),

    /// Print one styled line.
    #[command(
        about = "Print text in a style",
        after_help = "STYLES:\n\
            \x20 info, success, error, response, warn, debug\n\
            \x20 <color>.<intensity>, e.g. red.intense, cyan.dim\n\
            \n\
            Unknown styles print in white.normal."
    )]
    Say(SayArgs),

    /// Show every style.
    #[command(about = "Preview all styles")]
    Styles(StylesArgs),

    /// Initialise a Sprout configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 sprout init           # default location\n\
            \x20 sprout init --local   # .sprout.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 sprout completions bash > ~/.local/share/bash-completion/completions/sprout\n\
            \x20 sprout completions zsh  > ~/.zfunc/_sprout\n\
            \x20 sprout completions fish > ~/.config/fish/completions/sprout.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Sprout configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 sprout config get defaults.project_name\n\
            \x20 sprout config list"
    )]
    Config(ConfigCommands),
}

// ── create:backend ────────────────────────────────────────────────────────────

/// Arguments for `sprout create:backend`.
#[derive(Debug, Args)]
pub struct CreateBackendArgs {
    /// Project directory name.  Defaults to `defaults.project_name`.
    #[arg(value_name = "NAME", help = "Project name")]
    pub name: Option<String>,

    /// Directory to create the project in.
    #[arg(
        short = 'd',
        long = "dir",
        value_name = "DIR",
        help = "Parent directory (default: current directory)"
    )]
    pub dir: Option<PathBuf>,
}

// ── say ───────────────────────────────────────────────────────────────────────

/// Arguments for `sprout say`.
#[derive(Debug, Args)]
pub struct SayArgs {
    /// Style token.
    #[arg(value_name = "STYLE", help = "Level name or color.intensity")]
    pub style: String,

    /// Text to print.
    #[arg(value_name = "TEXT", help = "Text to print")]
    pub text: Option<String>,
}

// ── styles ────────────────────────────────────────────────────────────────────

/// Arguments for `sprout styles`.
#[derive(Debug, Args)]
pub struct StylesArgs {
    /// Skip the 24 palette entries.
    #[arg(long = "levels", help = "Only show the semantic levels")]
    pub levels: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `sprout init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.sprout.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `sprout completions`.
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

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `sprout config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.project_name`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
