//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "readmegen",
    bin_name = "readmegen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Interactive README.md generator",
    long_about = "readmegen asks a short series of questions about your project \
                  and writes the answers out as a README.md.",
    after_help = "EXAMPLES:\n\
        \x20 readmegen\n\
        \x20 readmegen generate --save-answers answers.json\n\
        \x20 readmegen generate --answers answers.json --dry-run\n\
        \x20 readmegen completions bash > /usr/share/bash-completion/completions/readmegen",
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute; `generate` when omitted.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// The command to run, defaulting to an interactive `generate`.
    pub fn resolved_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or_else(|| Commands::Generate(GenerateArgs::default()))
    }
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Ask the questions and write README.md.
    #[command(
        visible_alias = "g",
        about = "Generate a README (default)",
        after_help = "EXAMPLES:\n\
            \x20 readmegen generate\n\
            \x20 readmegen generate --answers answers.json\n\
            \x20 readmegen generate --dry-run > README.md"
    )]
    Generate(GenerateArgs),

    /// Initialise a readmegen configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 readmegen init\n\
            \x20 readmegen init --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 readmegen completions bash > ~/.local/share/bash-completion/completions/readmegen\n\
            \x20 readmegen completions zsh  > ~/.zfunc/_readmegen\n\
            \x20 readmegen completions fish > ~/.config/fish/completions/readmegen.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the readmegen configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 readmegen config get defaults.output_root\n\
            \x20 readmegen config list\n\
            \x20 readmegen config path"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `readmegen generate`.
#[derive(Debug, Clone, Default, Args)]
pub struct GenerateArgs {
    /// Replay answers from a JSON file instead of prompting.
    #[arg(
        long = "answers",
        value_name = "FILE",
        help = "Read answers from a JSON file instead of prompting"
    )]
    pub answers: Option<PathBuf>,

    /// Save the collected answers for a later `--answers` run.
    #[arg(
        long = "save-answers",
        value_name = "FILE",
        help = "Save the collected answers as JSON"
    )]
    pub save_answers: Option<PathBuf>,

    /// Print the README instead of writing it.
    #[arg(long = "dry-run", help = "Print the README to stdout without writing it")]
    pub dry_run: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `readmegen init`.
#[derive(Debug, Clone, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `readmegen completions`.
#[derive(Debug, Clone, Args)]
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

/// Subcommands for `readmegen config`.
#[derive(Debug, Clone, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.output_root`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
