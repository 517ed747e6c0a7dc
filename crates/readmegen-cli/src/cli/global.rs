//! Flags shared by every readmegen subcommand.
//!
//! Flattened into [`super::Cli`] with `global = true`, so `readmegen g -v`
//! and `readmegen -v g` mean the same thing.

use std::path::PathBuf;

use clap::{ArgAction, Args, ValueEnum};

#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Log verbosity on stderr; repeat for more detail.
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        global = true,
        help = "Log more on stderr (-v, -vv, -vvv)",
        long_help = "Log more on stderr. Also adds the error cause chain to failures.
    (none)  - warnings and errors only
    -v      - answer count and where README.md went
    -vv     - every answer accepted or rejected by its validator
    -vvv    - every filesystem call and raw prompt answer"
    )]
    pub verbose: u8,

    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Only print errors and the --dry-run document"
    )]
    pub quiet: bool,

    /// Honours `NO_COLOR` (<https://no-color.org>).
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Plain prompts and status lines, no ANSI colours"
    )]
    pub no_color: bool,

    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Read settings from FILE, which must exist (default: `readmegen config path`)"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "How status lines are printed on stdout",
        long_help = "How status lines are printed on stdout. Prompts always use the terminal.
    auto  - human on a terminal, plain when piped (or output.format from config)
    human - coloured ✓/✗ lines
    plain - the same lines without colour
    json  - one {\"kind\", \"message\"} object per line
            (--dry-run prints the README as kind \"document\")"
    )]
    pub output_format: OutputFormat,
}

/// Rendering of the status lines written by [`crate::output::OutputManager`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Auto,
    Human,
    Plain,
    Json,
}
