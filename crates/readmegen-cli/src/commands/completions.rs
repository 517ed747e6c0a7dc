//! Shell completion generation.

use clap::CommandFactory;
use clap_complete::{Generator, generate, shells};

use crate::cli::{Cli, CompletionsArgs, Shell};
use crate::error::CliResult;

const BIN_NAME: &str = "readmegen";

pub fn execute(args: CompletionsArgs) -> CliResult<()> {
    match args.shell {
        Shell::Bash => print(shells::Bash),
        Shell::Zsh => print(shells::Zsh),
        Shell::Fish => print(shells::Fish),
        Shell::PowerShell => print(shells::PowerShell),
        Shell::Elvish => print(shells::Elvish),
    }
    Ok(())
}

fn print<G: Generator>(shell: G) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, BIN_NAME, &mut std::io::stdout());
}
