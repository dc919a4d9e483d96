//! Shell completion generation command.
//!
//! This module provides `--completions`, which generates shell completion
//! scripts for bash, zsh, fish, PowerShell and elvish.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use crate::BIN_NAME;
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io;

/// Generate shell completion scripts
pub struct CompletionsCommand {
    /// Shell to generate completions for
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        if !global.quiet {
            print_instructions(self.shell);
        }

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());

        Ok(())
    }
}

/// Tell the user where to put the script, on stderr so stdout stays clean.
fn print_instructions(shell: Shell) {
    eprintln!("# Generating {shell} completion script");
    eprintln!("# Run the following command to enable completions:");

    match shell {
        Shell::Bash => {
            eprintln!("#   lsi --completions bash > ~/.local/share/bash-completion/completions/lsi");
            eprintln!("# Or source it directly in ~/.bashrc:");
            eprintln!("#   eval \"$(lsi --completions bash)\"");
        }
        Shell::Zsh => {
            eprintln!("#   lsi --completions zsh > ~/.zsh/completions/_lsi");
            eprintln!("# Make sure ~/.zsh/completions is in your $fpath");
        }
        Shell::Fish => {
            eprintln!("#   lsi --completions fish > ~/.config/fish/completions/lsi.fish");
            eprintln!("# Or add to config.fish:");
            eprintln!("#   lsi --completions fish | source");
        }
        Shell::PowerShell => {
            eprintln!("#   lsi --completions powershell > $PROFILE");
            eprintln!("# Or run:");
            eprintln!("#   lsi --completions powershell | Out-String | Invoke-Expression");
        }
        _ => {}
    }

    eprintln!();
}
