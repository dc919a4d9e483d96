//! Main entry point for the lsi CLI.
//!
//! `lsi` prints every element of each path given to it, one line per
//! element, following symlinks along the way:
//! - flags select the columns (mode, owner, group, size, inode, mount)
//! - `-n` stops symlinks from being followed
//! - `-t` bounds how long the whole run may take

use clap::Parser;
use lsi_cli::cli::{Action, Cli};
use lsi_cli::error::CliError;

fn main() {
    // Parse CLI arguments; help goes to stdout and exits 0, mistakes exit 4
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(CliError::InvalidArguments(String::new()).exit_code());
        }
        Err(e) => e.exit(),
    };

    // Initialize logging based on verbosity
    let _logger = lsi::init_logger(cli.verbose, cli.quiet);

    let global = cli.global_options();

    // Execute the action
    let result = match cli.into_action() {
        Action::Version(cmd) => cmd.execute(&global),
        Action::Completions(cmd) => cmd.execute(&global),
        Action::Inspect(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("lsi: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
