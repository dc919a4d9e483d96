//! Version command implementation.

use crate::error::CliError;
use crate::utils::{version, GlobalOptions};
use std::io::{self, Write};

/// Print `lsi <version>`.
pub struct VersionCommand;

impl VersionCommand {
    /// Execute the version command.
    pub fn execute(&self, _global: &GlobalOptions) -> Result<(), CliError> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{}", version())?;
        Ok(())
    }
}
