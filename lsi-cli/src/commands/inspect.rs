//! Inspect command implementation.
//!
//! This is what `lsi` does by default: walk every path given on the command
//! line, collect its records, and print them once the walk of that path is
//! complete so that columns can be aligned.

use crate::error::CliError;
use crate::render::{write_sections, Columns, OutputFormat, Section, TextStyle};
use crate::utils::{load_configuration, GlobalOptions};
use log::debug;
use lsi::{CancelToken, Collector, Error, Platform, Walker};
use std::env;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Walk paths and print their elements.
#[derive(Debug)]
pub struct InspectCommand {
    /// Paths to inspect; empty means the current directory.
    pub paths: Vec<PathBuf>,

    /// Columns to print in text output.
    pub columns: Columns,

    /// Follow symlinks.
    pub follow: bool,

    /// Give up after this long; zero means never.
    pub timeout: Duration,

    /// Output format.
    pub format: OutputFormat,
}

impl InspectCommand {
    /// Execute the inspect command.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Load configuration
        let config = load_configuration(global)?;

        // 2. Resolve the paths to walk
        let paths = if self.paths.is_empty() {
            vec![env::current_dir()?]
        } else {
            self.paths.clone()
        };

        // 3. Walk each path, stopping everything on timeout or cancellation
        let cancel = if self.timeout.is_zero() {
            CancelToken::new()
        } else {
            CancelToken::with_timeout(self.timeout)
        };
        let walker = Walker::new().config(config);

        let mut sections = Vec::with_capacity(paths.len());
        let mut interrupted = None;
        for root in &paths {
            let start = Instant::now();
            let section = inspect_path(&walker, root, &cancel, self.follow);
            debug!(
                "{}: {} records in {:?}",
                root.display(),
                section.records.len(),
                start.elapsed()
            );

            match &section.error {
                Some(Error::DeadlineExceeded) => {
                    interrupted = Some(CliError::Timeout(start.elapsed()));
                    break;
                }
                Some(Error::Canceled) => {
                    interrupted = Some(CliError::Canceled);
                    break;
                }
                _ => sections.push(section),
            }
        }

        // 4. Format and output to stdout
        let style = TextStyle {
            columns: self.columns,
            follow: self.follow,
            indent_width: config.indent_width,
        };
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        write_sections(&mut handle, &sections, self.format, &style)?;
        handle.flush()?;

        if let Some(err) = interrupted {
            return Err(err);
        }
        match sections.iter().find_map(|s| s.error.clone()) {
            Some(err) => Err(CliError::Traversal(err)),
            None => Ok(()),
        }
    }
}

/// Walk one path, keeping every record up to and including the first failure.
pub fn inspect_path<P: Platform>(
    walker: &Walker<P>,
    root: &Path,
    cancel: &CancelToken,
    follow: bool,
) -> Section {
    let mut collector = Collector::new(follow);
    let result = walker.walk(root, cancel, &mut collector);
    Section {
        root: root.to_path_buf(),
        records: collector.into_records(),
        error: result.err(),
    }
}
