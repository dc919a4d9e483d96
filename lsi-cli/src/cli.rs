//! CLI structure and flag definitions.
//!
//! This module defines the command-line interface using clap's derive macros.
//! There are no subcommands: the flags select which columns to print, and the
//! trailing arguments are the paths to inspect.

use crate::commands::{CompletionsCommand, InspectCommand, VersionCommand};
use crate::render::{Columns, OutputFormat};
use crate::utils::{parse_duration, GlobalOptions};
use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;
use std::time::Duration;

/// List every element of a path, following symlinks along the way.
#[derive(Parser)]
#[command(name = "lsi")]
#[command(
    about = "List every element of a path, following symlinks",
    long_about = None,
    disable_version_flag = true
)]
pub struct Cli {
    /// Display version information
    #[arg(short = 'v', long)]
    pub version: bool,

    /// Timeout duration (e.g. 500ms, 30s, 1h30m); 0 means unlimited
    #[arg(
        short = 't',
        long,
        value_name = "DURATION",
        value_parser = parse_duration,
        default_value = "0",
        env = "LSI_TIMEOUT"
    )]
    pub timeout: Duration,

    /// Do not follow symlinks
    #[arg(short = 'n', long)]
    pub no_follow: bool,

    /// Output using long format (-p -u -g -s -m)
    #[arg(short = 'l', long)]
    pub long: bool,

    /// Output file type and permissions
    #[arg(short = 'p', long)]
    pub permissions: bool,

    /// Output file owner
    #[arg(short = 'u', long)]
    pub user: bool,

    /// Output file group
    #[arg(short = 'g', long)]
    pub group: bool,

    /// Output file size (bytes)
    #[arg(short = 's', long)]
    pub size: bool,

    /// Output file inode
    #[arg(short = 'i', long)]
    pub inode: bool,

    /// Output mount point symbols (@)
    #[arg(short = 'm', long)]
    pub mount: bool,

    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "text",
        env = "LSI_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: OutputFormat,

    /// Spaces of indentation per followed symlink
    #[arg(long, value_name = "N")]
    pub indent_width: Option<usize>,

    /// Deepest chain of symlinks to follow
    #[arg(long, value_name = "N")]
    pub max_link_depth: Option<usize>,

    /// Print a shell completion script and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Paths to inspect (default: the current directory)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,
}

/// What a parsed command line asks for.
pub enum Action {
    /// Print the version.
    Version(VersionCommand),
    /// Print a completion script.
    Completions(CompletionsCommand),
    /// Walk and print paths.
    Inspect(InspectCommand),
}

impl Cli {
    /// Options that apply regardless of the action.
    pub fn global_options(&self) -> GlobalOptions {
        GlobalOptions {
            verbose: self.verbose,
            quiet: self.quiet,
            indent_width: self.indent_width,
            max_link_depth: self.max_link_depth,
        }
    }

    /// Turn the parsed flags into the action to run.
    pub fn into_action(self) -> Action {
        if self.version {
            return Action::Version(VersionCommand);
        }
        if let Some(shell) = self.completions {
            return Action::Completions(CompletionsCommand { shell });
        }

        let columns = if self.long {
            Columns::long().with_inode(self.inode)
        } else {
            Columns {
                mode: self.permissions,
                user: self.user,
                group: self.group,
                size: self.size,
                inode: self.inode,
                mount: self.mount,
            }
        };

        Action::Inspect(InspectCommand {
            paths: self.paths,
            columns,
            follow: !self.no_follow,
            timeout: self.timeout,
            format: self.format,
        })
    }
}
