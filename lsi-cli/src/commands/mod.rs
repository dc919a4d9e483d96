//! CLI command implementations.
//!
//! This module contains the implementations of the actions a command line
//! can select:
//! - `inspect`: Walk each path and print its elements
//! - `completions`: Print a shell completion script
//! - `version`: Print the version

pub mod completions;
pub mod inspect;
pub mod version;

pub use completions::CompletionsCommand;
pub use inspect::InspectCommand;
pub use version::VersionCommand;
