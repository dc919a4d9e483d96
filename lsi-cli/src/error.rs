//! CLI-specific error types with exit codes.
//!
//! This module defines error types specific to the CLI layer,
//! wrapping library errors and providing appropriate exit codes.

use crate::utils::format_elapsed;
use lsi::Error as LibError;
use std::fmt;
use std::time::Duration;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// A path element could not be inspected, or the walk stopped early.
    Traversal(LibError),

    /// Invalid command-line arguments.
    InvalidArguments(String),

    /// I/O error, usually while writing output.
    Io(std::io::Error),

    /// The `--timeout` deadline passed during a walk.
    Timeout(Duration),

    /// The walk was canceled.
    Canceled,

    /// Configuration error.
    Config(String),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: A path element failed
    /// - 2: Timeout or cancellation
    /// - 4: Invalid arguments
    /// - 5: I/O error
    /// - 7: Configuration error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Traversal(_) => 1,
            CliError::Timeout(_) | CliError::Canceled => 2,
            CliError::InvalidArguments(_) => 4,
            CliError::Io(_) => 5,
            CliError::Config(_) => 7,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Traversal(e) => write!(f, "{e}"),
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::Timeout(elapsed) => write!(f, "timeout after {}", format_elapsed(*elapsed)),
            CliError::Canceled => write!(f, "operation canceled"),
            CliError::Config(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Traversal(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        match e {
            LibError::Validation { .. } => CliError::Config(e.to_string()),
            LibError::Canceled => CliError::Canceled,
            LibError::DeadlineExceeded => CliError::Timeout(Duration::ZERO),
            _ => CliError::Traversal(e),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

impl From<csv::Error> for CliError {
    fn from(e: csv::Error) -> Self {
        CliError::Io(std::io::Error::other(e))
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Io(std::io::Error::other(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_exit_codes() {
        let missing = LibError::lookup("/x", io::Error::from(io::ErrorKind::NotFound));
        assert_eq!(CliError::from(missing).exit_code(), 1);
        assert_eq!(CliError::Timeout(Duration::from_millis(5)).exit_code(), 2);
        assert_eq!(CliError::from(LibError::Canceled).exit_code(), 2);
        assert_eq!(CliError::InvalidArguments("x".into()).exit_code(), 4);
        assert_eq!(CliError::from(io::Error::from(io::ErrorKind::BrokenPipe)).exit_code(), 5);
    }

    #[test]
    fn test_validation_is_config_error() {
        let err = CliError::from(LibError::Validation {
            field: "max_link_depth".into(),
            message: "Must be at least 1".into(),
        });
        assert_eq!(err.exit_code(), 7);
        assert!(err.to_string().contains("max_link_depth"));
    }

    #[test]
    fn test_timeout_message() {
        let err = CliError::Timeout(Duration::from_micros(1_500_400));
        assert_eq!(err.to_string(), "timeout after 1.5s");
    }
}
