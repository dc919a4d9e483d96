//! Library exports for lsi-cli.
//!
//! The binary in `main.rs` is a thin wrapper around these modules; keeping
//! them in a library lets the integration tests and benches reach the
//! renderers directly.

pub mod cli;
pub mod commands;
pub mod error;
pub mod render;
pub mod utils;

// Re-export CLI for the binary
pub use cli::Cli;

/// Binary name used in version output and completion scripts.
pub const BIN_NAME: &str = "lsi";
