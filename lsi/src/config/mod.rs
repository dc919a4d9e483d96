//! Configuration for path traversal.
//!
//! Configuration is merged from the following sources (highest to lowest):
//!
//! 1. Programmatic overrides (via [`WalkConfigBuilder`] setters)
//! 2. Environment variables (`LSI_*`)
//! 3. Built-in defaults
//!
//! # Examples
//!
//! ```
//! use lsi::config::{WalkConfigBuilder, DEFAULT_MAX_LINK_DEPTH};
//!
//! let config = WalkConfigBuilder::new()
//!     .skip_env()
//!     .indent_width(4)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.indent_width, 4);
//! assert_eq!(config.max_link_depth, DEFAULT_MAX_LINK_DEPTH);
//! ```

pub mod environment;
pub mod schema;

pub use environment::EnvironmentConfig;
pub use schema::{
    indent_len, WalkConfig, WalkConfigBuilder, DEFAULT_INDENT_WIDTH, DEFAULT_MAX_LINK_DEPTH,
    MAX_INDENT_WIDTH, MAX_LINK_DEPTH, NO_DEVICE,
};
