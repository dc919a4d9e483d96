//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `LSI_*` environment variables that
//! override the built-in defaults.

use std::env;

use crate::config::schema::WalkConfig;
use crate::error::{Error, Result};

/// Overrides [`WalkConfig::indent_width`].
pub const INDENT_WIDTH_ENV: &str = "LSI_INDENT_WIDTH";

/// Overrides [`WalkConfig::max_link_depth`].
pub const MAX_LINK_DEPTH_ENV: &str = "LSI_MAX_LINK_DEPTH";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use lsi::config::{EnvironmentConfig, WalkConfig};
///
/// let mut config = WalkConfig::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any variable is set to something other than a
    /// non-negative integer.
    pub fn apply_overrides(config: &mut WalkConfig) -> Result<()> {
        if let Ok(width) = env::var(INDENT_WIDTH_ENV) {
            config.indent_width = Self::parse_count(INDENT_WIDTH_ENV, &width)?;
        }

        if let Ok(depth) = env::var(MAX_LINK_DEPTH_ENV) {
            config.max_link_depth = Self::parse_count(MAX_LINK_DEPTH_ENV, &depth)?;
        }

        Ok(())
    }

    fn parse_count(field: &str, s: &str) -> Result<usize> {
        s.trim().parse().map_err(|_| Error::Validation {
            field: field.into(),
            message: format!("Must be a non-negative integer, got '{s}'"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WalkConfigBuilder;
    use serial_test::serial;

    fn with_env<F: FnOnce()>(vars: &[(&str, &str)], f: F) {
        let saved: Vec<_> = vars.iter().map(|(k, _)| (*k, env::var(k).ok())).collect();
        for (k, v) in vars {
            env::set_var(k, v);
        }
        f();
        for (k, v) in saved {
            match v {
                Some(val) => env::set_var(k, val),
                None => env::remove_var(k),
            }
        }
    }

    #[test]
    #[serial]
    fn test_overrides_applied() {
        with_env(&[(INDENT_WIDTH_ENV, "4"), (MAX_LINK_DEPTH_ENV, " 8 ")], || {
            let mut config = WalkConfig::default();
            EnvironmentConfig::apply_overrides(&mut config).unwrap();
            assert_eq!(config.indent_width, 4);
            assert_eq!(config.max_link_depth, 8);
        });
    }

    #[test]
    #[serial]
    fn test_invalid_value_rejected() {
        with_env(&[(INDENT_WIDTH_ENV, "wide")], || {
            let mut config = WalkConfig::default();
            let err = EnvironmentConfig::apply_overrides(&mut config).unwrap_err();
            assert!(err.to_string().contains(INDENT_WIDTH_ENV));
        });
    }

    #[test]
    #[serial]
    fn test_env_depth_above_ceiling_rejected() {
        with_env(&[(MAX_LINK_DEPTH_ENV, "1000000")], || {
            let result = WalkConfigBuilder::new().build();
            assert!(matches!(result, Err(Error::Validation { .. })));
        });
    }

    #[test]
    #[serial]
    fn test_builder_setters_beat_env() {
        with_env(&[(INDENT_WIDTH_ENV, "9")], || {
            let config = WalkConfigBuilder::new().indent_width(1).build().unwrap();
            assert_eq!(config.indent_width, 1);

            let config = WalkConfigBuilder::new().skip_env().build().unwrap();
            assert_eq!(config.indent_width, 2);
        });
    }
}
