//! Configuration values and their defaults.

use crate::config::environment::EnvironmentConfig;
use crate::error::{Error, Result};

/// Device id reported when a device cannot be determined.
///
/// Used for the parent device of the filesystem root and for every device on
/// platforms without device ids. No real device has this id.
pub const NO_DEVICE: u64 = u64::MAX;

/// Spaces of indentation per followed symlink when rendering names.
pub const DEFAULT_INDENT_WIDTH: usize = 2;

/// Maximum number of nested symlink follows in a single walk.
///
/// Matches the Linux kernel's `MAXSYMLINKS`.
pub const DEFAULT_MAX_LINK_DEPTH: usize = 40;

/// Largest accepted `max_link_depth`.
///
/// Each followed link is one level of recursion in the walker, so the
/// ceiling also bounds stack use.
pub const MAX_LINK_DEPTH: usize = 128;

/// Largest accepted `indent_width`.
pub const MAX_INDENT_WIDTH: usize = 16;

/// Number of spaces for `width` per level at `depth`.
///
/// Saturates, and never exceeds what the largest accepted width and
/// depth produce, so arbitrary inputs cannot request a huge allocation.
#[must_use]
pub fn indent_len(width: usize, depth: usize) -> usize {
    width
        .saturating_mul(depth)
        .min(MAX_INDENT_WIDTH * (MAX_LINK_DEPTH + 1))
}

/// Settings for a [`Walker`](crate::Walker) and the renderers built on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkConfig {
    /// Spaces of indentation per level of symlink depth.
    pub indent_width: usize,

    /// Deepest symlink chain the walker follows before failing.
    pub max_link_depth: usize,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            indent_width: DEFAULT_INDENT_WIDTH,
            max_link_depth: DEFAULT_MAX_LINK_DEPTH,
        }
    }
}

impl WalkConfig {
    /// Check that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `max_link_depth` is zero or above
    /// [`MAX_LINK_DEPTH`], or if `indent_width` is above [`MAX_INDENT_WIDTH`].
    pub fn validate(&self) -> Result<()> {
        if self.max_link_depth == 0 {
            return Err(Error::Validation {
                field: "max_link_depth".into(),
                message: "Must be at least 1".into(),
            });
        }
        if self.max_link_depth > MAX_LINK_DEPTH {
            return Err(Error::Validation {
                field: "max_link_depth".into(),
                message: format!("Must be at most {MAX_LINK_DEPTH}"),
            });
        }
        if self.indent_width > MAX_INDENT_WIDTH {
            return Err(Error::Validation {
                field: "indent_width".into(),
                message: format!("Must be at most {MAX_INDENT_WIDTH}"),
            });
        }
        Ok(())
    }

    /// Leading whitespace for a record at `depth`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lsi::WalkConfig;
    ///
    /// assert_eq!(WalkConfig::default().indent(2), "    ");
    /// ```
    #[must_use]
    pub fn indent(&self, depth: usize) -> String {
        " ".repeat(indent_len(self.indent_width, depth))
    }
}

/// Builds a [`WalkConfig`] from defaults, environment and explicit settings.
#[derive(Debug, Default)]
pub struct WalkConfigBuilder {
    skip_env: bool,
    indent_width: Option<usize>,
    max_link_depth: Option<usize>,
}

impl WalkConfigBuilder {
    /// Create a builder that reads the environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ignore `LSI_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Override the indent width.
    #[must_use]
    pub fn indent_width(mut self, width: usize) -> Self {
        self.indent_width = Some(width);
        self
    }

    /// Override the maximum symlink depth.
    #[must_use]
    pub fn max_link_depth(mut self, depth: usize) -> Self {
        self.max_link_depth = Some(depth);
        self
    }

    /// Merge all sources and validate the result.
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable is malformed or the merged
    /// configuration fails [`WalkConfig::validate`].
    pub fn build(self) -> Result<WalkConfig> {
        let mut config = WalkConfig::default();

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }
        if let Some(width) = self.indent_width {
            config.indent_width = width;
        }
        if let Some(depth) = self.max_link_depth {
            config.max_link_depth = depth;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WalkConfig::default();
        assert_eq!(config.indent_width, 2);
        assert_eq!(config.max_link_depth, 40);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_indent() {
        let config = WalkConfig {
            indent_width: 3,
            ..WalkConfig::default()
        };
        assert_eq!(config.indent(0), "");
        assert_eq!(config.indent(2).len(), 6);
    }

    #[test]
    fn test_zero_link_depth_rejected() {
        let result = WalkConfigBuilder::new().skip_env().max_link_depth(0).build();
        assert!(matches!(result, Err(Error::Validation { .. })));
    }

    #[test]
    fn test_link_depth_ceiling() {
        let at_limit = WalkConfigBuilder::new()
            .skip_env()
            .max_link_depth(MAX_LINK_DEPTH)
            .build();
        assert!(at_limit.is_ok());

        let result = WalkConfigBuilder::new()
            .skip_env()
            .max_link_depth(MAX_LINK_DEPTH + 1)
            .build();
        match result {
            Err(Error::Validation { field, .. }) => assert_eq!(field, "max_link_depth"),
            other => panic!("expected validation error, got {other:?}"),
        }

        let huge = WalkConfig {
            max_link_depth: 1_000_000,
            ..WalkConfig::default()
        };
        assert!(huge.validate().is_err());
    }

    #[test]
    fn test_indent_width_ceiling() {
        let result = WalkConfigBuilder::new()
            .skip_env()
            .indent_width(usize::MAX)
            .build();
        match result {
            Err(Error::Validation { field, .. }) => assert_eq!(field, "indent_width"),
            other => panic!("expected validation error, got {other:?}"),
        }
        assert!(WalkConfigBuilder::new()
            .skip_env()
            .indent_width(MAX_INDENT_WIDTH)
            .build()
            .is_ok());
    }

    #[test]
    fn test_indent_len_saturates() {
        assert_eq!(indent_len(2, 3), 6);
        assert_eq!(indent_len(0, usize::MAX), 0);
        let cap = MAX_INDENT_WIDTH * (MAX_LINK_DEPTH + 1);
        assert_eq!(indent_len(usize::MAX / 2 + 1, 2), cap);

        let wide = WalkConfig {
            indent_width: usize::MAX,
            ..WalkConfig::default()
        };
        assert_eq!(wide.indent(3).len(), cap);
    }

    #[test]
    fn test_builder_overrides() {
        let config = WalkConfigBuilder::new()
            .skip_env()
            .indent_width(0)
            .max_link_depth(5)
            .build()
            .unwrap();
        assert_eq!(config.indent_width, 0);
        assert_eq!(config.max_link_depth, 5);
    }
}
