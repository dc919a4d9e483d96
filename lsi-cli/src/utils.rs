//! Utility functions for CLI operations.
//!
//! This module provides the global options shared by every action, the
//! configuration loader, and the duration parsing and formatting used by
//! `--timeout`.

use crate::error::CliError;
use lsi::{WalkConfig, WalkConfigBuilder};
use std::time::Duration;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the indent width.
    pub indent_width: Option<usize>,

    /// Override the symlink depth ceiling.
    pub max_link_depth: Option<usize>,
}

/// Load the walk configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<WalkConfig, CliError> {
    let mut builder = WalkConfigBuilder::new();
    if let Some(width) = global.indent_width {
        builder = builder.indent_width(width);
    }
    if let Some(depth) = global.max_link_depth {
        builder = builder.max_link_depth(depth);
    }

    builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Parse a duration such as `300ms`, `1.5h` or `2h45m`.
///
/// Valid units are `ns`, `us` (or `µs`), `ms`, `s`, `m` and `h`. A bare `0`
/// is accepted without a unit.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn parse_duration(input: &str) -> Result<Duration, String> {
    let s = input.trim();
    let s = s.strip_prefix('+').unwrap_or(s);
    if s.starts_with('-') {
        return Err(format!("negative duration {input:?}"));
    }
    if s == "0" {
        return Ok(Duration::ZERO);
    }
    if s.is_empty() {
        return Err(format!("invalid duration {input:?}"));
    }

    let mut nanos = 0f64;
    let mut rest = s;
    while !rest.is_empty() {
        let number_len = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        let (number, tail) = rest.split_at(number_len);
        let unit_len = tail
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(tail.len());
        let (unit, next) = tail.split_at(unit_len);

        let value: f64 = number
            .parse()
            .map_err(|_| format!("invalid duration {input:?}"))?;
        let scale = match unit {
            "ns" => 1.0,
            "us" | "µs" | "μs" => 1e3,
            "ms" => 1e6,
            "s" => 1e9,
            "m" => 60e9,
            "h" => 3600e9,
            "" => return Err(format!("missing unit in duration {input:?}")),
            other => return Err(format!("unknown unit {other:?} in duration {input:?}")),
        };

        nanos += value * scale;
        rest = next;
    }

    if !nanos.is_finite() || nanos > u64::MAX as f64 {
        return Err(format!("invalid duration {input:?}"));
    }
    Ok(Duration::from_nanos(nanos.round() as u64))
}

/// Format an elapsed time rounded to the millisecond, e.g. `250ms`, `1.5s`
/// or `2m3.004s`.
pub fn format_elapsed(elapsed: Duration) -> String {
    let millis = (elapsed.as_micros() + 500) / 1000;
    if millis == 0 {
        return "0s".to_string();
    }
    if millis < 1000 {
        return format!("{millis}ms");
    }

    let hours = millis / 3_600_000;
    let minutes = (millis / 60_000) % 60;
    let seconds = (millis % 60_000) / 1000;
    let fraction = millis % 1000;

    let mut out = String::new();
    if hours > 0 {
        out.push_str(&format!("{hours}h"));
    }
    if hours > 0 || minutes > 0 {
        out.push_str(&format!("{minutes}m"));
    }
    out.push_str(&seconds.to_string());
    if fraction > 0 {
        let digits = format!("{fraction:03}");
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
    out.push('s');
    out
}

/// Version string printed by `-v`.
pub fn version() -> String {
    format!("{} {}", crate::BIN_NAME, env!("CARGO_PKG_VERSION"))
}
