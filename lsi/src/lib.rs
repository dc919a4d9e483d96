#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # lsi
//!
//! A library for inspecting every element of a pathname.
//!
//! Given a path, the walker visits each element from the root (or the first
//! relative element) to the last, reporting type, permissions, ownership,
//! size, inode and device, and whether the element is a mount point.
//! Symlinks can be followed, in which case their targets are walked in turn
//! with increasing depth.
//!
//! ## Core Types
//!
//! - [`Walker`], [`Visitor`] and [`Step`]: the traversal
//! - [`Record`]: what is known about one path element
//! - [`FileMode`] and [`FileKind`]: symbolic permission strings
//! - [`Platform`]: where metadata comes from
//! - [`CancelToken`]: cancellation and deadlines
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use lsi::{CancelToken, Collector, Walker};
//!
//! let mut collector = Collector::new(true);
//! Walker::new().walk("/", &CancelToken::new(), &mut collector)?;
//!
//! for record in collector.records() {
//!     println!("{} {}", record.mode(), record.name());
//! }
//! # Ok::<(), lsi::Error>(())
//! ```

pub mod cancel;
pub mod config;
pub mod error;
pub mod logging;
pub mod path;
pub mod platform;
pub mod walk;

// Re-export key types at crate root for convenience
pub use cancel::CancelToken;
pub use config::{WalkConfig, WalkConfigBuilder, NO_DEVICE};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{split, PathElements};
pub use platform::{NativePlatform, Platform};
pub use walk::{Collector, FileKind, FileMode, Record, RecordBuilder, Step, Visitor, Walker};
