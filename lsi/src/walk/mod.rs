//! Path walking.
//!
//! A [`Walker`] splits a path into its elements and inspects each one in
//! order, producing a [`Record`] per element. Symlinks are described as
//! themselves; whether their targets get walked too is up to the
//! [`Visitor`] receiving the records.
//!
//! # Examples
//!
//! ```
//! use lsi::{CancelToken, Collector, Walker};
//!
//! let mut collector = Collector::new(false);
//! Walker::new().walk("/", &CancelToken::new(), &mut collector)?;
//!
//! let root = &collector.records()[0];
//! assert_eq!(root.name(), "/");
//! assert!(root.mode().starts_with('d'));
//! # Ok::<(), lsi::Error>(())
//! ```

mod mode;
mod record;
mod walker;

pub use mode::{FileKind, FileMode};
pub use record::{Record, RecordBuilder};
pub use walker::{Collector, Step, Visitor, Walker};
