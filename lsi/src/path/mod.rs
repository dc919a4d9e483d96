//! Path decomposition.
//!
//! This module turns a raw pathname into the ordered list of elements the
//! walker visits. It is purely lexical and never fails.
//!
//! # Key Concepts
//!
//! ## Cleaning
//!
//! Before splitting, a path is reduced lexically:
//! - Repeated and trailing separators collapse
//! - `.` components are removed
//! - `..` components cancel the element before them (or stay, at the start
//!   of a relative path)
//!
//! ## Elements
//!
//! An absolute path starts with a root element, the separator itself (the
//! volume plus separator on systems with drive letters). Every other element
//! is a single name.
//!
//! # Examples
//!
//! ```
//! use lsi::path::split;
//!
//! let elements = split("/usr/local/../bin");
//! assert_eq!(elements.names(), ["/", "usr", "bin"]);
//! ```

pub mod split;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use split::{clean, split};
pub use types::PathElements;
