//! Core types for path decomposition.

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

/// A lexically cleaned path broken into its elements.
///
/// Absolute paths start with a root element (the separator itself, preceded
/// by the volume on systems with drive letters). No other element contains a
/// separator, and there is always at least one element.
///
/// # Examples
///
/// ```
/// use lsi::path::split;
/// use std::path::PathBuf;
///
/// let elements = split("/usr/local/bin");
/// assert_eq!(elements.names(), ["/", "usr", "local", "bin"]);
/// assert_eq!(elements.volume(), "");
/// assert_eq!(elements.join(), PathBuf::from("/usr/local/bin"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathElements {
    volume: OsString,
    rooted: bool,
    elements: Vec<OsString>,
}

impl PathElements {
    pub(crate) fn new(volume: OsString, rooted: bool, elements: Vec<OsString>) -> Self {
        debug_assert!(!elements.is_empty());
        Self {
            volume,
            rooted,
            elements,
        }
    }

    /// The drive or share prefix, empty on systems without one.
    #[must_use]
    pub fn volume(&self) -> String {
        self.volume.to_string_lossy().into_owned()
    }

    /// Whether the first element is the filesystem root.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.rooted
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Always false; a split path has at least one element.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterate over the raw elements.
    pub fn iter(&self) -> impl Iterator<Item = &OsStr> {
        self.elements.iter().map(OsString::as_os_str)
    }

    /// The elements as (lossily decoded) strings.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.iter()
            .map(|e| e.to_string_lossy().into_owned())
            .collect()
    }

    /// The path made of the volume and the first `n` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use lsi::path::split;
    /// use std::path::PathBuf;
    ///
    /// let elements = split("/usr/local/bin");
    /// assert_eq!(elements.prefix(0), PathBuf::new());
    /// assert_eq!(elements.prefix(2), PathBuf::from("/usr"));
    /// ```
    #[must_use]
    pub fn prefix(&self, n: usize) -> PathBuf {
        let mut path = PathBuf::new();
        if n == 0 {
            return path;
        }
        if !self.volume.is_empty() && !self.rooted {
            path.push(&self.volume);
        }
        for element in self.elements.iter().take(n) {
            path.push(element);
        }
        path
    }

    /// The whole cleaned path.
    #[must_use]
    pub fn join(&self) -> PathBuf {
        self.prefix(self.elements.len())
    }
}
