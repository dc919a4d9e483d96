//! Error types for the lsi library.
//!
//! Every failure the walker can run into is a variant of [`Error`], built with
//! `thiserror`. Errors are attached to the [`Record`](crate::Record) of the path
//! element that produced them and are also what a visitor returns to stop a
//! walk, so the type is `Clone`: underlying I/O errors are shared through an
//! [`Arc`].

use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;

/// Result type alias for operations that may fail with an lsi error.
///
/// # Examples
///
/// ```
/// use lsi::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(2)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the lsi library.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The walk was canceled through its [`CancelToken`](crate::CancelToken).
    #[error("operation canceled")]
    Canceled,

    /// The deadline attached to the walk's cancel token passed.
    #[error("deadline exceeded")]
    DeadlineExceeded,

    /// A path element does not exist.
    #[error("{}: {source}", path.display())]
    PathNotFound {
        /// The concrete path that was looked up.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: Arc<io::Error>,
    },

    /// Permission denied while looking up a path element.
    #[error("{}: {source}", path.display())]
    PermissionDenied {
        /// The concrete path that was looked up.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: Arc<io::Error>,
    },

    /// Any other failure of the metadata lookup for a path element.
    #[error("{}: {source}", path.display())]
    Stat {
        /// The concrete path that was looked up.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: Arc<io::Error>,
    },

    /// The element is a symlink but its target could not be read.
    #[error("readlink {}: {source}", path.display())]
    ReadLink {
        /// The symlink whose target could not be read.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: Arc<io::Error>,
    },

    /// No user is registered for a numeric owner id.
    #[error("unknown userid {uid}")]
    UnknownUser {
        /// The numeric user id.
        uid: u32,
    },

    /// No group is registered for a numeric group id.
    #[error("unknown groupid {gid}")]
    UnknownGroup {
        /// The numeric group id.
        gid: u32,
    },

    /// The user or group database could not be queried.
    #[error("identity lookup for id {id} failed: {source}")]
    IdentityLookup {
        /// The numeric user or group id being resolved.
        id: u32,
        /// The underlying error.
        #[source]
        source: Arc<io::Error>,
    },

    /// Following symlinks went deeper than the configured ceiling.
    #[error("{}: too many levels of symbolic links (max {max})", path.display())]
    SymlinkDepthExceeded {
        /// The link target that would have exceeded the ceiling.
        path: PathBuf,
        /// The configured maximum link depth.
        max: usize,
    },

    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Classify a failed metadata lookup on `path`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lsi::Error;
    /// use std::io;
    ///
    /// let err = Error::lookup("/missing", io::Error::from(io::ErrorKind::NotFound));
    /// assert!(err.is_not_found());
    /// ```
    pub fn lookup(path: impl Into<PathBuf>, err: io::Error) -> Self {
        let path = path.into();
        let source = Arc::new(err);
        match source.kind() {
            ErrorKind::NotFound => Self::PathNotFound { path, source },
            ErrorKind::PermissionDenied => Self::PermissionDenied { path, source },
            _ => Self::Stat { path, source },
        }
    }

    /// Wrap a failed `readlink` on `path`.
    pub fn read_link(path: impl Into<PathBuf>, err: io::Error) -> Self {
        Self::ReadLink {
            path: path.into(),
            source: Arc::new(err),
        }
    }

    /// Check if error came from cancellation or an expired deadline.
    ///
    /// # Examples
    ///
    /// ```
    /// use lsi::Error;
    ///
    /// assert!(Error::Canceled.is_cancellation());
    /// assert!(Error::DeadlineExceeded.is_cancellation());
    /// assert!(!Error::UnknownUser { uid: 7 }.is_cancellation());
    /// ```
    #[must_use]
    pub fn is_cancellation(&self) -> bool {
        matches!(self, Self::Canceled | Self::DeadlineExceeded)
    }

    /// Check if error indicates a path does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PathNotFound { .. })
    }

    /// Check if error is permission-related.
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }

    /// The filesystem path this error refers to, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::PathNotFound { path, .. }
            | Self::PermissionDenied { path, .. }
            | Self::Stat { path, .. }
            | Self::ReadLink { path, .. }
            | Self::SymlinkDepthExceeded { path, .. } => Some(path),
            _ => None,
        }
    }

    /// The underlying I/O error, if any.
    #[must_use]
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            Self::PathNotFound { source, .. }
            | Self::PermissionDenied { source, .. }
            | Self::Stat { source, .. }
            | Self::ReadLink { source, .. }
            | Self::IdentityLookup { source, .. } => Some(source),
            _ => None,
        }
    }
}
