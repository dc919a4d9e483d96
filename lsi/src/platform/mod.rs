//! Host-specific metadata extraction.
//!
//! The walker never reads device ids, inodes or ownership directly; it asks a
//! [`Platform`]. [`PosixPlatform`] reads everything from `stat` and the user
//! and group databases. [`PortablePlatform`] is for systems without those
//! notions: it reports sizes and a mode derived from the file type and the
//! read-only flag, [`NO_DEVICE`] for devices, and no ownership.
//!
//! [`NativePlatform`] names the implementation for the host the crate was
//! built for.

use std::fs::Metadata;
use std::path::Path;

use crate::error::Result;
use crate::walk::FileMode;

#[cfg(unix)]
mod identity;
mod portable;
#[cfg(unix)]
mod posix;

pub use portable::PortablePlatform;
#[cfg(unix)]
pub use posix::PosixPlatform;

#[doc(inline)]
pub use crate::config::NO_DEVICE;

/// The platform implementation for the build target.
#[cfg(unix)]
pub type NativePlatform = PosixPlatform;

/// The platform implementation for the build target.
#[cfg(not(unix))]
pub type NativePlatform = PortablePlatform;

/// The platform implementation for the build target.
#[must_use]
pub fn native() -> NativePlatform {
    NativePlatform::default()
}

/// Device, inode and size of a filesystem entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identifiers {
    /// Id of the device holding the entry.
    pub device: u64,
    /// Inode number, 0 where unsupported.
    pub inode: u64,
    /// Size in bytes.
    pub size: u64,
}

/// Owner and group of a filesystem entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ownership {
    /// Numeric owner id.
    pub uid: u32,
    /// Owner name.
    pub user: String,
    /// Numeric group id.
    pub gid: u32,
    /// Group name.
    pub group: String,
}

/// Source of the per-element metadata a walk reports.
///
/// Implementations receive metadata from `symlink_metadata`, so symlinks are
/// described as themselves, never as their targets.
pub trait Platform {
    /// Device id, inode and size.
    fn identifiers(&self, metadata: &Metadata) -> Identifiers;

    /// File type and permissions.
    fn mode(&self, metadata: &Metadata) -> FileMode;

    /// Device id of the directory containing `path`, or [`NO_DEVICE`] when
    /// `path` is a filesystem root or the device can't be determined.
    fn parent_device(&self, path: &Path) -> u64;

    /// Owner and group, resolved to names.
    ///
    /// # Errors
    ///
    /// Returns an error when an id has no name or the lookup itself fails.
    fn ownership(&self, metadata: &Metadata) -> Result<Ownership>;
}

impl<P: Platform + ?Sized> Platform for &P {
    fn identifiers(&self, metadata: &Metadata) -> Identifiers {
        (**self).identifiers(metadata)
    }

    fn mode(&self, metadata: &Metadata) -> FileMode {
        (**self).mode(metadata)
    }

    fn parent_device(&self, path: &Path) -> u64 {
        (**self).parent_device(path)
    }

    fn ownership(&self, metadata: &Metadata) -> Result<Ownership> {
        (**self).ownership(metadata)
    }
}
