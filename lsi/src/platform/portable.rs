//! Metadata for hosts without device ids, inodes or ownership.

use std::fs::Metadata;
use std::path::Path;

use crate::config::NO_DEVICE;
use crate::error::Result;
use crate::platform::{Identifiers, Ownership, Platform};
use crate::walk::{FileKind, FileMode};

/// Reports only what every filesystem can answer.
///
/// Devices are always [`NO_DEVICE`], so nothing is ever a mount point.
/// Inodes are 0 and ownership is empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct PortablePlatform;

impl Platform for PortablePlatform {
    fn identifiers(&self, metadata: &Metadata) -> Identifiers {
        Identifiers {
            device: NO_DEVICE,
            inode: 0,
            size: metadata.len(),
        }
    }

    fn mode(&self, metadata: &Metadata) -> FileMode {
        let file_type = metadata.file_type();
        let kind = if file_type.is_symlink() {
            FileKind::Symlink
        } else if file_type.is_dir() {
            FileKind::Directory
        } else {
            FileKind::Regular
        };

        let mut bits = if metadata.permissions().readonly() {
            0o444
        } else {
            0o666
        };
        if kind != FileKind::Regular {
            bits |= 0o111;
        }
        FileMode::new(kind, bits)
    }

    fn parent_device(&self, _path: &Path) -> u64 {
        NO_DEVICE
    }

    fn ownership(&self, _metadata: &Metadata) -> Result<Ownership> {
        Ok(Ownership::default())
    }
}
