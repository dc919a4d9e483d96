//! Metadata from `stat` and the user and group databases.

use std::fs::{self, Metadata};
use std::os::unix::fs::MetadataExt;
use std::path::{self, Path};

use crate::config::NO_DEVICE;
use crate::error::Result;
use crate::path::clean;
use crate::platform::{identity, Identifiers, Ownership, Platform};
use crate::walk::FileMode;

/// Full POSIX metadata.
#[derive(Debug, Clone, Copy, Default)]
pub struct PosixPlatform;

impl Platform for PosixPlatform {
    fn identifiers(&self, metadata: &Metadata) -> Identifiers {
        Identifiers {
            device: metadata.dev(),
            inode: metadata.ino(),
            size: metadata.size(),
        }
    }

    fn mode(&self, metadata: &Metadata) -> FileMode {
        FileMode::from_raw(metadata.mode())
    }

    fn parent_device(&self, path: &Path) -> u64 {
        let Ok(absolute) = path::absolute(path) else {
            return NO_DEVICE;
        };
        // `..` is resolved lexically here, the same way the element was split
        let absolute = clean(absolute);
        match absolute.parent() {
            Some(parent) => fs::metadata(parent).map_or(NO_DEVICE, |m| m.dev()),
            None => NO_DEVICE,
        }
    }

    fn ownership(&self, metadata: &Metadata) -> Result<Ownership> {
        let uid = metadata.uid();
        let gid = metadata.gid();
        Ok(Ownership {
            uid,
            user: identity::user_name(uid)?,
            gid,
            group: identity::group_name(gid)?,
        })
    }
}
