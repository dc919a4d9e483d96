//! The per-element result of a walk.

use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};

use crate::config::indent_len;
use crate::error::Error;

/// Everything the walker learned about one path element.
///
/// Records are built once by the walker and never change. When [`error`]
/// is set, only the path, volume, name and depth are meaningful; every
/// metadata field is zero or empty.
///
/// [`error`]: Record::error
#[derive(Debug, Clone, Serialize)]
pub struct Record {
    path: PathBuf,
    volume: String,
    name: String,
    link: Option<PathBuf>,
    mode: String,
    device: u64,
    parent_device: u64,
    inode: u64,
    size: u64,
    owner_id: u32,
    owner_name: String,
    group_id: u32,
    group_name: String,
    depth: usize,
    #[serde(serialize_with = "serialize_error")]
    error: Option<Error>,
}

fn serialize_error<S: Serializer>(error: &Option<Error>, serializer: S) -> Result<S::Ok, S::Error> {
    match error {
        Some(err) => serializer.serialize_some(&err.to_string()),
        None => serializer.serialize_none(),
    }
}

impl Record {
    /// Start building a record for the element `name` reached at `path`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lsi::Record;
    ///
    /// let record = Record::builder("usr/local", "local")
    ///     .mode("drwxr-xr-x")
    ///     .devices(2049, 2049)
    ///     .depth(1)
    ///     .build();
    /// assert_eq!(record.name(), "local");
    /// assert!(!record.is_mount_point());
    /// ```
    pub fn builder(path: impl Into<PathBuf>, name: impl Into<String>) -> RecordBuilder {
        RecordBuilder::new(path, name)
    }

    /// The path of this element, relative to the directory the walk (or the
    /// followed symlink) started from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Drive or share prefix of the walked path, empty on POSIX.
    #[must_use]
    pub fn volume(&self) -> &str {
        &self.volume
    }

    /// The element name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Target of the symlink, unresolved.
    #[must_use]
    pub fn link(&self) -> Option<&Path> {
        self.link.as_deref()
    }

    /// Symbolic mode string.
    #[must_use]
    pub fn mode(&self) -> &str {
        &self.mode
    }

    /// Device id of the element.
    #[must_use]
    pub fn device(&self) -> u64 {
        self.device
    }

    /// Device id of the element's parent directory.
    #[must_use]
    pub fn parent_device(&self) -> u64 {
        self.parent_device
    }

    /// Inode number.
    #[must_use]
    pub fn inode(&self) -> u64 {
        self.inode
    }

    /// Size in bytes.
    #[must_use]
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Numeric owner id.
    #[must_use]
    pub fn owner_id(&self) -> u32 {
        self.owner_id
    }

    /// Owner name.
    #[must_use]
    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }

    /// Numeric group id.
    #[must_use]
    pub fn group_id(&self) -> u32 {
        self.group_id
    }

    /// Group name.
    #[must_use]
    pub fn group_name(&self) -> &str {
        &self.group_name
    }

    /// Number of symlinks followed to reach this element.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Why this element could not be inspected.
    #[must_use]
    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    /// Whether the element sits on a different device than its parent.
    #[must_use]
    pub fn is_mount_point(&self) -> bool {
        self.device != self.parent_device
    }

    /// Whether the element is a symlink.
    #[must_use]
    pub fn is_symlink(&self) -> bool {
        self.link.is_some()
    }

    /// The name indented by depth, with ` -> target` appended for symlinks
    /// when `show_link` is set.
    ///
    /// # Examples
    ///
    /// ```
    /// use lsi::Record;
    ///
    /// let record = Record::builder("lib", "lib").link("usr/lib").depth(1).build();
    /// assert_eq!(record.display_name(2, true), "  lib -> usr/lib");
    /// assert_eq!(record.display_name(2, false), "  lib");
    /// ```
    #[must_use]
    pub fn display_name(&self, indent_width: usize, show_link: bool) -> String {
        let mut out = " ".repeat(indent_len(indent_width, self.depth));
        out.push_str(&self.name);
        if show_link {
            if let Some(link) = &self.link {
                out.push_str(" -> ");
                out.push_str(&link.to_string_lossy());
            }
        }
        out
    }
}

/// Builder for [`Record`].
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    record: Record,
}

impl RecordBuilder {
    /// Create a builder with all metadata zeroed.
    pub fn new(path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            record: Record {
                path: path.into(),
                volume: String::new(),
                name: name.into(),
                link: None,
                mode: String::new(),
                device: 0,
                parent_device: 0,
                inode: 0,
                size: 0,
                owner_id: 0,
                owner_name: String::new(),
                group_id: 0,
                group_name: String::new(),
                depth: 0,
                error: None,
            },
        }
    }

    /// Set the volume.
    #[must_use]
    pub fn volume(mut self, volume: impl Into<String>) -> Self {
        self.record.volume = volume.into();
        self
    }

    /// Set the symlink target.
    #[must_use]
    pub fn link(mut self, target: impl Into<PathBuf>) -> Self {
        self.record.link = Some(target.into());
        self
    }

    /// Set the mode string.
    #[must_use]
    pub fn mode(mut self, mode: impl Into<String>) -> Self {
        self.record.mode = mode.into();
        self
    }

    /// Set the element's device and its parent's device.
    #[must_use]
    pub fn devices(mut self, device: u64, parent_device: u64) -> Self {
        self.record.device = device;
        self.record.parent_device = parent_device;
        self
    }

    /// Set the inode number.
    #[must_use]
    pub fn inode(mut self, inode: u64) -> Self {
        self.record.inode = inode;
        self
    }

    /// Set the size.
    #[must_use]
    pub fn size(mut self, size: u64) -> Self {
        self.record.size = size;
        self
    }

    /// Set the owner.
    #[must_use]
    pub fn owner(mut self, id: u32, name: impl Into<String>) -> Self {
        self.record.owner_id = id;
        self.record.owner_name = name.into();
        self
    }

    /// Set the group.
    #[must_use]
    pub fn group(mut self, id: u32, name: impl Into<String>) -> Self {
        self.record.group_id = id;
        self.record.group_name = name.into();
        self
    }

    /// Set the symlink depth.
    #[must_use]
    pub fn depth(mut self, depth: usize) -> Self {
        self.record.depth = depth;
        self
    }

    /// Mark the element as failed.
    #[must_use]
    pub fn error(mut self, error: Error) -> Self {
        self.record.error = Some(error);
        self
    }

    /// Finish the record. A failed record keeps only its path, volume, name,
    /// depth and error.
    #[must_use]
    pub fn build(self) -> Record {
        let record = self.record;
        if record.error.is_none() {
            return record;
        }
        Record {
            link: None,
            mode: String::new(),
            device: 0,
            parent_device: 0,
            inode: 0,
            size: 0,
            owner_id: 0,
            owner_name: String::new(),
            group_id: 0,
            group_name: String::new(),
            ..record
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn sample() -> RecordBuilder {
        Record::builder("/usr", "usr")
            .mode("drwxr-xr-x")
            .devices(66, 66)
            .inode(12)
            .size(4096)
            .owner(0, "root")
            .group(0, "root")
    }

    #[test]
    fn test_builder_sets_fields() {
        let record = sample().depth(2).build();
        assert_eq!(record.path(), Path::new("/usr"));
        assert_eq!(record.name(), "usr");
        assert_eq!(record.mode(), "drwxr-xr-x");
        assert_eq!(record.inode(), 12);
        assert_eq!(record.size(), 4096);
        assert_eq!(record.owner_name(), "root");
        assert_eq!(record.group_id(), 0);
        assert_eq!(record.depth(), 2);
        assert!(record.error().is_none());
        assert!(!record.is_symlink());
    }

    #[test]
    fn test_mount_point() {
        assert!(!sample().build().is_mount_point());
        assert!(sample().devices(67, 66).build().is_mount_point());
        assert!(sample().devices(66, u64::MAX).build().is_mount_point());
    }

    #[test]
    fn test_error_zeroes_metadata() {
        let err = Error::lookup("/usr", io::Error::from(io::ErrorKind::NotFound));
        let record = sample().volume("C:").link("x").depth(3).error(err).build();

        assert_eq!(record.name(), "usr");
        assert_eq!(record.volume(), "C:");
        assert_eq!(record.depth(), 3);
        assert!(record.error().unwrap().is_not_found());
        assert_eq!(record.mode(), "");
        assert_eq!(record.inode(), 0);
        assert_eq!(record.size(), 0);
        assert_eq!(record.owner_name(), "");
        assert!(record.link().is_none());
        assert!(!record.is_mount_point());
    }

    #[test]
    fn test_display_name() {
        let record = Record::builder("b", "b").link("../c").depth(3).build();
        assert_eq!(record.display_name(1, true), "   b -> ../c");
        assert_eq!(record.display_name(0, true), "b -> ../c");

        let plain = Record::builder("a", "a").build();
        assert_eq!(plain.display_name(4, true), "a");
    }

    #[test]
    fn test_display_name_with_oversized_width() {
        let record = Record::builder("x", "x").depth(2).build();
        let name = record.display_name(usize::MAX / 2 + 1, true);
        assert!(name.ends_with('x'));
        assert!(name.starts_with(' '));
    }

    #[test]
    fn test_serializes_error_as_message() {
        let record = Record::builder("x", "x").error(Error::Canceled).build();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["error"], "operation canceled");
        assert_eq!(json["name"], "x");

        let json = serde_json::to_value(sample().build()).unwrap();
        assert!(json["error"].is_null());
        assert_eq!(json["inode"], 12);
    }
}
