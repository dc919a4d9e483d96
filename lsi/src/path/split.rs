//! Lexical path splitting.
//!
//! Nothing here touches the filesystem: `.` components are dropped, `..`
//! components are resolved against the preceding element, and repeated or
//! trailing separators disappear.

use std::ffi::OsString;
use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR};

use crate::path::types::PathElements;

/// Split a path into its cleaned elements.
///
/// - Absolute paths start with a root element (the volume, if any, followed
///   by the separator); `..` at the root stays at the root.
/// - Relative paths have no root element; leading `..` elements that cannot
///   be resolved lexically are kept.
/// - A path that cleans down to nothing becomes the single element `.`.
///
/// # Examples
///
/// ```
/// use lsi::path::split;
///
/// assert_eq!(split("/").names(), ["/"]);
/// assert_eq!(split("a/b/../c").names(), ["a", "c"]);
/// assert_eq!(split("//usr///local/").names(), ["/", "usr", "local"]);
/// assert_eq!(split("").names(), ["."]);
/// assert_eq!(split("../x").names(), ["..", "x"]);
/// ```
pub fn split(path: impl AsRef<Path>) -> PathElements {
    let mut volume = OsString::new();
    let mut rooted = false;
    let mut parts: Vec<OsString> = Vec::new();

    for component in path.as_ref().components() {
        match component {
            Component::Prefix(prefix) => {
                // Windows drive or UNC share
                volume = prefix.as_os_str().to_os_string();
            }
            Component::RootDir => {
                rooted = true;
            }
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(last) if last != ".." => {
                    parts.pop();
                }
                // Can't climb above the root
                _ if rooted => {}
                _ => parts.push(OsString::from("..")),
            },
            Component::Normal(name) => {
                parts.push(name.to_os_string());
            }
        }
    }

    let mut elements = Vec::with_capacity(parts.len() + 1);
    if rooted {
        let mut root = volume.clone();
        root.push(MAIN_SEPARATOR.to_string());
        elements.push(root);
    }
    elements.extend(parts);
    if elements.is_empty() {
        elements.push(OsString::from("."));
    }

    PathElements::new(volume, rooted, elements)
}

/// Lexically clean a path.
///
/// # Examples
///
/// ```
/// use lsi::path::clean;
/// use std::path::PathBuf;
///
/// assert_eq!(clean("/a/./b/../c/"), PathBuf::from("/a/c"));
/// assert_eq!(clean("/.."), PathBuf::from("/"));
/// assert_eq!(clean("./"), PathBuf::from("."));
/// ```
pub fn clean(path: impl AsRef<Path>) -> PathBuf {
    split(path).join()
}
