//! Symbolic file modes in GNU `ls` notation.
//!
//! The rendered string is always 10 characters: one type character and nine
//! permission characters, with set-uid, set-gid and sticky folded into the
//! execute positions the way `ls -l` does. An eleventh `+` is appended when
//! any of the rarely used append-only, exclusive-use or temporary attributes
//! is present; it is a hint, not an encoding of which one.

use std::fmt;

use serde::Serialize;

const S_IFMT: u32 = 0o170_000;
const S_IFSOCK: u32 = 0o140_000;
const S_IFLNK: u32 = 0o120_000;
const S_IFBLK: u32 = 0o060_000;
const S_IFDIR: u32 = 0o040_000;
const S_IFCHR: u32 = 0o020_000;
const S_IFIFO: u32 = 0o010_000;

const SET_UID: u32 = 0o4000;
const SET_GID: u32 = 0o2000;
const STICKY: u32 = 0o1000;

const OWNER_EXEC: u32 = 0o100;
const GROUP_EXEC: u32 = 0o010;
const OTHER_EXEC: u32 = 0o001;

/// The type of a filesystem entry, as far as the mode string cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    /// Regular file, or any type without a dedicated symbol.
    Regular,
    /// Directory.
    Directory,
    /// Symbolic link.
    Symlink,
    /// Block device.
    BlockDevice,
    /// Character device.
    CharDevice,
    /// Named pipe.
    Fifo,
    /// Unix domain socket.
    Socket,
}

impl FileKind {
    /// The leading character of the mode string.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Regular => '-',
            Self::Directory => 'd',
            Self::Symlink => 'l',
            Self::BlockDevice => 'b',
            Self::CharDevice => 'c',
            Self::Fifo => 'p',
            Self::Socket => 's',
        }
    }
}

/// File type, permission bits and the extended-attribute hint.
///
/// # Examples
///
/// ```
/// use lsi::{FileKind, FileMode};
///
/// assert_eq!(FileMode::new(FileKind::Regular, 0o644).symbolic(), "-rw-r--r--");
/// assert_eq!(FileMode::from_raw(0o041_777).symbolic(), "drwxrwxrwt");
/// assert_eq!(FileMode::from_raw(0o104_755).to_string(), "-rwsr-xr-x");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileMode {
    kind: FileKind,
    bits: u32,
    extended: bool,
}

impl FileMode {
    /// Build a mode from a kind and the low twelve permission bits
    /// (`rwxrwxrwx` plus set-uid, set-gid and sticky). Higher bits are ignored.
    #[must_use]
    pub const fn new(kind: FileKind, bits: u32) -> Self {
        Self {
            kind,
            bits: bits & 0o7777,
            extended: false,
        }
    }

    /// Decode a POSIX `st_mode` value.
    #[must_use]
    pub const fn from_raw(st_mode: u32) -> Self {
        let kind = match st_mode & S_IFMT {
            S_IFDIR => FileKind::Directory,
            S_IFLNK => FileKind::Symlink,
            S_IFBLK => FileKind::BlockDevice,
            S_IFCHR => FileKind::CharDevice,
            S_IFIFO => FileKind::Fifo,
            S_IFSOCK => FileKind::Socket,
            _ => FileKind::Regular,
        };
        Self::new(kind, st_mode)
    }

    /// Mark the entry as carrying append-only, exclusive or temporary
    /// attributes.
    ///
    /// For [`Platform`](crate::Platform) implementations that can see those
    /// attributes. The built-in platforms never set it.
    #[must_use]
    pub const fn with_extended(mut self, extended: bool) -> Self {
        self.extended = extended;
        self
    }

    /// The entry type.
    #[must_use]
    pub const fn kind(&self) -> FileKind {
        self.kind
    }

    /// The nine `rwx` bits.
    #[must_use]
    pub const fn permissions(&self) -> u32 {
        self.bits & 0o777
    }

    /// Whether set-user-id is set.
    #[must_use]
    pub const fn is_setuid(&self) -> bool {
        self.bits & SET_UID != 0
    }

    /// Whether set-group-id is set.
    #[must_use]
    pub const fn is_setgid(&self) -> bool {
        self.bits & SET_GID != 0
    }

    /// Whether the sticky bit is set.
    #[must_use]
    pub const fn is_sticky(&self) -> bool {
        self.bits & STICKY != 0
    }

    /// Render the fixed-width symbolic string.
    #[must_use]
    pub fn symbolic(&self) -> String {
        const RWX: [char; 3] = ['r', 'w', 'x'];

        let mut s = ['-'; 10];
        s[0] = self.kind.symbol();
        for (i, slot) in s[1..].iter_mut().enumerate() {
            if self.bits & (1 << (8 - i)) != 0 {
                *slot = RWX[i % 3];
            }
        }

        if self.is_setuid() {
            s[3] = special(self.bits & OWNER_EXEC != 0, 's');
        }
        if self.is_setgid() {
            s[6] = special(self.bits & GROUP_EXEC != 0, 's');
        }
        if self.is_sticky() {
            s[9] = special(self.bits & OTHER_EXEC != 0, 't');
        }

        let mut out: String = s.iter().collect();
        if self.extended {
            out.push('+');
        }
        out
    }
}

impl fmt::Display for FileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbolic())
    }
}

/// Lowercase symbol when the underlying execute bit is set, uppercase when not.
fn special(executable: bool, symbol: char) -> char {
    if executable {
        symbol
    } else {
        symbol.to_ascii_uppercase()
    }
}
