//! Filesystem capability used by the walker and the remover.
//!
//! Both components only ever need two operations: list the direct children
//! of a directory, and remove a single entry. Keeping them behind a trait
//! lets the classification logic run against [`MemoryFs`] in tests and in
//! previews without touching the disk.
pub mod memory;
pub mod os;

pub use memory::MemoryFs;
pub use os::OsFs;

use std::ffi::OsString;
use std::io;
use std::path::Path;

/// One direct child of a listed directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirEntry {
    /// Base name only, never a path. Kept as an `OsString` so names that
    /// are not valid UTF-8 still join back into the right path.
    pub name: OsString,
    /// `true` if the entry itself is a directory. Symlinks are not followed.
    pub is_dir: bool,
}

impl DirEntry {
    pub fn file(name: impl Into<OsString>) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
        }
    }

    pub fn dir(name: impl Into<OsString>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
        }
    }
}

pub trait FileSystem: Send + Sync {
    /// List the direct children of `path`.
    ///
    /// Fails with the underlying error when `path` does not exist, is not a
    /// directory, or cannot be read.
    fn list_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>>;

    /// Remove a single file or a single empty directory. Never recursive.
    fn remove(&self, path: &Path) -> io::Result<()>;
}
