//! In-memory filesystem for tests and dry previews.
//!
//! Entries live in a single ordered map keyed by full path, behind a
//! `parking_lot::RwLock` so the background walker can list while the
//! owning thread keeps a handle. Path ordering is component-wise, so the
//! children of a directory come out sorted by name, the same order
//! [`OsFs`](super::OsFs) produces.
use super::{DirEntry, FileSystem};
use parking_lot::RwLock;
use std::collections::{BTreeMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Kind {
    File,
    Dir,
}

#[derive(Default)]
struct Inner {
    entries: BTreeMap<PathBuf, Kind>,
    /// Directories whose listing fails with `PermissionDenied`.
    unreadable: HashSet<PathBuf>,
}

#[derive(Default)]
pub struct MemoryFs {
    inner: RwLock<Inner>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a directory and any missing ancestors.
    pub fn add_dir(&self, path: impl AsRef<Path>) -> &Self {
        let mut inner = self.inner.write();
        insert_with_ancestors(&mut inner.entries, path.as_ref(), Kind::Dir);
        self
    }

    /// Create an empty file and any missing ancestor directories.
    pub fn add_file(&self, path: impl AsRef<Path>) -> &Self {
        let mut inner = self.inner.write();
        insert_with_ancestors(&mut inner.entries, path.as_ref(), Kind::File);
        self
    }

    /// Make listing `path` fail as if permission were denied.
    pub fn deny_listing(&self, path: impl AsRef<Path>) -> &Self {
        self.inner.write().unreadable.insert(path.as_ref().to_path_buf());
        self
    }

    pub fn exists(&self, path: impl AsRef<Path>) -> bool {
        self.inner.read().entries.contains_key(path.as_ref())
    }

    /// Every path currently under `root` (excluding `root`), sorted.
    pub fn paths_under(&self, root: impl AsRef<Path>) -> Vec<PathBuf> {
        let root = root.as_ref();
        self.inner
            .read()
            .entries
            .range(root.to_path_buf()..)
            .map(|(p, _)| p)
            .take_while(|p| p.starts_with(root))
            .filter(|p| p.as_path() != root)
            .cloned()
            .collect()
    }
}

fn insert_with_ancestors(entries: &mut BTreeMap<PathBuf, Kind>, path: &Path, kind: Kind) {
    for ancestor in path.ancestors().skip(1) {
        if ancestor.as_os_str().is_empty() {
            break;
        }
        entries.entry(ancestor.to_path_buf()).or_insert(Kind::Dir);
    }
    entries.insert(path.to_path_buf(), kind);
}

impl FileSystem for MemoryFs {
    fn list_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        let inner = self.inner.read();
        match inner.entries.get(path) {
            None => return Err(io::ErrorKind::NotFound.into()),
            Some(Kind::File) => return Err(io::ErrorKind::NotADirectory.into()),
            Some(Kind::Dir) => {}
        }
        if inner.unreadable.contains(path) {
            return Err(io::ErrorKind::PermissionDenied.into());
        }

        let entries = inner
            .entries
            .range(path.to_path_buf()..)
            .skip(1)
            .take_while(|(p, _)| p.starts_with(path))
            .filter(|(p, _)| p.parent() == Some(path))
            .filter_map(|(p, kind)| {
                let name = p.file_name()?.to_os_string();
                Some(DirEntry {
                    name,
                    is_dir: *kind == Kind::Dir,
                })
            })
            .collect();
        Ok(entries)
    }

    fn remove(&self, path: &Path) -> io::Result<()> {
        let mut inner = self.inner.write();
        let kind = *inner
            .entries
            .get(path)
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))?;
        if kind == Kind::Dir {
            let has_children = inner
                .entries
                .range(path.to_path_buf()..)
                .nth(1)
                .is_some_and(|(p, _)| p.starts_with(path));
            if has_children {
                return Err(io::ErrorKind::DirectoryNotEmpty.into());
            }
        }
        inner.entries.remove(path);
        Ok(())
    }
}
