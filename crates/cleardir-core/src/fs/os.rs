//! The real disk, via `std::fs`.
//!
//! Listings are sorted by name. `read_dir` yields entries in whatever order
//! the filesystem stores them; sorting makes the emitted path order
//! reproducible across platforms and runs.
//!
//! Symlinks are never followed: an entry's kind comes from its own file
//! type, so a link to a directory is classified (and removed) as a plain
//! entry.
use super::{DirEntry, FileSystem};
use std::fs;
use std::io;
use std::path::Path;
use tracing::trace;

#[derive(Clone, Copy, Debug, Default)]
pub struct OsFs;

impl OsFs {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for OsFs {
    fn list_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            let is_dir = entry.file_type()?.is_dir();
            entries.push(DirEntry {
                name: entry.file_name(),
                is_dir,
            });
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        trace!("listed {} ({} entries)", path.display(), entries.len());
        Ok(entries)
    }

    fn remove(&self, path: &Path) -> io::Result<()> {
        // symlink_metadata so a link to a directory is unlinked, not descended.
        let meta = fs::symlink_metadata(path)?;
        if meta.is_dir() {
            fs::remove_dir(path)
        } else {
            fs::remove_file(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn list_dir_is_sorted_and_typed() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("b"), "").unwrap();
        fs::create_dir(tmp.path().join("a")).unwrap();
        fs::write(tmp.path().join("c"), "").unwrap();

        let entries = OsFs.list_dir(tmp.path()).unwrap();
        assert_eq!(
            entries,
            vec![DirEntry::dir("a"), DirEntry::file("b"), DirEntry::file("c")]
        );
    }

    #[test]
    fn list_missing_dir_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let err = OsFs.list_dir(&tmp.path().join("missing")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn remove_refuses_non_empty_dir() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("d");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("keep"), "x").unwrap();

        assert!(OsFs.remove(&dir).is_err());
        assert!(dir.join("keep").exists());

        OsFs.remove(&dir.join("keep")).unwrap();
        OsFs.remove(&dir).unwrap();
        assert!(!dir.exists());
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_dir_is_listed_as_plain_entry() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("target");
        fs::create_dir(&target).unwrap();
        std::os::unix::fs::symlink(&target, tmp.path().join("link")).unwrap();

        let entries = OsFs.list_dir(tmp.path()).unwrap();
        assert_eq!(
            entries,
            vec![DirEntry::file("link"), DirEntry::dir("target")]
        );

        OsFs.remove(&tmp.path().join("link")).unwrap();
        assert!(target.exists());
    }
}
