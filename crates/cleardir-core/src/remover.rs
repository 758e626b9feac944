//! Deletes a list of already-classified paths.
//!
//! The remover does no traversal and no classification of its own. It
//! trusts the list it is given, which must be in the post-order the
//! scanner emitted: by the time a directory comes up, its clearable
//! children are already gone and the single-entry removal succeeds.
use crate::error::{ClearError, Result};
use crate::fs::FileSystem;
use std::path::Path;
use tracing::{debug, warn};

/// Remove each path in order, stopping at the first failure.
///
/// Returns how many paths were removed. On failure, every path before the
/// failing one has already been removed; nothing is rolled back.
pub fn remove_paths<F, P>(fs: &F, paths: &[P]) -> Result<usize>
where
    F: FileSystem + ?Sized,
    P: AsRef<Path>,
{
    for (removed, path) in paths.iter().enumerate() {
        let path = path.as_ref();
        if let Err(source) = fs.remove(path) {
            warn!(
                "Removal stopped at {} after {removed} of {} paths: {source}",
                path.display(),
                paths.len()
            );
            return Err(ClearError::Remove {
                path: path.to_path_buf(),
                removed,
                source,
            });
        }
        debug!("removed {}", path.display());
    }
    Ok(paths.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::depth::Depth;
    use crate::fs::MemoryFs;
    use crate::scanner::collect_clearables;
    use crate::trivial::TrivialSet;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn empty_list_is_a_no_op() {
        let fs = MemoryFs::new();
        fs.add_file("/r/f");
        assert_eq!(remove_paths::<_, PathBuf>(&fs, &[]).unwrap(), 0);
        assert!(fs.exists("/r/f"));
    }

    #[test]
    fn children_then_parent_succeeds() {
        let fs = MemoryFs::new();
        fs.add_file("/r/d/s0").add_file("/r/d/s1");
        let n = remove_paths(&fs, &["/r/d/s0", "/r/d/s1", "/r/d"]).unwrap();
        assert_eq!(n, 3);
        assert!(fs.paths_under("/r").is_empty());
    }

    #[test]
    fn non_empty_dir_fails_after_earlier_paths() {
        let fs = MemoryFs::new();
        fs.add_file("/r/a").add_file("/r/d/keep").add_file("/r/z");

        let err = remove_paths(&fs, &["/r/a", "/r/d", "/r/z"]).unwrap_err();
        match &err {
            ClearError::Remove { path, removed, .. } => {
                assert_eq!(path, Path::new("/r/d"));
                assert_eq!(*removed, 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.io_kind(), Some(io::ErrorKind::DirectoryNotEmpty));
        assert!(!fs.exists("/r/a"));
        assert!(fs.exists("/r/d/keep"));
        assert!(fs.exists("/r/z"));
    }

    #[test]
    fn missing_path_fails() {
        let fs = MemoryFs::new();
        fs.add_dir("/r");
        let err = remove_paths(&fs, &["/r/foo"]).unwrap_err();
        assert_eq!(err.io_kind(), Some(io::ErrorKind::NotFound));
    }

    #[test]
    fn removing_a_full_walk_leaves_exactly_the_rest() {
        let fs = MemoryFs::new();
        fs.add_dir("/r/d0")
            .add_file("/r/d1/f0")
            .add_file("/r/d1/f1")
            .add_file("/r/d1/sd0/f0")
            .add_dir("/r/d1/sd1")
            .add_dir("/r/d2/sd3")
            .add_file("/r/f1");
        let trivials: TrivialSet = ["f0"].into_iter().collect();

        let before = fs.paths_under("/r");
        let found = collect_clearables(&fs, Path::new("/r"), &trivials, Depth::Unlimited).unwrap();
        remove_paths(&fs, &found).unwrap();

        let expected: Vec<PathBuf> = before.into_iter().filter(|p| !found.contains(p)).collect();
        assert_eq!(fs.paths_under("/r"), expected);
        assert_eq!(
            expected,
            ["/r/d1", "/r/d1/f1", "/r/f1"].map(PathBuf::from).to_vec()
        );
    }
}
