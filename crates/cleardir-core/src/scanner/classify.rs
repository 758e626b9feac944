//! Post-order classification of a directory tree.
//!
//! A file is clearable iff its base name is trivial. A directory is
//! clearable iff every direct child is clearable, so an empty directory
//! is clearable. Each clearable child is handed to the sink the moment
//! its verdict is known, which gives post-order: a directory's clearable
//! descendants always come before the directory itself.
//!
//! A non-clearable child makes its parent non-clearable but the walk still
//! visits the remaining siblings, so every independently clearable subtree
//! is found. The root itself is never emitted.
use crate::depth::Depth;
use crate::error::{ClearError, Result};
use crate::fs::FileSystem;
use crate::trivial::TrivialSet;
use std::ops::ControlFlow;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Counters gathered during one walk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FindSummary {
    pub dirs_listed: u64,
    pub entries_seen: u64,
    pub matches: u64,
    pub duration: Duration,
}

struct Classifier<'a, F: ?Sized, S> {
    fs: &'a F,
    trivials: &'a TrivialSet,
    sink: S,
    cancel: Option<&'a AtomicBool>,
    summary: FindSummary,
}

impl<F, S> Classifier<'_, F, S>
where
    F: FileSystem + ?Sized,
    S: FnMut(PathBuf) -> ControlFlow<()>,
{
    /// Whether `path` is clearable. Emits its clearable descendants on the way.
    fn classify(&mut self, path: &Path, depth: Depth) -> Result<bool> {
        if self.cancel.is_some_and(|c| c.load(Ordering::Relaxed)) {
            return Err(ClearError::Cancelled);
        }

        let entries = self.fs.list_dir(path).map_err(|source| ClearError::List {
            path: path.to_path_buf(),
            source,
        })?;
        self.summary.dirs_listed += 1;
        self.summary.entries_seen += entries.len() as u64;
        trace!("{}: {} entries", path.display(), entries.len());

        let mut all_clearable = true;
        for entry in entries {
            let child = path.join(&entry.name);
            let clearable = if !entry.is_dir {
                self.trivials.contains(&entry.name)
            } else if let Some(next) = depth.descend() {
                self.classify(&child, next)?
            } else {
                false
            };

            if clearable {
                self.summary.matches += 1;
                if (self.sink)(child).is_break() {
                    return Err(ClearError::Cancelled);
                }
            } else {
                all_clearable = false;
            }
        }

        Ok(all_clearable)
    }
}

/// Walk `root` and pass every clearable path to `sink`, in post-order.
///
/// The first directory that cannot be listed aborts the walk with
/// [`ClearError::List`]; paths already handed to `sink` stay handed.
/// Returning `ControlFlow::Break` from `sink` stops the walk with
/// [`ClearError::Cancelled`].
pub fn find_clearables<F, S>(
    fs: &F,
    root: &Path,
    trivials: &TrivialSet,
    depth: Depth,
    sink: S,
) -> Result<FindSummary>
where
    F: FileSystem + ?Sized,
    S: FnMut(PathBuf) -> ControlFlow<()>,
{
    run(fs, root, trivials, depth, sink, None)
}

pub(crate) fn run<F, S>(
    fs: &F,
    root: &Path,
    trivials: &TrivialSet,
    depth: Depth,
    sink: S,
    cancel: Option<&AtomicBool>,
) -> Result<FindSummary>
where
    F: FileSystem + ?Sized,
    S: FnMut(PathBuf) -> ControlFlow<()>,
{
    let start = Instant::now();
    let mut classifier = Classifier {
        fs,
        trivials,
        sink,
        cancel,
        summary: FindSummary::default(),
    };
    // Only the root's contents are emitted, never the root itself.
    let root_clearable = classifier.classify(root, depth)?;
    classifier.summary.duration = start.elapsed();

    debug!(
        "walk of {} done: {} dirs, {} entries, {} clearable (root clearable: {root_clearable}) in {:?}",
        root.display(),
        classifier.summary.dirs_listed,
        classifier.summary.entries_seen,
        classifier.summary.matches,
        classifier.summary.duration,
    );
    Ok(classifier.summary)
}

/// Run a walk to completion and collect the clearable paths in emission order.
pub fn collect_clearables<F>(
    fs: &F,
    root: &Path,
    trivials: &TrivialSet,
    depth: Depth,
) -> Result<Vec<PathBuf>>
where
    F: FileSystem + ?Sized,
{
    let mut found = Vec::new();
    find_clearables(fs, root, trivials, depth, |path| {
        found.push(path);
        ControlFlow::Continue(())
    })?;
    Ok(found)
}
