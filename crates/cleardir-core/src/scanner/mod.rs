//! Scanner module: finds clearable paths under a root.
//!
//! [`classify`] holds the synchronous post-order walk. [`start_find`] runs
//! the same walk on a background thread and streams each clearable path to
//! the caller over a bounded crossbeam channel, so the caller can display
//! results while the walk is still running.
//!
//! The channel disconnects only once the walker has returned. Its terminal
//! result (success with a [`FindSummary`], or the first error) is read with
//! [`FindHandle::finish`] after the stream has been drained.
pub mod classify;

pub use classify::{collect_clearables, find_clearables, FindSummary};

use crate::depth::Depth;
use crate::error::{ClearError, Result};
use crate::fs::FileSystem;
use crate::trivial::TrivialSet;
use crossbeam_channel::Receiver;
use std::ops::ControlFlow;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use tracing::{info, warn};

/// Maximum number of matches that may queue up before the walker blocks.
///
/// The consumer is expected to drain the channel until it disconnects. If
/// it falls behind, the walker stalls rather than buffering an unbounded
/// list of paths for a huge tree.
pub const MATCH_CHANNEL_CAPACITY: usize = 1_024;

/// Stack for the walker thread. Recursion depth follows directory depth.
const SCANNER_STACK_SIZE: usize = 64 * 1024 * 1024;

/// Handle to a running walk.
pub struct FindHandle {
    /// Clearable paths in post-order. Disconnects when the walk returns.
    pub matches: Receiver<PathBuf>,
    cancel_flag: Arc<AtomicBool>,
    thread: thread::JoinHandle<Result<FindSummary>>,
}

impl FindHandle {
    /// Ask the walker to stop before listing its next directory.
    pub fn cancel(&self) {
        self.cancel_flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_flag.load(Ordering::Relaxed)
    }

    /// Wait for the walker and return its terminal result.
    ///
    /// Call this after draining `matches`. Anything still queued is
    /// discarded, and a walker that was blocked on a full channel stops
    /// with [`ClearError::Cancelled`].
    pub fn finish(self) -> Result<FindSummary> {
        let FindHandle {
            matches, thread, ..
        } = self;
        drop(matches);
        thread.join().unwrap_or(Err(ClearError::ScannerPanicked))
    }
}

/// Start walking `root` on a background thread.
pub fn start_find<F>(
    fs: Arc<F>,
    root: PathBuf,
    trivials: TrivialSet,
    depth: Depth,
) -> Result<FindHandle>
where
    F: FileSystem + ?Sized + 'static,
{
    let (match_tx, match_rx) = crossbeam_channel::bounded::<PathBuf>(MATCH_CHANNEL_CAPACITY);
    let cancel_flag = Arc::new(AtomicBool::new(false));
    let cancel_clone = cancel_flag.clone();

    let thread = thread::Builder::new()
        .name("cleardir-scanner".into())
        .stack_size(SCANNER_STACK_SIZE)
        .spawn(move || {
            info!(
                "Searching {} ({} trivial names, depth {:?})",
                root.display(),
                trivials.len(),
                depth
            );
            // `match_tx` moves into the sink, so the channel closes when `run` returns.
            let sink = move |path: PathBuf| match match_tx.send(path) {
                Ok(()) => ControlFlow::Continue(()),
                Err(_) => ControlFlow::Break(()),
            };
            let result = classify::run(
                &*fs,
                &root,
                &trivials,
                depth,
                sink,
                Some(&cancel_clone),
            );
            match &result {
                Ok(summary) => info!(
                    "Search complete: {} clearable of {} entries in {:?}",
                    summary.matches, summary.entries_seen, summary.duration
                ),
                Err(err) => warn!("Search of {} stopped: {err}", root.display()),
            }
            result
        })
        .map_err(ClearError::Spawn)?;

    Ok(FindHandle {
        matches: match_rx,
        cancel_flag,
        thread,
    })
}
