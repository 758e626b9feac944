//! Error type shared by the walker, the remover and the config loader.
//!
//! Filesystem failures keep the untouched `io::Error` as their source and
//! only attach the path that failed, so callers can still inspect the
//! original error kind (not found, permission denied, not empty).
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClearError {
    /// A directory could not be enumerated.
    #[error("cannot list {}: {source}", .path.display())]
    List {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A path could not be deleted. `removed` paths before it already were.
    #[error("cannot remove {}: {source}", .path.display())]
    Remove {
        path: PathBuf,
        removed: usize,
        #[source]
        source: io::Error,
    },

    /// The allow-list file could not be read.
    #[error("cannot read config {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no user config directory is available on this platform")]
    NoConfigDir,

    /// The walk was stopped before it finished, either through
    /// `FindHandle::cancel` or because the receiver went away.
    #[error("search was cancelled")]
    Cancelled,

    #[error("cannot start search thread: {0}")]
    Spawn(#[source] io::Error),

    #[error("search thread panicked")]
    ScannerPanicked,
}

impl ClearError {
    /// The underlying filesystem error, if this failure came from one.
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            Self::List { source, .. }
            | Self::Remove { source, .. }
            | Self::Config { source, .. } => Some(source),
            _ => None,
        }
    }

    /// Shorthand for `io_error().map(io::Error::kind)`.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        self.io_error().map(io::Error::kind)
    }

    /// The path the failure is attached to, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::List { path, .. } | Self::Remove { path, .. } | Self::Config { path, .. } => {
                Some(path)
            }
            _ => None,
        }
    }
}

pub type Result<T, E = ClearError> = std::result::Result<T, E>;
