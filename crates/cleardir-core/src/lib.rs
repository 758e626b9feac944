//! cleardir core: classification, removal, and the allow-list source.
//!
//! This crate does no terminal I/O. It is driven by `cleardir-cli` but can
//! be used on its own.
//!
//! # Modules
//!
//! - [`scanner`]: post-order search for clearable paths, synchronous or on
//!   a background thread with a streaming channel.
//! - [`remover`]: deletes a list of paths in order, fail-fast.
//! - [`fs`]: the filesystem capability, with disk and in-memory backends.
//! - [`trivial`]: the set of trivial file names.
//! - [`depth`]: recursion budget.
//! - [`config`]: the plain-text allow-list file.
//! - [`error`]: the shared error type.
pub mod config;
pub mod depth;
pub mod error;
pub mod fs;
pub mod remover;
pub mod scanner;
pub mod trivial;

pub use config::{default_config_path, load_clearables, Clearables};
pub use depth::Depth;
pub use error::{ClearError, Result};
pub use fs::{DirEntry, FileSystem, MemoryFs, OsFs};
pub use remover::remove_paths;
pub use scanner::{collect_clearables, find_clearables, start_find, FindHandle, FindSummary};
pub use trivial::TrivialSet;
