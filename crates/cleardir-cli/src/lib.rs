//! cleardir CLI: argument parsing, confirmation prompt and the
//! discover-then-commit driver. Classification and removal live in
//! `cleardir-core`.
pub mod args;
pub mod driver;
pub mod prompt;

pub use args::{Cli, ConfigChoice};
pub use driver::{commit, discover, run, run_with, Plan};
