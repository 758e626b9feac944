//! cleardir: find and delete empty directories.
//!
//! Thin binary entry point. All logic lives in the `cleardir-core`
//! and `cleardir-cli` crates.

use clap::Parser;
use cleardir_cli::Cli;
use tracing::Level;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Structured logging goes to stderr so it never mixes with the path list.
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("cleardir {} starting", env!("CARGO_PKG_VERSION"));

    cleardir_cli::run(&cli)
}
