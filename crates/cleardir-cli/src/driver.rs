//! The discover-then-commit driver.
//!
//! Phase one runs the background search to completion, printing each
//! clearable path as it streams in and collecting them in order. Nothing
//! is touched on disk until the search has returned successfully and the
//! user has confirmed. Phase two hands that exact ordered list to the
//! remover.
use crate::args::{Cli, ConfigChoice};
use crate::prompt::confirm;
use anyhow::{bail, Context, Result};
use cleardir_core::{
    default_config_path, load_clearables, remove_paths, start_find, Depth, FileSystem,
    FindSummary, OsFs, TrivialSet,
};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// How many times an unclear answer to the prompt is asked again.
const CONFIRM_ATTEMPTS: u32 = 1;

/// Result of the discovery phase.
#[derive(Debug)]
pub struct Plan {
    pub root: PathBuf,
    /// Clearable paths in the post-order they were found.
    pub paths: Vec<PathBuf>,
    pub summary: FindSummary,
}

/// Phase one: search `root`, calling `on_match` for each path as it arrives.
///
/// If `on_match` fails the search is abandoned and the error returned.
pub fn discover<F, M>(
    fs: Arc<F>,
    root: PathBuf,
    trivials: TrivialSet,
    depth: Depth,
    mut on_match: M,
) -> Result<Plan>
where
    F: FileSystem + ?Sized + 'static,
    M: FnMut(&Path) -> io::Result<()>,
{
    let handle = start_find(fs, root.clone(), trivials, depth)?;
    let mut paths = Vec::new();
    for path in handle.matches.iter() {
        on_match(&path)?;
        paths.push(path);
    }
    // The stream is closed; only now is the walker's own result final.
    let summary = handle.finish()?;
    Ok(Plan {
        root,
        paths,
        summary,
    })
}

/// Phase two: remove everything in the plan, in order.
pub fn commit<F>(fs: &F, plan: &Plan) -> Result<usize>
where
    F: FileSystem + ?Sized,
{
    let removed = remove_paths(fs, &plan.paths)?;
    info!("Removed {removed} paths under {}", plan.root.display());
    Ok(removed)
}

/// Run against the real disk and the process's stdin/stdout.
pub fn run(cli: &Cli) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with(cli, Arc::new(OsFs), stdin.lock(), stdout.lock())
}

pub fn run_with<F, R, W>(cli: &Cli, fs: Arc<F>, mut input: R, mut out: W) -> Result<()>
where
    F: FileSystem + ?Sized + 'static,
    R: BufRead,
    W: Write,
{
    let clearables = match cli.config_choice() {
        ConfigChoice::PrintPath => {
            let path = default_config_path()?;
            writeln!(out, "{}", path.display())?;
            return Ok(());
        }
        ConfigChoice::Default => load_clearables(None)?,
        ConfigChoice::Path(path) => load_clearables(Some(&path))?,
    };

    let mut trivials: TrivialSet = clearables.names.iter().collect();
    trivials.extend(&cli.files);

    let raw_root = cli.path.clone().unwrap_or_else(|| PathBuf::from("."));
    let root = std::path::absolute(&raw_root)
        .with_context(|| format!("cannot resolve {}", raw_root.display()))?;
    let silent = cli.silent;

    let plan = discover(
        fs.clone(),
        root,
        trivials,
        Depth::from_max(cli.max_depth),
        |path| {
            if silent {
                Ok(())
            } else {
                writeln!(out, "- {}", path.display())
            }
        },
    )?;
    info!(
        "{} clearable paths under {} ({} directories listed)",
        plan.paths.len(),
        plan.root.display(),
        plan.summary.dirs_listed
    );

    if plan.paths.is_empty() {
        if !silent {
            writeln!(out, "All clear!")?;
        }
        return Ok(());
    }
    if !silent {
        writeln!(out, "Can clear {} files.", plan.paths.len())?;
    }

    if cli.dry {
        return Ok(());
    }

    let proceed =
        silent || confirm(&mut input, &mut out, "Continue?", CONFIRM_ATTEMPTS, cli.yes)?;
    if !proceed {
        bail!("Aborted");
    }

    commit(&*fs, &plan)?;
    out.flush()?;
    Ok(())
}
