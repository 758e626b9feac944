//! The allow-list file.
//!
//! Plain text, one trivial file name per line. Surrounding whitespace is
//! trimmed and blank lines are skipped. The default location is
//! `<user config dir>/cleardir/clearignore`; it is optional, so a missing
//! default file is the same as an empty one. A path the user named
//! explicitly must exist.
use crate::error::{ClearError, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_DIR_NAME: &str = "cleardir";
pub const CONFIG_FILE_NAME: &str = "clearignore";

/// Names read from the allow-list file, plus where they came from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Clearables {
    pub names: Vec<String>,
    pub path: PathBuf,
}

/// `<user config dir>/cleardir/clearignore`.
pub fn default_config_path() -> Result<PathBuf> {
    let base = dirs::config_dir().ok_or(ClearError::NoConfigDir)?;
    Ok(base.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Read the allow-list from `custom`, or from the default path if `None`.
pub fn load_clearables(custom: Option<&Path>) -> Result<Clearables> {
    let (path, optional) = match custom {
        Some(path) => (path.to_path_buf(), false),
        None => (default_config_path()?, true),
    };

    match read_config_lines(&path) {
        Ok(names) => {
            debug!("loaded {} names from {}", names.len(), path.display());
            Ok(Clearables { names, path })
        }
        Err(err) if optional && err.kind() == io::ErrorKind::NotFound => {
            debug!("no config at {}", path.display());
            Ok(Clearables {
                names: Vec::new(),
                path,
            })
        }
        Err(source) => Err(ClearError::Config { path, source }),
    }
}

fn read_config_lines(path: &Path) -> io::Result<Vec<String>> {
    let text = fs::read_to_string(path)?;
    Ok(parse_config(&text))
}

/// Parse allow-list text: trimmed, non-blank lines in file order.
pub fn parse_config(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
