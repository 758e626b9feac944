//! Command-line arguments.
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Value of `--config` that prints the resolved config path instead of running.
pub const PRINT_CONFIG_PATH: &str = "?";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "cleardir",
    version,
    about = "Clear empty directories",
    long_about = "Cleardir finds and deletes empty folders. Folders are considered empty \
when there are either no files located inside a given folder (including \
subfolders), or only white-listed files that are safe for deletion.",
    after_help = "Examples:\n  cleardir\n  cleardir some/other/path\n  cleardir -y -s\n  cleardir --dry"
)]
pub struct Cli {
    /// Directory to clear (defaults to the current directory)
    pub path: Option<PathBuf>,

    /// Configuration file path; "?" prints the resolved path and exits
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<String>,

    /// Files that can be deleted safely (repeatable or comma-separated)
    #[arg(short, long, value_name = "NAME", value_delimiter = ',')]
    pub files: Vec<String>,

    /// Limit how many sub-directories to descend into at most; -1 for no limit
    #[arg(
        short = 'd',
        long,
        value_name = "N",
        default_value_t = -1,
        allow_negative_numbers = true
    )]
    pub max_depth: i64,

    /// Only list clearable files and directories
    #[arg(long)]
    pub dry: bool,

    /// Skip and confirm prompts
    #[arg(short, long)]
    pub yes: bool,

    /// Silence standard output; implies --yes
    #[arg(short, long)]
    pub silent: bool,

    /// Log more detail to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Where the allow-list should come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigChoice {
    Default,
    Path(PathBuf),
    PrintPath,
}

impl Cli {
    pub fn config_choice(&self) -> ConfigChoice {
        match self.config.as_deref() {
            None | Some("") => ConfigChoice::Default,
            Some(PRINT_CONFIG_PATH) => ConfigChoice::PrintPath,
            Some(path) => ConfigChoice::Path(PathBuf::from(path)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("cleardir").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults() {
        let cli = parse(&[]);
        assert_eq!(cli.path, None);
        assert_eq!(cli.max_depth, -1);
        assert!(cli.files.is_empty());
        assert!(!cli.dry && !cli.yes && !cli.silent);
        assert_eq!(cli.config_choice(), ConfigChoice::Default);
    }

    #[test]
    fn files_repeat_and_split_on_commas() {
        let cli = parse(&["-f", "a", "--files", "b,c", "-f", "d"]);
        assert_eq!(cli.files, ["a", "b", "c", "d"]);
    }

    #[test]
    fn negative_depth_parses() {
        assert_eq!(parse(&["-d", "-1"]).max_depth, -1);
        assert_eq!(parse(&["--max-depth", "3", "some/dir"]).max_depth, 3);
    }

    #[test]
    fn config_question_mark_prints_path() {
        assert_eq!(parse(&["-c", "?"]).config_choice(), ConfigChoice::PrintPath);
        assert_eq!(
            parse(&["--config", "my-cfg"]).config_choice(),
            ConfigChoice::Path(PathBuf::from("my-cfg"))
        );
    }

    #[test]
    fn verbosity_counts() {
        assert_eq!(parse(&["-vv"]).verbose, 2);
    }

    #[test]
    fn clap_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
