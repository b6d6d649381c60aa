// src/cli.rs

use clap::Parser;

/// Collects license-related files from a large source tree.
///
/// licsweep walks the source tree once, classifies every file by filename,
/// parent directory, and extension heuristics (no file content is read),
/// and copies each match into the output tree at the same relative path.
/// A collection log and a summary report are written to the output root.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Root of the source tree to scan. Must be an existing directory.
    pub source_dir: String,

    /// Directory to copy collected files into. Created if missing.
    pub output_dir: String,

    /// Echo every collected file to the console, not just the summary.
    /// Does not affect which files are selected.
    #[arg(short = 'v', long, action = clap::ArgAction::SetTrue)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_positional_args() {
        let cli = Cli::parse_from(["licsweep", "/src", "/out"]);
        assert_eq!(cli.source_dir, "/src");
        assert_eq!(cli.output_dir, "/out");
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_verbose_flag() {
        let cli = Cli::parse_from(["licsweep", "/src", "/out", "-v"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_requires_both_paths() {
        assert!(Cli::try_parse_from(["licsweep", "/src"]).is_err());
    }
}
