//! `licsweep` is a library and command-line tool for collecting
//! license-related files out of a large source tree.
//!
//! It walks a source root once, classifies every regular file by filename,
//! parent-directory, and extension heuristics (no file content is ever
//! read), and copies each match into an output tree at the same relative
//! path. A per-file collection log and a summary report are written to the
//! output root.
//!
//! As a library it exposes the two components separately:
//! 1. **Classifier** ([`classify`]): a pure path-to-decision predicate,
//!    evaluated as an ordered chain of rules over a [`PathDescriptor`].
//! 2. **Collector** ([`collect`]): the sequential traversal that applies
//!    the classifier and materializes matches.
//!
//! # Example: Library Usage
//!
//! ```
//! use licsweep::{run, CancellationToken};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! // 1. Set up a source tree with one license file and one source file.
//! let temp = tempdir().unwrap();
//! let source = temp.path().join("tree");
//! fs::create_dir_all(source.join("third_party/zlib")).unwrap();
//! fs::write(source.join("third_party/zlib/LICENSE"), "zlib license").unwrap();
//! fs::write(source.join("third_party/zlib/inflate.c"), "/* code */").unwrap();
//!
//! // 2. Run the collection.
//! let output = temp.path().join("collected");
//! let outcome = run(&source, &output, &CancellationToken::new()).unwrap();
//!
//! // 3. The license was mirrored at its relative path; the code was not.
//! assert_eq!(outcome.collected, 1);
//! assert_eq!(outcome.ignored, 1);
//! assert!(output.join("third_party/zlib/LICENSE").is_file());
//! ```

pub mod cancellation;
pub mod classify;
pub mod cli;
pub mod collect;
pub mod errors;
pub mod output;
pub mod signal;

// Re-export key public types for easier use as a library
pub use cancellation::CancellationToken;
pub use classify::{classify, Decision, PathDescriptor, RuleSet};
pub use collect::{collect, CollectionOutcome};
pub use errors::AppError;

use errors::io_error_with_path;
use log::{error, info};
use output::RunLog;
use std::fs;
use std::path::Path;

/// Executes a complete collection run: pre-flight checks, traversal, and
/// report generation.
///
/// Validates that `source_dir` is an existing directory, creates
/// `output_dir` (and intermediate directories) if absent, walks the source
/// tree, and writes the summary report to the output root. The per-file
/// collection log is best-effort; a failure to create it does not abort
/// the run, and neither does a failure to write the final report.
///
/// # Errors
/// * [`AppError::SourceNotADirectory`] if `source_dir` is missing or not a
///   directory. Nothing is touched in that case.
/// * [`AppError::CreateOutputDir`] if the output root cannot be created.
/// * [`AppError::Interrupted`] if the token is cancelled mid-run; files
///   already copied remain on disk.
pub fn run(
    source_dir: &Path,
    output_dir: &Path,
    token: &CancellationToken,
) -> Result<CollectionOutcome, AppError> {
    if !source_dir.is_dir() {
        return Err(AppError::SourceNotADirectory(
            source_dir.display().to_string(),
        ));
    }

    fs::create_dir_all(output_dir).map_err(|e| AppError::CreateOutputDir {
        path: output_dir.display().to_string(),
        source: e,
    })?;

    let source_root = source_dir
        .canonicalize()
        .map_err(|e| io_error_with_path(e, source_dir))?;
    let output_root = output_dir
        .canonicalize()
        .map_err(|e| io_error_with_path(e, output_dir))?;

    let mut run_log = RunLog::create(&output_root);
    info!(
        "Collecting license files from '{}' into '{}'",
        source_root.display(),
        output_root.display()
    );

    let rules = RuleSet::default();
    let outcome = collect(&source_root, &output_root, &rules, token, &mut run_log)?;

    if let Err(e) = output::write_report_file(&source_root, &output_root, &outcome) {
        error!("Could not write report file: {}", e);
    }

    info!(
        "Collection complete: {} collected, {} skipped, {} ignored",
        outcome.collected, outcome.skipped, outcome.ignored
    );
    Ok(outcome)
}
