// src/collect/mod.rs

//! The collector: drives one sequential traversal of the source root,
//! applies the classifier to every regular file, and materializes matches
//! into the output tree at their original relative paths.

mod copy;

use crate::cancellation::CancellationToken;
use crate::classify::{classify, Decision, PathDescriptor, RuleSet};
use crate::errors::AppError;
use crate::output::RunLog;
use copy::copy_with_metadata;
use log::{debug, error, warn};
use std::path::Path;
use walkdir::WalkDir;

/// Counters accumulated over one collection run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectionOutcome {
    /// Files classified as keep and copied successfully.
    pub collected: u64,
    /// Files classified as keep whose copy failed.
    pub skipped: u64,
    /// Files classified as drop. No I/O was performed for them.
    pub ignored: u64,
}

/// Walks `source_root` once and copies every license-related file into
/// `output_root` at the same relative path.
///
/// Every regular file is enumerated and classified, including files under
/// ignored directories: the classifier's ancestor rule drops those, and
/// they count towards `ignored`. Per-file copy failures are logged and
/// counted as `skipped` without aborting the traversal. Unreadable
/// directory entries are warned about and skipped.
///
/// The cancellation token is checked between files; an interrupted run
/// returns [`AppError::Interrupted`] with everything already copied left
/// on disk.
///
/// Both roots are expected to exist; pre-flight validation and creation of
/// the output root are the caller's job (see [`run`](crate::run)).
pub fn collect(
    source_root: &Path,
    output_root: &Path,
    rules: &RuleSet,
    token: &CancellationToken,
    run_log: &mut RunLog,
) -> Result<CollectionOutcome, AppError> {
    let mut outcome = CollectionOutcome::default();

    for entry_result in WalkDir::new(source_root) {
        if token.is_cancelled() {
            run_log.flush();
            return Err(AppError::Interrupted);
        }

        let entry = match entry_result {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Walker error, skipping entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let absolute_path = entry.path();
        let relative_path = match absolute_path.strip_prefix(source_root) {
            Ok(rel) => rel,
            Err(e) => {
                warn!(
                    "Failed to strip prefix '{}' from '{}', skipping: {}",
                    source_root.display(),
                    absolute_path.display(),
                    e
                );
                continue;
            }
        };

        let descriptor = PathDescriptor::new(relative_path);
        match classify(&descriptor, rules) {
            Decision::Drop => {
                outcome.ignored += 1;
            }
            Decision::Keep => {
                let dest_path = output_root.join(relative_path);
                match copy_with_metadata(absolute_path, &dest_path) {
                    Ok(()) => {
                        outcome.collected += 1;
                        debug!("Collected: {}", relative_path.display());
                        run_log.record(&format!("collected: {}", relative_path.display()));
                    }
                    Err(e) => {
                        outcome.skipped += 1;
                        error!("Copy failed for '{}': {}", absolute_path.display(), e);
                        run_log.record(&format!(
                            "copy failed: {} ({})",
                            relative_path.display(),
                            e
                        ));
                    }
                }
            }
        }
    }

    run_log.flush();
    Ok(outcome)
}
