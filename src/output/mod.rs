// src/output/mod.rs

//! Writers for the two artifacts generated at the output root: the
//! per-file collection log and the end-of-run summary report.

mod report;
mod run_log;

pub use report::{write_report, write_report_file};
pub use run_log::RunLog;

/// Filename of the plain-text per-file log written to the output root.
pub const LOG_FILE_NAME: &str = "collection_log.txt";

/// Filename of the plain-text summary report written to the output root.
pub const REPORT_FILE_NAME: &str = "COLLECTION_REPORT.txt";
