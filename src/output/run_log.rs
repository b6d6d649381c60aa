// src/output/run_log.rs

use crate::output::LOG_FILE_NAME;
use log::warn;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Best-effort per-file log sink (`collection_log.txt` in the output root).
///
/// The log is optional: if the file cannot be created, a warning is logged
/// and every subsequent [`record`](Self::record) call is a no-op. A write
/// failure mid-run likewise disables the sink instead of aborting the
/// collection.
pub struct RunLog {
    writer: Option<BufWriter<File>>,
}

impl RunLog {
    /// Tries to create the log file in `output_root`.
    pub fn create(output_root: &Path) -> Self {
        let log_path = output_root.join(LOG_FILE_NAME);
        let writer = match File::create(&log_path) {
            Ok(file) => Some(BufWriter::new(file)),
            Err(e) => {
                warn!(
                    "Could not create log file '{}', continuing without it: {}",
                    log_path.display(),
                    e
                );
                None
            }
        };
        Self { writer }
    }

    /// A log that discards everything. Used when no sink is wanted.
    pub fn disabled() -> Self {
        Self { writer: None }
    }

    /// Whether the log file was created successfully.
    pub fn is_active(&self) -> bool {
        self.writer.is_some()
    }

    /// Appends one line to the log, if active.
    pub fn record(&mut self, line: &str) {
        if let Some(writer) = self.writer.as_mut() {
            if let Err(e) = writeln!(writer, "{line}") {
                warn!("Log file write failed, disabling log: {}", e);
                self.writer = None;
            }
        }
    }

    /// Flushes any buffered log lines to disk.
    pub fn flush(&mut self) {
        if let Some(writer) = self.writer.as_mut() {
            if let Err(e) = writer.flush() {
                warn!("Log file flush failed: {}", e);
            }
        }
    }
}

impl Drop for RunLog {
    fn drop(&mut self) {
        self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_run_log_writes_lines() {
        let dir = tempdir().unwrap();
        let mut log = RunLog::create(dir.path());
        assert!(log.is_active());
        log.record("collected: a/LICENSE");
        log.record("copy failed: b/NOTICE");
        drop(log);

        let content = fs::read_to_string(dir.path().join(LOG_FILE_NAME)).unwrap();
        assert_eq!(content, "collected: a/LICENSE\ncopy failed: b/NOTICE\n");
    }

    #[test]
    fn test_run_log_missing_directory_is_non_fatal() {
        let dir = tempdir().unwrap();
        let mut log = RunLog::create(&dir.path().join("does_not_exist"));
        assert!(!log.is_active());
        // Recording into a disabled log is a no-op, not a panic.
        log.record("collected: a/LICENSE");
    }

    #[test]
    fn test_disabled_log() {
        let mut log = RunLog::disabled();
        assert!(!log.is_active());
        log.record("ignored");
    }
}
