//! Defines application-specific error types.
//!
//! This module provides the `AppError` enum, which categorizes the failures
//! that can occur during a collection run, offering more context than
//! generic I/O or `anyhow` errors.

use thiserror::Error;

/// Application-specific errors used throughout `licsweep`.
#[derive(Error, Debug)]
pub enum AppError {
    // --- Pre-flight errors (fatal, nothing touched yet) ---
    /// The source path does not exist or is not a directory.
    #[error("source directory does not exist or is not a directory: '{0}'")]
    SourceNotADirectory(String),

    /// The output root (or its parents) could not be created.
    #[error("failed to create output directory '{path}': {source}")]
    CreateOutputDir {
        /// The output directory that could not be created.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    // --- I/O errors ---
    /// Error occurring during file or directory access (read, write, metadata).
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        /// The path that caused the I/O error.
        path: String, // Use String to avoid lifetime issues if PathBuf is dropped
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    // --- Signal handling ---
    /// The run was cancelled by the user (e.g., Ctrl+C).
    #[error("Operation cancelled by user (Ctrl+C)")]
    Interrupted,
}

/// Helper to create an [`AppError::Io`] with path context.
pub fn io_error_with_path<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> AppError {
    AppError::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}
