//! Error types for UTF-8 validation.
//!
//! Encoding problems are not errors: they are [`crate::Violation`]s in the
//! report. A [`ScanError`] means the scan itself could not complete.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A fatal failure that aborts the scan.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ScanError {
    /// No scan root was configured.
    #[error("No scan root provided")]
    MissingRoot,

    /// The scan root could not be resolved.
    #[error("Cannot resolve scan root {}: {source}", .path.display())]
    Root {
        /// The root as configured.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },

    /// The scan root exists but is not a directory.
    #[error("Scan root is not a directory: {}", .path.display())]
    NotADirectory {
        /// The resolved root.
        path: PathBuf,
    },

    /// Directory traversal failed (permission denied, link loop, dangling link).
    #[error("Directory traversal error: {0}")]
    Walk(#[from] walkdir::Error),

    /// A candidate file could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        /// The candidate file.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },

    /// An exclude glob pattern could not be parsed.
    #[error("Invalid exclude glob pattern '{pattern}': {source}")]
    InvalidExcludePattern {
        /// The pattern as given.
        pattern: String,
        /// Parser failure.
        source: glob::PatternError,
    },
}
