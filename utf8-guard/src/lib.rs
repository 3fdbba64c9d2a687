//! # utf8-guard
//!
//! Checks that source, markup and config files in a project tree are valid
//! UTF-8.
//!
//! Invalid content is reported as data ([`Violation`]s in a
//! [`ValidationReport`]); anything that prevents the scan from completing
//! (unreadable root, traversal failure, unreadable file) is a [`ScanError`]
//! and aborts the run.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use utf8_guard::{validate_fs, FsSourceConfig};
//!
//! let mut config = FsSourceConfig::for_root("web");
//! config.exclude = vec!["fixtures/*".to_owned()];
//!
//! let report = validate_fs(&config).unwrap();
//! println!("Files scanned: {}", report.scanned_files);
//! println!("Violations: {}", report.violations_count());
//! println!("OK: {}", report.ok);
//! ```

mod config;
mod error;
pub mod output;
mod report;
mod strategy;
pub mod utf8;

pub use config::{
    DEFAULT_EXTENSIONS, DEFAULT_SKIP_DIRS, FsSourceConfig, default_scan_root, scan_root_for_exe,
};
pub use error::ScanError;
pub use report::{ValidationReport, Violation};

use std::path::Path;

use tracing::{debug, info};

use strategy::fs::{candidate_files, compile_excludes};

/// Validate the UTF-8 encoding of every candidate file under `config.root`.
///
/// Files are visited in a stable depth-first order and violations keep that
/// order. Skip directories are never entered and files outside the extension
/// allow-list are never opened.
///
/// # Errors
///
/// Returns an error if the root is missing or not a directory, if an exclude
/// pattern is invalid, or on the first traversal or read failure. No partial
/// report is produced in that case.
pub fn validate_fs(config: &FsSourceConfig) -> Result<ValidationReport, ScanError> {
    if config.root.as_os_str().is_empty() {
        return Err(ScanError::MissingRoot);
    }
    let root = config
        .root
        .canonicalize()
        .map_err(|source| ScanError::Root {
            path: config.root.clone(),
            source,
        })?;
    if !root.is_dir() {
        return Err(ScanError::NotADirectory { path: root });
    }
    let exclude = compile_excludes(&config.exclude)?;

    info!(root = %root.display(), "scanning");

    let mut violations = Vec::new();
    let mut scanned_files: usize = 0;
    for file in candidate_files(&root, config, &exclude) {
        let file = file?;
        let content = read_file(&file)?;
        scanned_files += 1;

        if let Some(violation) = Violation::detect(&file, &content) {
            info!(file = %file.display(), offset = violation.offset, "invalid UTF-8");
            violations.push(violation);
        } else {
            debug!(file = %file.display(), bytes = content.len(), "ok");
        }
    }

    info!(scanned_files, violations = violations.len(), "scan finished");
    Ok(ValidationReport::new(scanned_files, violations))
}

fn read_file(path: &Path) -> Result<Vec<u8>, ScanError> {
    std::fs::read(path).map_err(|source| ScanError::Read {
        path: path.to_path_buf(),
        source,
    })
}
