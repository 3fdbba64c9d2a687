//! Configuration types for UTF-8 validation.
//!
//! The library never guesses where to scan: the caller fills in
//! `FsSourceConfig::root`. [`default_scan_root`] reproduces the CLI default of
//! scanning the project that contains the installed executable.

use std::path::{Path, PathBuf};

use crate::error::ScanError;

/// Directory names that are never descended into.
pub const DEFAULT_SKIP_DIRS: &[&str] = &["node_modules", ".next", ".git", "dist", "build", ".npm-cache"];

/// File extensions (with leading dot, case-sensitive) that are checked.
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    ".ts", ".tsx", ".js", ".jsx", ".mjs", ".cjs", ".json", ".md", ".yml", ".yaml",
];

/// Filesystem scan options.
///
/// NOTE: `root` is required. It is left empty by `Default` so that a forgotten
/// root fails loudly instead of scanning the current directory.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct FsSourceConfig {
    /// Directory to scan recursively.
    pub root: PathBuf,
    /// Path components that exclude an entry (and everything below it).
    pub skip_dirs: Vec<String>,
    /// Allowed file extensions. A leading dot is optional.
    pub extensions: Vec<String>,
    /// Extra exclude patterns (glob format), matched against the path
    /// relative to `root` and against the bare file name.
    pub exclude: Vec<String>,
    /// Whether to follow symbolic links.
    ///
    /// **Defaults to `false`.** When enabled, a dangling link or a link loop
    /// aborts the scan with a traversal error.
    pub follow_links: bool,
}

impl Default for FsSourceConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::new(),
            skip_dirs: DEFAULT_SKIP_DIRS.iter().map(|s| (*s).to_owned()).collect(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| (*s).to_owned()).collect(),
            exclude: Vec::new(),
            follow_links: false,
        }
    }
}

impl FsSourceConfig {
    /// Default config scanning `root`.
    #[must_use]
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }
}

/// Scan root derived from the running executable: the parent of the
/// directory that holds it.
///
/// # Errors
///
/// Returns [`ScanError::Root`] if the executable path cannot be resolved and
/// [`ScanError::MissingRoot`] if it has no grandparent directory.
pub fn default_scan_root() -> Result<PathBuf, ScanError> {
    let exe = std::env::current_exe()
        .and_then(|p| p.canonicalize())
        .map_err(|source| ScanError::Root {
            path: PathBuf::from("<current executable>"),
            source,
        })?;
    scan_root_for_exe(&exe).ok_or(ScanError::MissingRoot)
}

/// `<root>/<dir>/<exe>` -> `<root>`.
#[must_use]
pub fn scan_root_for_exe(exe: &Path) -> Option<PathBuf> {
    exe.parent()?.parent().map(Path::to_path_buf)
}
