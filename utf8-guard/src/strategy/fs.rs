//! Filesystem validation source.
//!
//! Discovers candidate files under the scan root:
//! - Entries named like a skip directory are pruned, so nothing below them is
//!   ever opened
//! - Only regular files are yielded. A symlink counts when its target is a
//!   regular file; the link path is reported. Linked directories are not
//!   descended into and dangling links are skipped, unless `follow_links` is
//!   set
//! - Only allow-listed extensions are yielded (case-sensitive)
//! - Entries are visited depth-first, sorted by file name, so reports are
//!   reproducible

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use glob::Pattern;
use tracing::trace;
use walkdir::{DirEntry, WalkDir};

use crate::config::FsSourceConfig;
use crate::error::ScanError;

/// Compile the user exclude globs.
///
/// # Errors
///
/// Returns [`ScanError::InvalidExcludePattern`] for the first pattern that
/// does not parse.
pub fn compile_excludes(patterns: &[String]) -> Result<Vec<Pattern>, ScanError> {
    patterns
        .iter()
        .map(|pattern| {
            Pattern::new(pattern).map_err(|source| ScanError::InvalidExcludePattern {
                pattern: pattern.clone(),
                source,
            })
        })
        .collect()
}

/// Lazily walk `root` and yield candidate files in traversal order.
///
/// Traversal failures are yielded as `Err` items; the caller decides whether
/// to stop.
pub fn candidate_files<'a>(
    root: &'a Path,
    config: &'a FsSourceConfig,
    exclude: &'a [Pattern],
) -> impl Iterator<Item = Result<PathBuf, ScanError>> + 'a {
    WalkDir::new(root)
        .follow_links(config.follow_links)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(move |entry| entry.depth() == 0 || !is_skip_name(entry, &config.skip_dirs))
        .filter_map(move |entry_result| match entry_result {
            Ok(entry) => is_candidate(&entry, root, config, exclude).then(|| Ok(entry.into_path())),
            Err(walk_err) => Some(Err(ScanError::Walk(walk_err))),
        })
}

/// Check if an entry's own name is a skip name (for `WalkDir::filter_entry`).
///
/// Applied to every entry below the root, which is the same as testing every
/// component of the root-relative path.
fn is_skip_name(entry: &DirEntry, skip_dirs: &[String]) -> bool {
    let skipped = entry
        .file_name()
        .to_str()
        .is_some_and(|name| skip_dirs.iter().any(|d| d == name));
    if skipped {
        trace!(path = %entry.path().display(), "pruned skip directory");
    }
    skipped
}

fn is_candidate(entry: &DirEntry, root: &Path, config: &FsSourceConfig, exclude: &[Pattern]) -> bool {
    if !is_regular_file(entry) {
        return false;
    }
    let path = entry.path();
    if !has_allowed_extension(path, &config.extensions) {
        return false;
    }
    if matches_exclude(path, root, exclude) {
        trace!(path = %path.display(), "excluded by pattern");
        return false;
    }
    true
}

/// Check if an entry is, or links to, a regular file.
///
/// Without `follow_links`, walkdir reports the link's own type, so the target
/// is resolved here. A dangling link resolves to nothing and is skipped.
fn is_regular_file(entry: &DirEntry) -> bool {
    if entry.path_is_symlink() {
        return entry.path().is_file();
    }
    entry.file_type().is_file()
}

/// Check if the file extension is allow-listed. Comparison is case-sensitive;
/// list entries may carry a leading dot.
fn has_allowed_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| {
            extensions
                .iter()
                .any(|allowed| allowed.strip_prefix('.').unwrap_or(allowed.as_str()) == ext)
        })
}

/// Check if a path matches any exclude pattern, either as a root-relative
/// path or by its file name.
fn matches_exclude(path: &Path, root: &Path, exclude: &[Pattern]) -> bool {
    if exclude.is_empty() {
        return false;
    }
    let rel = path.strip_prefix(root).unwrap_or(path).to_string_lossy();
    let name = path.file_name().unwrap_or_default().to_string_lossy();
    exclude
        .iter()
        .any(|pattern| pattern.matches(&rel) || pattern.matches(&name))
}
