//! Validation report types.

use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};

use crate::utf8;

/// A candidate file whose content is not valid UTF-8.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct Violation {
    /// The offending file.
    pub file: PathBuf,
    /// Byte offset of the first invalid byte.
    pub offset: usize,
    /// Raw bytes around `offset` (16 before through 16 after, clipped).
    #[serde(serialize_with = "serialize_hex")]
    pub bytes_around: Vec<u8>,
    /// The file ends in the middle of a multi-byte sequence.
    pub incomplete: bool,
}

impl Violation {
    /// Inspect `content` of `file`; `None` when it is valid UTF-8.
    #[must_use]
    pub fn detect(file: &Path, content: &[u8]) -> Option<Self> {
        let invalid = utf8::first_invalid(content)?;
        Some(Self {
            file: file.to_path_buf(),
            offset: invalid.offset,
            bytes_around: utf8::window_around(content, invalid.offset).to_vec(),
            incomplete: invalid.incomplete,
        })
    }

    /// Hex rendering of `bytes_around`.
    #[must_use]
    pub fn hex_window(&self) -> String {
        utf8::hex_pairs(&self.bytes_around)
    }

    /// Two report lines: path with offset, then the indented byte dump.
    #[must_use]
    pub fn format_human_readable(&self) -> String {
        format!(
            "- {} @ byte offset {}\n  bytes around: {}",
            self.file.display(),
            self.offset,
            self.hex_window()
        )
    }
}

fn serialize_hex<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&utf8::hex_pairs(bytes))
}

/// Result of a validation run.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct ValidationReport {
    /// Number of candidate files read and checked.
    pub scanned_files: usize,
    /// Whether every candidate file is valid UTF-8.
    pub ok: bool,
    /// Violations in traversal order.
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    /// Build a report; `ok` is derived from `violations`.
    #[must_use]
    pub fn new(scanned_files: usize, violations: Vec<Violation>) -> Self {
        Self {
            scanned_files,
            ok: violations.is_empty(),
            violations,
        }
    }

    /// Number of files with invalid content.
    #[must_use]
    pub fn violations_count(&self) -> usize {
        self.violations.len()
    }
}
