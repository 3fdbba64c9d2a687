//! Byte-level UTF-8 checks.

use std::fmt::Write as _;

/// Bytes shown on each side of the first invalid byte.
pub const WINDOW_RADIUS: usize = 16;

/// Location of the first invalid UTF-8 sequence in a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidSequence {
    /// Byte offset of the first byte that does not start a valid sequence.
    pub offset: usize,
    /// `true` when the buffer ends in the middle of a multi-byte sequence.
    pub incomplete: bool,
}

/// Find the first invalid sequence, or `None` if `bytes` is valid UTF-8.
#[must_use]
pub fn first_invalid(bytes: &[u8]) -> Option<InvalidSequence> {
    std::str::from_utf8(bytes).err().map(|e| InvalidSequence {
        offset: e.valid_up_to(),
        incomplete: e.error_len().is_none(),
    })
}

/// Bytes `[offset - 16, offset + 16)`, clipped to the buffer.
#[must_use]
pub fn window_around(bytes: &[u8], offset: usize) -> &[u8] {
    let end = offset.saturating_add(WINDOW_RADIUS).min(bytes.len());
    let start = offset.saturating_sub(WINDOW_RADIUS).min(end);
    &bytes[start..end]
}

/// Lowercase hex pairs separated by single spaces, e.g. `ff fe 41`.
#[must_use]
pub fn hex_pairs(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        // Writing into a String cannot fail.
        let _ = write!(out, "{b:02x}");
    }
    out
}
