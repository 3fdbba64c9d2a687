//! Validation source strategies.
//!
//! Only the filesystem walk exists today; the check itself works on byte
//! slices and does not care where they came from.

pub mod fs;
