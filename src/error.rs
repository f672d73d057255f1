//! Error taxonomy for the MANS codec core.
//!
//! Mirrors the teacher's `Lz4FError` (`frame/types.rs`): a flat `Copy` enum,
//! a hand-written `Display` impl, and a blanket `std::error::Error` impl.
//! No nested causes — per spec, every error is fatal and surfaces directly
//! at the public API boundary.

use std::fmt;

/// Errors returned by [`crate::compress`] / [`crate::decompress`] and the
/// module-level encode/decode functions that back them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MansError {
    /// A container was shorter than its own header declared.
    Truncated {
        /// Byte length promised by the header / a length field.
        expected: usize,
        /// Byte length actually available.
        actual: usize,
    },
    /// The outer MANS codec tag was neither `1` (ADM+PANS) nor `2` (PANS-only).
    BadCodec(u8),
    /// A PANS or ADM header failed a structural invariant (magic, precision,
    /// or one of the `len1..len4` relations in the ADM `FileHeader`).
    BadHeader(&'static str),
}

impl fmt::Display for MansError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MansError::Truncated { expected, actual } => write!(
                f,
                "truncated container: expected at least {expected} bytes, found {actual}"
            ),
            MansError::BadCodec(tag) => write!(f, "unknown MANS codec tag: {tag}"),
            MansError::BadHeader(msg) => write!(f, "malformed container header: {msg}"),
        }
    }
}

impl std::error::Error for MansError {}

/// Convenience alias used throughout the codec core.
pub type Result<T> = std::result::Result<T, MansError>;
