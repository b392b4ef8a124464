//! # Error Hierarchy
//!
//! Structured error types for the codec, built with `thiserror`.
//! No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! Decoding distinguishes three outcomes a caller must be able to tell
//! apart: the data was missing, the data was too short or not ASCII to
//! slice, or the data sliced cleanly but a check digit did not verify.

use thiserror::Error;

use crate::checksum::CheckedField;
use crate::record::Field;

/// Top-level error type for the codec.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MrzError {
    /// Decoding a raw line pair failed.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Encoding a field mapping failed.
    #[error("encode error: {0}")]
    Encode(#[from] EncodeError),
}

/// Errors produced by [`decode`](crate::decode()).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// One or both lines were empty.
    #[error("MRZ data is missing")]
    MissingData,

    /// A line could not be sliced into the fixed layout.
    #[error("invalid MRZ data format on line {line}: {reason}")]
    MalformedLine {
        /// 1-based line number.
        line: u8,
        /// What was wrong with the line.
        reason: Malformation,
    },

    /// A check digit did not verify. Decoding stopped at this field.
    #[error(transparent)]
    ChecksumMismatch(#[from] ChecksumMismatch),
}

impl DecodeError {
    /// Returns `true` when the lines were well-formed but a check digit failed.
    pub fn is_checksum_failure(&self) -> bool {
        matches!(self, Self::ChecksumMismatch(_))
    }

    /// Returns `true` when the data was absent, short, or not ASCII.
    pub fn is_format_failure(&self) -> bool {
        matches!(self, Self::MissingData | Self::MalformedLine { .. })
    }
}

/// Reason a line could not be sliced.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Malformation {
    /// The line ends before the last offset it must supply.
    #[error("line is {found} characters, at least {required} required")]
    TooShort {
        /// Minimum length needed to slice every field on the line.
        required: usize,
        /// Actual length of the line.
        found: usize,
    },

    /// The line contains non-ASCII characters, so byte offsets are not
    /// character offsets.
    #[error("line contains non-ASCII characters")]
    NonAscii,
}

/// A check digit that disagrees with the value computed from its field.
///
/// Carries everything a diagnostics sink needs: the field, the line it
/// sits on, the digit the field should have, and the digit that was found.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("mismatch in {field} field on line {line}: expected {expected}, got {actual}")]
pub struct ChecksumMismatch {
    /// Which check digit failed.
    pub field: CheckedField,
    /// 1-based line number the check digit sits on.
    pub line: u8,
    /// Digit computed from the field contents.
    pub expected: char,
    /// Digit embedded in the line.
    pub actual: char,
}

/// Errors produced by [`encode`](crate::encode()).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// A field was absent from the mapping under the strict policy.
    #[error("missing required field: {0}")]
    MissingField(Field),
}
