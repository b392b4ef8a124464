//! # Check Digits
//!
//! A single check digit is computed by walking a field through a fixed
//! 10×10 transition table (a Damm-style quasigroup). The interim state
//! starts at 0; every decimal digit `d` moves it to `TABLE[interim][d]`;
//! every other character is skipped. The final state is the check digit.
//!
//! Skipping non-digits means filler padding and alphabetic characters in
//! document numbers never move the state. An empty field, or one without
//! any digits, yields `'0'`.

use serde::{Deserialize, Serialize};

use crate::error::ChecksumMismatch;

/// Transition table: `TABLE[interim][digit]` is the next interim value.
pub const TABLE: [[u8; 10]; 10] = [
    [0, 3, 1, 7, 5, 9, 8, 6, 4, 2],
    [7, 0, 9, 2, 1, 5, 4, 8, 6, 3],
    [4, 2, 0, 6, 8, 7, 1, 3, 5, 9],
    [1, 7, 5, 0, 9, 8, 3, 4, 2, 6],
    [6, 1, 2, 3, 0, 4, 5, 9, 7, 8],
    [3, 6, 7, 4, 2, 0, 9, 5, 8, 1],
    [5, 8, 6, 9, 7, 2, 0, 1, 3, 4],
    [8, 9, 4, 5, 3, 6, 2, 0, 1, 7],
    [9, 4, 3, 8, 6, 1, 7, 2, 0, 5],
    [2, 5, 8, 1, 4, 3, 6, 7, 9, 0],
];

/// The four check digits embedded in line 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckedField {
    /// Digit at line 2, offset 9.
    PassportNumber,
    /// Digit at line 2, offset 19.
    BirthDate,
    /// Digit at line 2, offset 27.
    ExpirationDate,
    /// Final digit at line 2, offset 42, over passport number, birth date,
    /// expiration date and personal number.
    Composite,
}

impl CheckedField {
    /// Every checked field, in validation order.
    pub const ALL: [CheckedField; 4] = [
        Self::PassportNumber,
        Self::BirthDate,
        Self::ExpirationDate,
        Self::Composite,
    ];

    /// Human-readable label used in diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            Self::PassportNumber => "passport number",
            Self::BirthDate => "birth date",
            Self::ExpirationDate => "expiration date",
            // The composite digit closes the personal number slot.
            Self::Composite => "personal number",
        }
    }

    /// 1-based line number the check digit sits on.
    pub fn line(&self) -> u8 {
        2
    }
}

impl std::fmt::Display for CheckedField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Compute the check digit for a field.
///
/// Deterministic and total: any string is accepted, non-digits are ignored.
pub fn compute_check_digit(field: &str) -> char {
    let interim = field
        .chars()
        .filter_map(|c| c.to_digit(10))
        .fold(0u8, |interim, digit| TABLE[interim as usize][digit as usize]);
    char::from(b'0' + interim)
}

/// Returns `true` iff `expected` is the check digit of `field`.
pub fn validate_check_digit(field: &str, expected: char) -> bool {
    compute_check_digit(field) == expected
}

/// Validate `embedded` against `value`, reporting a mismatch for `field`.
///
/// # Errors
///
/// Returns a [`ChecksumMismatch`] carrying the computed digit as
/// `expected` and the embedded digit as `actual`.
pub fn verify(field: CheckedField, value: &str, embedded: char) -> Result<(), ChecksumMismatch> {
    let computed = compute_check_digit(value);
    if computed != embedded {
        return Err(ChecksumMismatch {
            field,
            line: field.line(),
            expected: computed,
            actual: embedded,
        });
    }
    Ok(())
}
