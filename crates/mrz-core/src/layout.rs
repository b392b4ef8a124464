//! # Field Layout
//!
//! The single source of truth for where each field lives in the two
//! 44-character lines. Offsets are byte offsets; lines are ASCII.
//!
//! | Line | Offset | Length | Slot |
//! |---|---|---|---|
//! | 1 | 0 | 2 | document type |
//! | 1 | 2 | 3 | issuing country |
//! | 1 | 5 | 39 | name |
//! | 2 | 0 | 9 | passport number |
//! | 2 | 9 | 1 | passport check digit |
//! | 2 | 10 | 3 | nationality |
//! | 2 | 13 | 6 | birth date |
//! | 2 | 19 | 1 | birth check digit |
//! | 2 | 20 | 1 | gender |
//! | 2 | 21 | 6 | expiration date |
//! | 2 | 27 | 1 | expiration check digit |
//! | 2 | 28 | 14 | personal number |
//! | 2 | 42 | 1 | final check digit |

/// Width of each MRZ line.
pub const LINE_LEN: usize = 44;

/// Padding and separator character.
pub const FILLER: char = '<';

/// A fixed region of one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    /// 1-based line number.
    pub line: u8,
    /// Byte offset of the first character.
    pub start: usize,
    /// Width in characters.
    pub len: usize,
}

impl Slot {
    const fn new(line: u8, start: usize, len: usize) -> Self {
        Self { line, start, len }
    }

    /// One past the last byte of the slot.
    pub const fn end(&self) -> usize {
        self.start + self.len
    }

    /// Slice this slot out of `line`.
    ///
    /// Returns `None` if the line is too short or the slot does not fall on
    /// character boundaries.
    pub fn slice<'a>(&self, line: &'a str) -> Option<&'a str> {
        line.get(self.start..self.end())
    }

    /// The single character at the start of this slot.
    pub fn char_at(&self, line: &str) -> Option<char> {
        self.slice(line).and_then(|s| s.chars().next())
    }
}

pub const DOCUMENT_TYPE: Slot = Slot::new(1, 0, 2);
pub const ISSUING_COUNTRY: Slot = Slot::new(1, 2, 3);
pub const NAME: Slot = Slot::new(1, 5, 39);

pub const PASSPORT_NUMBER: Slot = Slot::new(2, 0, 9);
pub const PASSPORT_CHECK: Slot = Slot::new(2, 9, 1);
pub const NATIONALITY: Slot = Slot::new(2, 10, 3);
pub const BIRTH_DATE: Slot = Slot::new(2, 13, 6);
pub const BIRTH_CHECK: Slot = Slot::new(2, 19, 1);
pub const GENDER: Slot = Slot::new(2, 20, 1);
pub const EXPIRATION_DATE: Slot = Slot::new(2, 21, 6);
pub const EXPIRATION_CHECK: Slot = Slot::new(2, 27, 1);
pub const PERSONAL_NUMBER: Slot = Slot::new(2, 28, 14);
pub const FINAL_CHECK: Slot = Slot::new(2, 42, 1);

/// Shortest line 1 that still carries document type and issuing country.
/// The name slot may be partially or entirely absent.
pub const LINE1_MIN_LEN: usize = ISSUING_COUNTRY.end();

/// Shortest line 2 that still carries the final check digit.
pub const LINE2_MIN_LEN: usize = FINAL_CHECK.end();

/// Left-justify `value` to exactly `width` characters, padding with filler
/// and truncating anything past the width.
pub fn fit(value: &str, width: usize) -> String {
    let mut out: String = value.chars().take(width).collect();
    let short = width - out.chars().count();
    out.extend(std::iter::repeat(FILLER).take(short));
    out
}

/// Remove filler from the right end only.
pub fn strip_trailing_filler(value: &str) -> &str {
    value.trim_end_matches(FILLER)
}

/// Remove filler from both ends.
pub fn strip_filler(value: &str) -> &str {
    value.trim_matches(FILLER)
}
