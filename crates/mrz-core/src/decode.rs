//! # Decoder
//!
//! Slices the two raw lines by the fixed [`layout`](crate::layout), then
//! verifies the four check digits in a fixed order:
//!
//! 1. passport number
//! 2. birth date
//! 3. expiration date
//! 4. composite (passport number + birth date + expiration date +
//!    personal number)
//!
//! The first failure stops decoding. Later digits are not inspected, so a
//! pair with several bad digits always reports the earliest one.

use crate::checksum::{verify, CheckedField};
use crate::error::{DecodeError, Malformation};
use crate::layout::{self, Slot, LINE1_MIN_LEN, LINE2_MIN_LEN, LINE_LEN};
use crate::name::filler_to_spaces;
use crate::record::MrzRecord;

/// Decode a two-line passport MRZ.
///
/// # Errors
///
/// - [`DecodeError::MissingData`] if either line is empty.
/// - [`DecodeError::MalformedLine`] if a line is not ASCII or ends before
///   the last slot it must supply (5 characters for line 1, 43 for line 2).
/// - [`DecodeError::ChecksumMismatch`] for the first check digit that does
///   not verify.
pub fn decode(line1: &str, line2: &str) -> Result<MrzRecord, DecodeError> {
    if line1.is_empty() || line2.is_empty() {
        return Err(DecodeError::MissingData);
    }
    check_shape(1, line1, LINE1_MIN_LEN)?;
    check_shape(2, line2, LINE2_MIN_LEN)?;

    let document_type = layout::strip_filler(take(layout::DOCUMENT_TYPE, line1)?);
    let issuing_country = take(layout::ISSUING_COUNTRY, line1)?;
    let name = filler_to_spaces(name_slot(line1));

    let passport_number = take(layout::PASSPORT_NUMBER, line2)?;
    let passport_check = take_char(layout::PASSPORT_CHECK, line2)?;
    let nationality = take(layout::NATIONALITY, line2)?;
    let birth_date = take(layout::BIRTH_DATE, line2)?;
    let birth_check = take_char(layout::BIRTH_CHECK, line2)?;
    let gender = take(layout::GENDER, line2)?;
    let expiration_date = take(layout::EXPIRATION_DATE, line2)?;
    let expiration_check = take_char(layout::EXPIRATION_CHECK, line2)?;
    let personal_number = layout::strip_trailing_filler(take(layout::PERSONAL_NUMBER, line2)?);
    let final_check = take_char(layout::FINAL_CHECK, line2)?;

    verify(CheckedField::PassportNumber, passport_number, passport_check)?;
    verify(CheckedField::BirthDate, birth_date, birth_check)?;
    verify(CheckedField::ExpirationDate, expiration_date, expiration_check)?;

    let composite = [passport_number, birth_date, expiration_date, personal_number].concat();
    verify(CheckedField::Composite, &composite, final_check)?;

    Ok(MrzRecord {
        document_type: document_type.to_string(),
        issuing_country: issuing_country.to_string(),
        name,
        passport_number: layout::strip_filler(passport_number).to_string(),
        nationality: nationality.to_string(),
        birth_date: birth_date.to_string(),
        gender: gender.to_string(),
        expiration_date: expiration_date.to_string(),
        personal_number: personal_number.to_string(),
    })
}

fn check_shape(line: u8, text: &str, required: usize) -> Result<(), DecodeError> {
    if !text.is_ascii() {
        return Err(DecodeError::MalformedLine {
            line,
            reason: Malformation::NonAscii,
        });
    }
    if text.len() < required {
        return Err(DecodeError::MalformedLine {
            line,
            reason: Malformation::TooShort {
                required,
                found: text.len(),
            },
        });
    }
    Ok(())
}

fn take(slot: Slot, text: &str) -> Result<&str, DecodeError> {
    slot.slice(text).ok_or(DecodeError::MalformedLine {
        line: slot.line,
        reason: Malformation::TooShort {
            required: slot.end(),
            found: text.len(),
        },
    })
}

fn take_char(slot: Slot, text: &str) -> Result<char, DecodeError> {
    let s = take(slot, text)?;
    s.chars().next().ok_or(DecodeError::MalformedLine {
        line: slot.line,
        reason: Malformation::TooShort {
            required: slot.end(),
            found: text.len(),
        },
    })
}

/// The name slot, clipped to the line width. Line 1 may end anywhere past
/// the issuing country; a short line simply has a short name.
fn name_slot(line1: &str) -> &str {
    let end = line1.len().min(LINE_LEN);
    line1.get(layout::NAME.start..end).unwrap_or("")
}
