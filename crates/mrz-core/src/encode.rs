//! # Encoder
//!
//! Formats a field mapping into the two 44-character lines and embeds the
//! four check digits. Every field is written into its fixed slot: shorter
//! values are padded with filler, longer values are truncated, so the
//! layout never shifts. Check digits are computed over the slot contents
//! as written, which is what the decoder will read back.
//!
//! ## Absent fields
//!
//! [`EncodePolicy::FillDefaults`] substitutes the demo values from
//! [`Field::default_value`] and never fails. [`EncodePolicy::Strict`]
//! rejects the first absent field in record order.

use serde::{Deserialize, Serialize};

use crate::checksum::compute_check_digit;
use crate::error::EncodeError;
use crate::layout::{self, fit, FILLER, LINE_LEN};
use crate::name::spaces_to_filler;
use crate::record::{Field, MrzFields, MrzLines, MrzRecord};

/// How [`encode`] treats fields missing from the mapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncodePolicy {
    /// Fill absent fields with [`Field::default_value`].
    #[default]
    FillDefaults,
    /// Fail with [`EncodeError::MissingField`] on the first absent field.
    Strict,
}

/// Encode a field mapping into a two-line MRZ.
///
/// # Errors
///
/// Under [`EncodePolicy::Strict`], returns [`EncodeError::MissingField`]
/// naming the first absent field in record order. Never fails under
/// [`EncodePolicy::FillDefaults`].
pub fn encode(fields: &MrzFields, policy: EncodePolicy) -> Result<MrzLines, EncodeError> {
    let value = |field| resolve(fields, field, policy);

    let parts = Parts {
        document_type: value(Field::DocumentType)?,
        issuing_country: value(Field::IssuingCountry)?,
        name: value(Field::Name)?,
        passport_number: value(Field::PassportNumber)?,
        nationality: value(Field::Nationality)?,
        birth_date: value(Field::BirthDate)?,
        gender: value(Field::Gender)?,
        expiration_date: value(Field::ExpirationDate)?,
        personal_number: value(Field::PersonalNumber)?,
    };
    Ok(parts.assemble())
}

/// Encode a complete record. Infallible: every field is present.
pub fn encode_record(record: &MrzRecord) -> MrzLines {
    Parts {
        document_type: &record.document_type,
        issuing_country: &record.issuing_country,
        name: &record.name,
        passport_number: &record.passport_number,
        nationality: &record.nationality,
        birth_date: &record.birth_date,
        gender: &record.gender,
        expiration_date: &record.expiration_date,
        personal_number: &record.personal_number,
    }
    .assemble()
}

fn resolve(fields: &MrzFields, field: Field, policy: EncodePolicy) -> Result<&str, EncodeError> {
    match (fields.get(field), policy) {
        (Some(v), _) => Ok(v),
        (None, EncodePolicy::FillDefaults) => Ok(field.default_value()),
        (None, EncodePolicy::Strict) => Err(EncodeError::MissingField(field)),
    }
}

struct Parts<'a> {
    document_type: &'a str,
    issuing_country: &'a str,
    name: &'a str,
    passport_number: &'a str,
    nationality: &'a str,
    birth_date: &'a str,
    gender: &'a str,
    expiration_date: &'a str,
    personal_number: &'a str,
}

impl Parts<'_> {
    fn assemble(&self) -> MrzLines {
        let mut line1 = slot(self.document_type, layout::DOCUMENT_TYPE.len);
        line1.push_str(&slot(self.issuing_country, layout::ISSUING_COUNTRY.len));
        line1.push_str(&spaces_to_filler(self.name));
        let line1 = fit(&line1, LINE_LEN);

        let passport_number = slot(self.passport_number, layout::PASSPORT_NUMBER.len);
        let birth_date = slot(self.birth_date, layout::BIRTH_DATE.len);
        let expiration_date = slot(self.expiration_date, layout::EXPIRATION_DATE.len);
        let personal_number = slot(self.personal_number, layout::PERSONAL_NUMBER.len);

        let mut line2 = String::with_capacity(LINE_LEN);
        line2.push_str(&passport_number);
        line2.push(compute_check_digit(&passport_number));
        line2.push_str(&slot(self.nationality, layout::NATIONALITY.len));
        line2.push_str(&birth_date);
        line2.push(compute_check_digit(&birth_date));
        line2.push_str(&slot(self.gender, layout::GENDER.len));
        line2.push_str(&expiration_date);
        line2.push(compute_check_digit(&expiration_date));
        line2.push_str(&personal_number);

        let composite = [
            passport_number.as_str(),
            birth_date.as_str(),
            expiration_date.as_str(),
            personal_number.as_str(),
        ]
        .concat();
        line2.push(compute_check_digit(&composite));
        line2.push(FILLER);

        MrzLines::new(line1, fit(&line2, LINE_LEN))
    }
}

/// Writes `value` into a slot of `width` columns with spaces as filler.
fn slot(value: &str, width: usize) -> String {
    fit(&spaces_to_filler(value), width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode;

    fn tjk_fields() -> MrzFields {
        MrzFields::new()
            .with(Field::DocumentType, "P")
            .with(Field::IssuingCountry, "TJK")
            .with(Field::Name, "COMBS<<ADDISON<JANE")
            .with(Field::PassportNumber, "V855996J7")
            .with(Field::Nationality, "TJK")
            .with(Field::BirthDate, "720916")
            .with(Field::Gender, "M")
            .with(Field::ExpirationDate, "090507")
            .with(Field::PersonalNumber, "MI797251T")
    }

    #[test]
    fn encodes_known_pair() {
        let lines = encode(&tjk_fields(), EncodePolicy::Strict).unwrap();
        assert_eq!(lines.line1, "P<TJKCOMBS<<ADDISON<JANE<<<<<<<<<<<<<<<<<<<<");
        assert_eq!(lines.line2, "V855996J77TJK7209168M0905071MI797251T<<<<<4<");
    }

    #[test]
    fn both_lines_are_exactly_44() {
        let lines = encode(&tjk_fields(), EncodePolicy::FillDefaults).unwrap();
        assert_eq!(lines.line1.len(), LINE_LEN);
        assert_eq!(lines.line2.len(), LINE_LEN);
    }

    #[test]
    fn empty_mapping_fills_defaults() {
        let lines = encode(&MrzFields::new(), EncodePolicy::FillDefaults).unwrap();
        assert_eq!(lines.line1, "P<UTODOE<<JOHN<QUINCY<<<<<<<<<<<<<<<<<<<<<<<");
        assert_eq!(lines.line2, "L898902C36UTO8001016M2501014123456789<<<<<0<");
    }

    #[test]
    fn strict_reports_first_missing_field() {
        assert_eq!(
            encode(&MrzFields::new(), EncodePolicy::Strict),
            Err(EncodeError::MissingField(Field::DocumentType))
        );

        let mut fields = tjk_fields();
        fields.birth_date = None;
        fields.personal_number = None;
        assert_eq!(
            encode(&fields, EncodePolicy::Strict),
            Err(EncodeError::MissingField(Field::BirthDate))
        );
    }

    #[test]
    fn default_policy_is_fill_defaults() {
        assert_eq!(EncodePolicy::default(), EncodePolicy::FillDefaults);
    }

    #[test]
    fn spaces_in_name_become_filler() {
        let fields = tjk_fields().with(Field::Name, "COMBS ADDISON JANE");
        let lines = encode(&fields, EncodePolicy::Strict).unwrap();
        assert!(lines.line1.starts_with("P<TJKCOMBS<ADDISON<JANE<"));
    }

    #[test]
    fn long_name_is_truncated_to_line_width() {
        let fields = tjk_fields().with(Field::Name, "A".repeat(60));
        let lines = encode(&fields, EncodePolicy::Strict).unwrap();
        assert_eq!(lines.line1.len(), LINE_LEN);
        assert!(lines.line1.ends_with('A'));
    }

    #[test]
    fn two_character_document_type_keeps_layout() {
        let fields = tjk_fields().with(Field::DocumentType, "PD");
        let lines = encode(&fields, EncodePolicy::Strict).unwrap();
        assert!(lines.line1.starts_with("PDTJKCOMBS"));
        let record = decode(&lines.line1, &lines.line2).unwrap();
        assert_eq!(record.document_type, "PD");
        assert_eq!(record.issuing_country, "TJK");
    }

    #[test]
    fn short_passport_number_is_padded() {
        let fields = tjk_fields().with(Field::PassportNumber, "AB12");
        let lines = encode(&fields, EncodePolicy::Strict).unwrap();
        assert!(lines.line2.starts_with("AB12<<<<<"));
        let record = decode(&lines.line1, &lines.line2).unwrap();
        assert_eq!(record.passport_number, "AB12");
    }

    #[test]
    fn personal_number_spaces_become_filler() {
        let fields = tjk_fields().with(Field::PersonalNumber, "MI 797");
        let lines = encode(&fields, EncodePolicy::Strict).unwrap();
        assert_eq!(&lines.line2[28..42], "MI<797<<<<<<<<");
    }

    #[test]
    fn spaces_in_any_field_become_filler() {
        let fields = tjk_fields()
            .with(Field::IssuingCountry, "T K")
            .with(Field::Nationality, "D E")
            .with(Field::Gender, " ");
        let lines = encode(&fields, EncodePolicy::Strict).unwrap();
        assert!(!lines.line1.contains(' '));
        assert!(!lines.line2.contains(' '));
        assert!(lines.line1.starts_with("P<T<K"));
        assert_eq!(&lines.line2[10..13], "D<E");
        assert_eq!(&lines.line2[20..21], "<");
        assert!(decode(&lines.line1, &lines.line2).is_ok());
    }

    #[test]
    fn encode_record_matches_mapping_encode() {
        let record = decode(
            "P<TJKCOMBS<<ADDISON<JANE<<<<<<<<<<<<<<<<<<<<",
            "V855996J77TJK7209168M0905071MI797251T<<<<<4<",
        )
        .unwrap();
        let direct = encode_record(&record);
        let via_fields = encode(&MrzFields::from(&record), EncodePolicy::Strict).unwrap();
        assert_eq!(direct, via_fields);
        // The normalized name encodes with single filler separators.
        assert!(direct.line1.starts_with("P<TJKCOMBS<ADDISON<JANE<"));
        assert_eq!(direct.line2, "V855996J77TJK7209168M0905071MI797251T<<<<<4<");
    }

    #[test]
    fn policy_serde_names() {
        let s = serde_json::to_string(&EncodePolicy::FillDefaults).unwrap();
        assert_eq!(s, "\"fill_defaults\"");
        let p: EncodePolicy = serde_json::from_str("\"strict\"").unwrap();
        assert_eq!(p, EncodePolicy::Strict);
    }
}
