//! # Record Types
//!
//! [`MrzRecord`] is the decoded entity. [`MrzFields`] is the encoder's
//! input: the same nine fields, each optional, so that a partial mapping
//! (for example a row fetched from a store) can be filled from defaults or
//! rejected, depending on the [`EncodePolicy`](crate::EncodePolicy).
//! [`MrzLines`] is the raw two-line wire form.

use serde::{Deserialize, Serialize};

use crate::error::DecodeError;

/// The nine fields of a two-line passport MRZ, in record order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    DocumentType,
    IssuingCountry,
    Name,
    PassportNumber,
    Nationality,
    BirthDate,
    Gender,
    ExpirationDate,
    PersonalNumber,
}

impl Field {
    /// Every field, in record order.
    pub const ALL: [Field; 9] = [
        Self::DocumentType,
        Self::IssuingCountry,
        Self::Name,
        Self::PassportNumber,
        Self::Nationality,
        Self::BirthDate,
        Self::Gender,
        Self::ExpirationDate,
        Self::PersonalNumber,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::DocumentType => "document type",
            Self::IssuingCountry => "issuing country",
            Self::Name => "name",
            Self::PassportNumber => "passport number",
            Self::Nationality => "nationality",
            Self::BirthDate => "birth date",
            Self::Gender => "gender",
            Self::ExpirationDate => "expiration date",
            Self::PersonalNumber => "personal number",
        }
    }

    /// Demo value used when the field is absent under
    /// [`EncodePolicy::FillDefaults`](crate::EncodePolicy::FillDefaults).
    pub fn default_value(&self) -> &'static str {
        match self {
            Self::DocumentType => "P",
            Self::IssuingCountry => "UTO",
            Self::Name => "DOE<<JOHN<QUINCY",
            Self::PassportNumber => "L898902C3",
            Self::Nationality => "UTO",
            Self::BirthDate => "800101",
            Self::Gender => "M",
            Self::ExpirationDate => "250101",
            Self::PersonalNumber => "123456789",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A decoded two-line passport MRZ.
///
/// Dates are kept as the six-digit `YYMMDD` strings found on the document;
/// the century is not recoverable from the MRZ alone.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MrzRecord {
    /// Document type, at most 2 characters (e.g. `P`).
    pub document_type: String,
    /// Issuing state, 3 characters.
    pub issuing_country: String,
    /// Holder name with components separated by single spaces.
    pub name: String,
    /// Document number, at most 9 characters.
    pub passport_number: String,
    /// Nationality, 3 characters.
    pub nationality: String,
    /// Date of birth, `YYMMDD`.
    pub birth_date: String,
    /// Sex marker, 1 character.
    pub gender: String,
    /// Date of expiry, `YYMMDD`.
    pub expiration_date: String,
    /// Optional personal number, at most 14 characters.
    pub personal_number: String,
}

impl MrzRecord {
    /// The value of one field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::DocumentType => &self.document_type,
            Field::IssuingCountry => &self.issuing_country,
            Field::Name => &self.name,
            Field::PassportNumber => &self.passport_number,
            Field::Nationality => &self.nationality,
            Field::BirthDate => &self.birth_date,
            Field::Gender => &self.gender,
            Field::ExpirationDate => &self.expiration_date,
            Field::PersonalNumber => &self.personal_number,
        }
    }
}

/// A field mapping for the encoder. Absent fields are `None`.
///
/// Deserializes from snake_case keys and also from the title-case keys of
/// the legacy record mapping (`"Document Type"`, `"Date of Birth"`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MrzFields {
    #[serde(alias = "Document Type", skip_serializing_if = "Option::is_none")]
    pub document_type: Option<String>,
    #[serde(alias = "Issuing Country", skip_serializing_if = "Option::is_none")]
    pub issuing_country: Option<String>,
    #[serde(alias = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(alias = "Passport Number", skip_serializing_if = "Option::is_none")]
    pub passport_number: Option<String>,
    #[serde(alias = "Nationality", skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    #[serde(alias = "Date of Birth", skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(alias = "Gender", skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(alias = "Expiration Date", skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
    #[serde(alias = "Personal Number", skip_serializing_if = "Option::is_none")]
    pub personal_number: Option<String>,
}

impl MrzFields {
    /// An empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// The value of one field, if present.
    pub fn get(&self, field: Field) -> Option<&str> {
        let slot = match field {
            Field::DocumentType => &self.document_type,
            Field::IssuingCountry => &self.issuing_country,
            Field::Name => &self.name,
            Field::PassportNumber => &self.passport_number,
            Field::Nationality => &self.nationality,
            Field::BirthDate => &self.birth_date,
            Field::Gender => &self.gender,
            Field::ExpirationDate => &self.expiration_date,
            Field::PersonalNumber => &self.personal_number,
        };
        slot.as_deref()
    }

    /// Set one field, builder style.
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        let value = Some(value.into());
        match field {
            Field::DocumentType => self.document_type = value,
            Field::IssuingCountry => self.issuing_country = value,
            Field::Name => self.name = value,
            Field::PassportNumber => self.passport_number = value,
            Field::Nationality => self.nationality = value,
            Field::BirthDate => self.birth_date = value,
            Field::Gender => self.gender = value,
            Field::ExpirationDate => self.expiration_date = value,
            Field::PersonalNumber => self.personal_number = value,
        }
        self
    }

    /// The first field in record order that is absent.
    pub fn first_missing(&self) -> Option<Field> {
        Field::ALL.into_iter().find(|f| self.get(*f).is_none())
    }
}

impl From<MrzRecord> for MrzFields {
    fn from(r: MrzRecord) -> Self {
        Self {
            document_type: Some(r.document_type),
            issuing_country: Some(r.issuing_country),
            name: Some(r.name),
            passport_number: Some(r.passport_number),
            nationality: Some(r.nationality),
            birth_date: Some(r.birth_date),
            gender: Some(r.gender),
            expiration_date: Some(r.expiration_date),
            personal_number: Some(r.personal_number),
        }
    }
}

impl From<&MrzRecord> for MrzFields {
    fn from(r: &MrzRecord) -> Self {
        r.clone().into()
    }
}

/// The raw two-line MRZ.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MrzLines {
    pub line1: String,
    pub line2: String,
}

impl MrzLines {
    pub fn new(line1: impl Into<String>, line2: impl Into<String>) -> Self {
        Self {
            line1: line1.into(),
            line2: line2.into(),
        }
    }

    /// Decode these lines. See [`decode`](crate::decode()).
    pub fn decode(&self) -> Result<MrzRecord, DecodeError> {
        crate::decode(&self.line1, &self.line2)
    }

    /// Split into `(line1, line2)`.
    pub fn into_pair(self) -> (String, String) {
        (self.line1, self.line2)
    }
}

impl std::fmt::Display for MrzLines {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n{}", self.line1, self.line2)
    }
}
