//! Scan sources: where raw MRZ line pairs come from.
//!
//! [`SimulatedScanner`] stands in for document-reader hardware and always
//! yields the same pair. [`ReaderScanner`] reads two lines from any
//! buffered reader, such as stdin fed by a reader's keyboard-wedge output.

use std::io::BufRead;

use anyhow::{Context, Result};

use mrz_core::{encode_record, Field, MrzLines, MrzRecord};

/// A source of raw MRZ line pairs.
pub trait ScanSource {
    /// Produce the next line pair.
    fn scan(&mut self) -> Result<MrzLines>;
}

/// A fixed scan source.
#[derive(Debug, Clone)]
pub struct SimulatedScanner {
    lines: MrzLines,
}

impl SimulatedScanner {
    /// A scanner yielding the encoding of the demo record.
    pub fn new() -> Self {
        let record = MrzRecord {
            document_type: Field::DocumentType.default_value().to_string(),
            issuing_country: Field::IssuingCountry.default_value().to_string(),
            name: Field::Name.default_value().to_string(),
            passport_number: Field::PassportNumber.default_value().to_string(),
            nationality: Field::Nationality.default_value().to_string(),
            birth_date: Field::BirthDate.default_value().to_string(),
            gender: Field::Gender.default_value().to_string(),
            expiration_date: Field::ExpirationDate.default_value().to_string(),
            personal_number: Field::PersonalNumber.default_value().to_string(),
        };
        Self::with_lines(encode_record(&record))
    }

    /// A scanner yielding `lines`.
    pub fn with_lines(lines: MrzLines) -> Self {
        Self { lines }
    }
}

impl Default for SimulatedScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanSource for SimulatedScanner {
    fn scan(&mut self) -> Result<MrzLines> {
        tracing::debug!("simulated scan");
        Ok(self.lines.clone())
    }
}

/// Reads one line pair per scan from a buffered reader.
///
/// Line terminators are stripped. A reader that runs out yields empty
/// lines, which the decoder reports as missing data.
pub struct ReaderScanner<R> {
    reader: R,
}

impl<R: BufRead> ReaderScanner<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    fn next_line(&mut self) -> Result<String> {
        let mut buf = String::new();
        self.reader
            .read_line(&mut buf)
            .context("failed to read MRZ line")?;
        Ok(buf.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl<R: BufRead> ScanSource for ReaderScanner<R> {
    fn scan(&mut self) -> Result<MrzLines> {
        let line1 = self.next_line()?;
        let line2 = self.next_line()?;
        Ok(MrzLines::new(line1, line2))
    }
}
